use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::dimensions::{CategoryDimension, DimensionRegistry};
use crate::error::ConfigError;
use crate::report::{DEFAULT_ROWS_PER_PAGE, OutputFormat, RenderSettings};

#[derive(Debug, Parser)]
#[command(name = "monografi", version, about = "Cross-tabulate a resident roster by RW/RT and category")]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build reports from a roster file.
    Run(RunArgs),
    /// List registered dimensions and their labels.
    Dimensions,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Roster file: .json, .csv or .tsv, optionally gzipped.
    #[arg(long)]
    pub roster: PathBuf,

    /// Output directory.
    #[arg(long)]
    pub out: PathBuf,

    /// Dimension ids, comma separated, or `all`.
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub dimension: Vec<String>,

    /// Evaluation date for age brackets and document names (YYYY-MM-DD).
    /// Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,

    /// Body rows per page in the paged document.
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_PAGE as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub rows_per_page: u64,

    /// Name of an RW head shown in that RW's header, as RW=NAME. Repeatable.
    #[arg(long = "rw-head", value_parser = parse_rw_head)]
    pub rw_heads: Vec<(String, String)>,

    /// Artifacts to write, comma separated. Defaults to all.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub format: Vec<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionSelection {
    All,
    Only(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub roster: PathBuf,
    pub out_dir: PathBuf,
    pub dimensions: DimensionSelection,
    pub evaluated_on: NaiveDate,
    pub formats: Vec<OutputFormat>,
    pub settings: RenderSettings,
}

impl RunArgs {
    /// `today` is only used when `--as-of` is absent.
    pub fn into_config(self, today: NaiveDate) -> RunConfig {
        let dimensions = if self.dimension.is_empty()
            || self.dimension.iter().any(|d| d.eq_ignore_ascii_case("all"))
        {
            DimensionSelection::All
        } else {
            let mut ids = Vec::with_capacity(self.dimension.len());
            for id in self.dimension {
                let id = id.trim().to_string();
                if !id.is_empty() && !ids.contains(&id) {
                    ids.push(id);
                }
            }
            DimensionSelection::Only(ids)
        };

        let mut formats = self.format;
        formats.sort();
        formats.dedup();
        if formats.is_empty() {
            formats = vec![OutputFormat::Json, OutputFormat::Text, OutputFormat::Paged];
        }

        let rows_per_page = usize::try_from(self.rows_per_page).unwrap_or(usize::MAX);
        let mut settings = RenderSettings::default().with_rows_per_page(rows_per_page);
        for (rw, name) in &self.rw_heads {
            settings = settings.with_rw_head(rw, name);
        }

        RunConfig {
            roster: self.roster,
            out_dir: self.out,
            dimensions,
            evaluated_on: self.as_of.unwrap_or(today),
            formats,
            settings,
        }
    }
}

impl RunConfig {
    pub fn select<'r>(
        &self,
        registry: &'r DimensionRegistry,
    ) -> Result<Vec<&'r CategoryDimension>, ConfigError> {
        match &self.dimensions {
            DimensionSelection::All => Ok(registry.iter().collect()),
            DimensionSelection::Only(ids) => ids.iter().map(|id| registry.require(id)).collect(),
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got `{raw}`: {e}"))
}

fn parse_rw_head(raw: &str) -> Result<(String, String), String> {
    let (rw, name) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected RW=NAME, got `{raw}`"))?;
    let (rw, name) = (rw.trim(), name.trim());
    if rw.is_empty() || name.is_empty() {
        return Err(format!("expected RW=NAME, got `{raw}`"));
    }
    Ok((rw.to_string(), name.to_string()))
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
