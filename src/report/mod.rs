use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub mod json;
pub mod matrix;
pub mod paged;
pub mod text;

use crate::error::ReportError;
use crate::model::{Report, RwGroup};
use crate::report::json::render_report_json_string;
use crate::report::paged::PagedRenderer;
use crate::report::text::TableRenderer;

pub const DEFAULT_ROWS_PER_PAGE: usize = 30;

/// A consumer of a finished report. Renderers only read the report; they never
/// re-aggregate.
pub trait ReportRenderer {
    type Output;

    fn render(&self, report: &Report) -> Self::Output;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
    Paged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    rows_per_page: usize,
    rw_heads: BTreeMap<String, String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rw_heads: BTreeMap::new(),
        }
    }
}

impl RenderSettings {
    pub fn with_rows_per_page(mut self, rows: usize) -> Self {
        self.rows_per_page = rows.max(1);
        self
    }

    /// Name shown next to an RW in its header. `rw` is normalized first, so
    /// `"1"` and `"001"` address the same RW.
    pub fn with_rw_head(mut self, rw: &str, name: &str) -> Self {
        let key = crate::model::AreaKey::normalize(Some(rw));
        self.rw_heads.insert(key.as_str().to_string(), name.to_string());
        self
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn rw_head(&self, rw: &str) -> Option<&str> {
        self.rw_heads.get(rw).map(String::as_str)
    }

    pub fn rw_heading(&self, group: &RwGroup) -> String {
        let mut heading = format!("RW {} | {} jiwa", group.rw(), group.member_count());
        if let Some(name) = self.rw_head(group.rw().as_str()) {
            heading.push_str(" | Ketua RW: ");
            heading.push_str(name);
        }
        heading
    }
}

pub fn report_title(report: &Report) -> String {
    format!("Monografi Penduduk Berdasarkan {}", report.dimension().title())
}

/// Writes the requested artifacts for one report and returns their paths.
pub fn write_reports(
    report: &Report,
    out_dir: &Path,
    formats: &[OutputFormat],
    settings: &RenderSettings,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;
    let id = report.dimension().id();
    let mut written = Vec::new();

    for format in formats {
        match format {
            OutputFormat::Json => {
                let path = out_dir.join(format!("{id}.json"));
                write_text(&path, &render_report_json_string(report)?)?;
                written.push(path);
            }
            OutputFormat::Text => {
                let path = out_dir.join(format!("{id}.txt"));
                write_text(&path, &TableRenderer::new(settings.clone()).render(report))?;
                written.push(path);
            }
            OutputFormat::Paged => {
                let doc = PagedRenderer::new(settings.clone()).render(report);
                let base = out_dir.join(&doc.filename);
                let layout = base.with_extension("layout.json");
                write_text(&layout, &serde_json::to_string_pretty(&doc)?)?;
                let preview = base.with_extension("txt");
                write_text(&preview, &doc.to_text())?;
                tracing::info!(document = %doc.filename, pages = doc.pages.len(), "paged layout ready");
                written.push(layout);
                written.push(preview);
            }
        }
    }

    for path in &written {
        tracing::debug!(path = %path.display(), "wrote artifact");
    }
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
