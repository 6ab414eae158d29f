use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

pub mod record;

pub use record::{Gender, PersonRecord};

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Csv,
    Tsv,
}

impl RosterFormat {
    /// Detects the format from the file name, looking through a trailing `.gz`.
    pub fn detect(path: &Path) -> Result<Self, InputError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let stem = name.strip_suffix(".gz").unwrap_or(&name);
        if stem.ends_with(".json") {
            Ok(RosterFormat::Json)
        } else if stem.ends_with(".csv") {
            Ok(RosterFormat::Csv)
        } else if stem.ends_with(".tsv") {
            Ok(RosterFormat::Tsv)
        } else {
            Err(InputError::UnsupportedFormat(name))
        }
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Loads a roster snapshot. Record order is preserved.
pub fn load_roster(path: &Path) -> Result<Vec<PersonRecord>, InputError> {
    let format = RosterFormat::detect(path)?;
    let reader = open_maybe_gz(path)?;
    let records = read_roster(reader, format)?;
    tracing::info!(
        path = %path.display(),
        format = ?format,
        records = records.len(),
        "loaded roster"
    );
    Ok(records)
}

pub fn read_roster<R: BufRead>(
    reader: R,
    format: RosterFormat,
) -> Result<Vec<PersonRecord>, InputError> {
    match format {
        RosterFormat::Json => Ok(serde_json::from_reader(reader)?),
        RosterFormat::Csv => read_delimited(reader, b','),
        RosterFormat::Tsv => read_delimited(reader, b'\t'),
    }
}

fn read_delimited<R: BufRead>(reader: R, delimiter: u8) -> Result<Vec<PersonRecord>, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<PersonRecord>() {
        let record = row.map_err(|err| match err.position() {
            Some(pos) => InputError::InvalidRecord {
                line: pos.line(),
                message: err.to_string(),
            },
            None => InputError::Csv(err),
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
