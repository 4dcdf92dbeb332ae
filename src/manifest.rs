use crate::error::{ExtractError, ManifestError};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One extraction request: write pages `start_page..=end_page` (1-based) to `<filename>.pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRow {
    pub filename: String,
    pub start_page: i64,
    pub end_page: i64,
}

/// Read a headerless `filename,start_page,end_page` manifest from disk
pub fn read_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<ManifestRow>, ExtractError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| ExtractError::Manifest {
        path: path.to_path_buf(),
        source: ManifestError::Csv(e.into()),
    })?;

    parse_manifest(file).map_err(|source| ExtractError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse manifest rows, dropping rows with a missing field.
///
/// Fails on the first page field that is not an integer, so either every
/// retained row is returned or none are.
pub fn parse_manifest<R: Read>(reader: R) -> Result<Vec<ManifestRow>, ManifestError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() > 3 {
            return Err(ManifestError::TooManyFields {
                line,
                found: record.len(),
            });
        }

        match parse_row(&record, line)? {
            Some(row) => rows.push(row),
            None => debug!(line, "dropping manifest row with a missing field"),
        }
    }

    Ok(rows)
}

fn parse_row(record: &StringRecord, line: u64) -> Result<Option<ManifestRow>, ManifestError> {
    let (Some(filename), Some(start), Some(end)) = (record.get(0), record.get(1), record.get(2))
    else {
        return Ok(None);
    };

    // whitespace is a value, not a missing field
    if [filename, start, end].iter().any(|field| field.is_empty()) {
        return Ok(None);
    }

    Ok(Some(ManifestRow {
        filename: filename.to_string(),
        start_page: parse_page_number(start, "start_page", line)?,
        end_page: parse_page_number(end, "end_page", line)?,
    }))
}

/// Accept integer literals, and decimals whose fraction is zero (`"3.0"`)
fn parse_page_number(value: &str, column: &'static str, line: u64) -> Result<i64, ManifestError> {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }

    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => Ok(f as i64),
        _ => Err(ManifestError::NotAnInteger {
            line,
            column,
            value: value.to_string(),
        }),
    }
}
