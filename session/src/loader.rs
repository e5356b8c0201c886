//! Bulk history loading from CSV.
//!
//! Values are taken verbatim: percentage normalization only applies to
//! manual entries.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;

/// Column read when the caller does not name one.
pub const DEFAULT_COLUMN: &str = "multiplier";

/// Reads the `column` values of a headed CSV stream.
///
/// Every cell must parse to a finite number. Rows are reported 1-based,
/// not counting the header.
pub fn load_csv<R: Read>(reader: R, column: &str) -> Result<Vec<f64>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let col_idx = reader
        .headers()?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| LoadError::MissingColumn(column.to_string()))?;

    let mut values = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let cell = record.get(col_idx).unwrap_or_default();

        let value = cell
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LoadError::InvalidValue {
                row: i + 1,
                value: cell.to_string(),
            })?;

        values.push(value);
    }

    debug!(column, rows = values.len(), "parsed csv column");
    Ok(values)
}

/// Opens `path` and reads its `column` values.
pub fn load_csv_path(path: &Path, column: &str) -> Result<Vec<f64>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let values = load_csv(BufReader::new(file), column)?;
    info!(path = %path.display(), entries = values.len(), "loaded multipliers from file");

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_column() {
        let data = "round,multiplier\n1,1.87\n2,3.10\n3,1.00\n";
        let values = load_csv(data.as_bytes(), DEFAULT_COLUMN).unwrap();
        assert_eq!(values, vec![1.87, 3.10, 1.00]);
    }

    #[test]
    fn tolerates_whitespace_around_cells() {
        let data = "multiplier\n 2.5 \n1.2\n";
        let values = load_csv(data.as_bytes(), DEFAULT_COLUMN).unwrap();
        assert_eq!(values, vec![2.5, 1.2]);
    }

    #[test]
    fn keeps_percentage_values_verbatim() {
        let data = "multiplier\n187\n";
        assert_eq!(load_csv(data.as_bytes(), DEFAULT_COLUMN).unwrap(), vec![187.0]);
    }

    #[test]
    fn missing_column_is_reported() {
        let data = "round,value\n1,2.0\n";
        let err = load_csv(data.as_bytes(), DEFAULT_COLUMN).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(c) if c == "multiplier"));
    }

    #[test]
    fn bad_cell_reports_row() {
        let data = "multiplier\n1.5\nbust\n";
        let err = load_csv(data.as_bytes(), DEFAULT_COLUMN).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { row: 2, ref value } if value == "bust"));
    }

    #[test]
    fn empty_file_body_yields_no_values() {
        let data = "multiplier\n";
        assert!(load_csv(data.as_bytes(), DEFAULT_COLUMN).unwrap().is_empty());
    }
}
