//! CSV loaders for the utility datasets
//!
//! Each dataset has a row type with fixed, hand-known column names. Numeric
//! cells are kept as text here and parsed per row further down the
//! pipeline, so one bad cell never aborts a file.

pub mod transpower;
pub mod vector;

use serde::de::DeserializeOwned;
use std::{fs::File, io::Read, path::Path};
use tracing::{info, warn};

use crate::error::{IngestError, IngestResult, RowError};

pub use transpower::{TranspowerLineRow, TranspowerSiteRow};
pub use vector::{VectorFeederRow, VectorSiteRow};

/// A typed CSV row with a fixed header contract
pub trait CsvRecord: DeserializeOwned {
    /// Columns that must be present in the header
    const REQUIRED_COLUMNS: &'static [&'static str];
}

/// Read every row of the CSV file at `path`
pub fn read_rows<T: CsvRecord>(path: &Path) -> IngestResult<Vec<T>> {
    let file = File::open(path).map_err(|e| IngestError::Open {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    let origin = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    read_rows_from(file, &origin)
}

/// Read rows from any reader; `origin` names the source in logs and errors
pub fn read_rows_from<R: Read, T: CsvRecord>(reader: R, origin: &str) -> IngestResult<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|source| IngestError::Header {
            origin: origin.to_string(),
            source,
        })?
        .clone();

    for column in T::REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(IngestError::MissingColumn {
                origin: origin.to_string(),
                column: (*column).to_string(),
            });
        }
    }

    let rows: Vec<T> = rdr
        .deserialize::<T>()
        .enumerate()
        .filter_map(|(idx, result)| match result {
            Ok(row) => Some(row),
            Err(e) => {
                let err = RowError::Unreadable(e.to_string());
                // +2: 1-based and the header line
                warn!(origin, line = idx + 2, error = %err, "skipping row");
                None
            }
        })
        .collect();

    info!(origin, rows = rows.len(), "loaded CSV");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SITES: &str = "\
MXLOCATION,X,Y,type,description
AHA,1751478,5921654,Substation,Albany
DOB,1700000,5850000,Substation,Dobson
";

    #[test]
    fn test_read_rows_from_str() {
        let rows: Vec<TranspowerSiteRow> = read_rows_from(SITES.as_bytes(), "Sites.csv").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].location, "AHA");
        assert_eq!(rows[0].x, "1751478");
        assert_eq!(rows[1].description, "Dobson");
    }

    #[test]
    fn test_missing_column_aborts() {
        let csv = "MXLOCATION,X,type\nAHA,1,Substation\n";
        let err = read_rows_from::<_, TranspowerSiteRow>(csv.as_bytes(), "Sites.csv").unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "Y"));
    }

    #[test]
    fn test_ragged_row_is_skipped() {
        let csv = "MXLOCATION,X,Y,type,description\nAHA,1,2,Substation,Albany\nBAD,1\n";
        let rows: Vec<TranspowerSiteRow> = read_rows_from(csv.as_bytes(), "Sites.csv").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].location, "AHA");
    }

    #[test]
    fn test_read_rows_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rows::<TranspowerSiteRow>(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Open { .. }));
    }

    #[test]
    fn test_read_rows_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Sites.csv");
        let mut f = File::create(&path).unwrap();
        f.write_all(SITES.as_bytes()).unwrap();

        let rows = read_rows::<TranspowerSiteRow>(&path).unwrap();
        assert_eq!(rows.len(), 2);
    }
}
