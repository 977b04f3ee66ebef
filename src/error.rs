//! Error types for the ingest pipeline.
//!
//! - [`IngestError`] aborts a whole stage (file missing, header unreadable).
//! - [`RowError`] explains why a single row was skipped; the stage carries on.

use std::path::PathBuf;
use thiserror::Error;

use crate::projection::ProjectionError;

/// Stage-level failure. Surfaces to the caller.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read header of {origin}: {source}")]
    Header {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("{origin} is missing required column '{column}'")]
    MissingColumn { origin: String, column: String },

    #[error("blocking task failed: {0}")]
    Task(String),
}

/// Reason a single row was excluded from the network.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RowError {
    #[error("unreadable row: {0}")]
    Unreadable(String),

    #[error("bad coordinates: {0}")]
    Coordinates(#[from] ProjectionError),

    #[error("empty substation name")]
    EmptyName,

    #[error("duplicate substation '{0}'")]
    DuplicateSubstation(String),

    #[error("malformed line code '{0}'")]
    MalformedCode(String),

    #[error("unknown feeder code in '{label}': from={from}, to={to}")]
    UnknownFeederCode {
        label: String,
        from: String,
        to: String,
    },

    #[error("endpoint '{0}' is not a known substation")]
    MissingEndpoint(String),

    #[error("duplicate line '{0}'")]
    DuplicateLine(String),
}

pub type IngestResult<T> = Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_from_projection() {
        let err: RowError = ProjectionError::NotNumeric("abc".into()).into();
        assert_eq!(err.to_string(), "bad coordinates: coordinate 'abc' is not numeric");
    }

    #[test]
    fn test_missing_column_message() {
        let err = IngestError::MissingColumn {
            origin: "Sites.csv".into(),
            column: "MXLOCATION".into(),
        };
        assert_eq!(err.to_string(), "Sites.csv is missing required column 'MXLOCATION'");
    }
}
