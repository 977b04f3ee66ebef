//! Coordinate projection between the New Zealand national grid and WGS84
//!
//! Source datasets carry NZTM2000 (EPSG:2193) eastings/northings; the web map
//! renders WGS84 (EPSG:4326) latitude/longitude.

pub mod nztm;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use nztm::{nztm_to_wgs84, wgs84_to_nztm};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("coordinate '{0}' is not numeric")]
    NotNumeric(String),

    #[error("coordinate pair ({0}, {1}) is not finite")]
    NonFinite(f64, f64),

    #[error("projected position lat={lat}, lon={lon} is out of range")]
    OutOfRange { lat: f64, lon: f64 },
}

/// Native grid position in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nztm {
    pub x: f64,
    pub y: f64,
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Parse a raw CSV cell into a finite coordinate value
pub fn parse_coordinate(raw: &str) -> Result<f64, ProjectionError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ProjectionError::NotNumeric(trimmed.to_string())),
    }
}

/// Parse both cells of a coordinate pair and project them
pub fn project_cells(x: &str, y: &str) -> Result<(Nztm, LatLon), ProjectionError> {
    let native = Nztm {
        x: parse_coordinate(x)?,
        y: parse_coordinate(y)?,
    };
    let position = nztm_to_wgs84(native.x, native.y)?;
    Ok((native, position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(" 1751478 "), Ok(1751478.0));
        assert_eq!(parse_coordinate("5921654.25"), Ok(5921654.25));
        assert!(matches!(
            parse_coordinate("abc"),
            Err(ProjectionError::NotNumeric(_))
        ));
        assert!(parse_coordinate("").is_err());
        assert!(parse_coordinate("NaN").is_err());
        assert!(parse_coordinate("inf").is_err());
    }

    #[test]
    fn test_project_cells_rejects_bad_cell() {
        let err = project_cells("1751478", "n/a").unwrap_err();
        assert_eq!(err, ProjectionError::NotNumeric("n/a".to_string()));
    }

    #[test]
    fn test_project_cells_keeps_native() {
        let (native, position) = project_cells("1751478", "5921654").unwrap();
        assert_eq!(native, Nztm { x: 1751478.0, y: 5921654.0 });
        assert!(position.is_valid());
    }
}
