use serde::Deserialize;

use super::CsvRecord;

/// Row of the Transpower `Sites.csv` dataset
#[derive(Debug, Clone, Deserialize)]
pub struct TranspowerSiteRow {
    #[serde(rename = "MXLOCATION")]
    pub location: String,
    #[serde(rename = "X")]
    pub x: String,
    #[serde(rename = "Y")]
    pub y: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

impl CsvRecord for TranspowerSiteRow {
    const REQUIRED_COLUMNS: &'static [&'static str] = &["MXLOCATION", "X", "Y"];
}

/// Row of the Transpower `Transmission_Lines.csv` dataset.
///
/// `location` is a composite code such as `AHA-DOB-A`: the first two tokens
/// are the endpoint sites.
#[derive(Debug, Clone, Deserialize)]
pub struct TranspowerLineRow {
    #[serde(rename = "MXLOCATION")]
    pub location: String,
    #[serde(rename = "designvolt", default)]
    pub design_volt: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

impl CsvRecord for TranspowerLineRow {
    const REQUIRED_COLUMNS: &'static [&'static str] = &["MXLOCATION"];
}
