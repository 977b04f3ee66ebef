use serde::Deserialize;

use super::CsvRecord;

/// Row of the Vector zone-substation dataset
#[derive(Debug, Clone, Deserialize)]
pub struct VectorSiteRow {
    #[serde(rename = "OBJECTID", default)]
    pub object_id: String,
    #[serde(rename = "Primary Substation Name")]
    pub name: String,
    pub x: String,
    pub y: String,
}

impl CsvRecord for VectorSiteRow {
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Primary Substation Name", "x", "y"];
}

/// Row of the Vector distribution-feeder dataset.
///
/// `feeder_name` looks like `BKBY H02 - MARA H06`.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorFeederRow {
    #[serde(rename = "Feeder Name")]
    pub feeder_name: String,
    #[serde(rename = "OPVOLTAGE_", default)]
    pub op_voltage: String,
    #[serde(rename = "Shape__Length", default)]
    pub shape_length: String,
}

impl CsvRecord for VectorFeederRow {
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Feeder Name"];
}
