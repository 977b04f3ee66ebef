use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Kilovolts;
use crate::projection::{LatLon, Nztm};

/// Which utility dataset a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NetworkSource {
    Transpower,
    Vector,
}

impl NetworkSource {
    pub const ALL: [NetworkSource; 2] = [NetworkSource::Transpower, NetworkSource::Vector];

    pub fn category(&self) -> SubstationCategory {
        match self {
            Self::Transpower => SubstationCategory::Transmission,
            Self::Vector => SubstationCategory::Distribution,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubstationCategory {
    Transmission,
    Distribution,
}

/// A network node. Identity is `name`, unique within one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substation {
    pub name: String,
    pub source: NetworkSource,
    pub category: SubstationCategory,
    /// Free-text type label from the dataset (e.g. `Substation`)
    pub kind: String,
    pub description: String,
    pub nominal_kv: Kilovolts,
    pub nztm: Nztm,
    pub position: LatLon,
}

impl Substation {
    pub fn new(name: impl Into<String>, source: NetworkSource, nztm: Nztm, position: LatLon) -> Self {
        Self {
            name: name.into(),
            source,
            category: source.category(),
            kind: String::new(),
            description: String::new(),
            nominal_kv: Kilovolts::kv(110.0),
            nztm,
            position,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_nominal_kv(mut self, kv: Kilovolts) -> Self {
        self.nominal_kv = kv;
        self
    }
}
