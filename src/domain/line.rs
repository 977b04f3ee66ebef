use serde::{Deserialize, Serialize};

use super::{Kilometres, Kilovolts, NetworkSource};

/// A network edge between two substations.
///
/// Endpoints are held by the graph; the line itself carries only the
/// attributes read from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub name: String,
    pub source: NetworkSource,
    pub voltage: Kilovolts,
    pub kind: String,
    pub description: String,
    pub length: Kilometres,
}

impl Line {
    pub fn new(name: impl Into<String>, source: NetworkSource, voltage: Kilovolts) -> Self {
        Self {
            name: name.into(),
            source,
            voltage,
            kind: String::new(),
            description: String::new(),
            length: Kilometres::km(1.0),
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

    pub fn with_length(mut self, length: Kilometres) -> Self {
        self.length = length;
        self
    }
}
