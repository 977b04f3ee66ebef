use serde::{Deserialize, Serialize};

// ============================================================================
// Physical Unit Newtypes
// ============================================================================

/// Voltage level in kilovolts (kV)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Kilovolts(pub f64);

impl Kilovolts {
    pub fn kv(kv: f64) -> Self {
        Self(kv)
    }

    pub fn as_kv(&self) -> f64 {
        self.0
    }

    /// Parse a raw dataset cell such as `"220"` or `"110.0"`
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim()
            .trim_end_matches(|c: char| c.eq_ignore_ascii_case(&'k') || c.eq_ignore_ascii_case(&'v'))
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(Self)
    }
}

/// Renders as the map's layer key, e.g. `220kV`
impl std::fmt::Display for Kilovolts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kV", self.0)
    }
}

/// Length in kilometres (km)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd, Default)]
#[serde(transparent)]
pub struct Kilometres(pub f64);

impl Kilometres {
    pub fn km(km: f64) -> Self {
        Self(km)
    }

    pub fn metres(m: f64) -> Self {
        Self(m / 1000.0)
    }

    pub fn as_km(&self) -> f64 {
        self.0
    }
}
