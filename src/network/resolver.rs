use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::error::RowError;

/// Feeder-name codes to Vector zone-substation names
pub static FEEDER_TO_SUBSTATION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("BKBY", "BROOKBY 33kV"),
        ("MARA", "MARAETAI 33/11kV"),
        ("CLEV", "CLEVEDON 33/11kV"),
        ("TTAK", "TAKANINI 33/11kV"),
        ("ORAT", "ORATIA 33/11KV"),
        ("LAIN", "LAINGHOLM 33/11KV"),
        ("TPTAK", "TP TAKANINI 220/33KV"),
        ("SPUR", "SPUR RD 33/11KV"),
        ("HORS", "HORSESHOE BUSH"),
        ("KKAP", "KAUKAPAKAPA"),
        ("HELE", "HELENSVILLE 33/11KV"),
        ("TWEL", "TP Wellsford 110/33 kV POS"),
        ("WARK", "WARKWORTH 33/11KV"),
        ("SNEL", "SNELLS BEACH 33/11KV"),
        ("WELL", "WELLSFORD 33/11KV"),
        ("MTW", "MT WELLINGTON 33/11kV"),
    ])
});

static LEADING_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z]+)").expect("valid regex"));

const LINE_CODE_DELIMITER: char = '-';
const FEEDER_SEPARATOR: &str = " - ";

/// Endpoint site codes of a transmission line code.
///
/// `AHA-DOB-A` yields `("AHA", "DOB")`; the circuit suffix is ignored.
pub fn split_line_code(code: &str) -> Result<(&str, &str), RowError> {
    let mut parts = code.split(LINE_CODE_DELIMITER).map(str::trim);
    match (parts.next(), parts.next()) {
        (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => Ok((from, to)),
        _ => Err(RowError::MalformedCode(code.to_string())),
    }
}

/// Leading run of uppercase letters, e.g. `BKBY` from `BKBY H02`
pub fn leading_code(token: &str) -> Option<&str> {
    LEADING_CODE
        .captures(token.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn feeder_substation(code: &str) -> Option<&'static str> {
    FEEDER_TO_SUBSTATION.get(code).copied()
}

/// Canonical substation names at both ends of a feeder label
pub fn resolve_feeder(label: &str) -> Result<(&'static str, &'static str), RowError> {
    let parts: Vec<&str> = label.split(FEEDER_SEPARATOR).collect();
    let [from_part, to_part] = parts.as_slice() else {
        return Err(RowError::MalformedCode(label.to_string()));
    };

    let (Some(from_code), Some(to_code)) = (leading_code(from_part), leading_code(to_part)) else {
        return Err(RowError::MalformedCode(label.to_string()));
    };

    match (feeder_substation(from_code), feeder_substation(to_code)) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(RowError::UnknownFeederCode {
            label: label.to_string(),
            from: from_code.to_string(),
            to: to_code.to_string(),
        }),
    }
}
