//! Graph builders for the two utility datasets.
//!
//! Nodes are built first in one pass over site rows, then edges in one pass
//! over line rows. Each row goes through a function returning
//! `Result<_, RowError>`; failures are logged and filtered out.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::{resolver, Network};
use crate::domain::{Kilometres, Kilovolts, Line, NetworkSource, Substation};
use crate::error::RowError;
use crate::ingest::{TranspowerLineRow, TranspowerSiteRow, VectorFeederRow, VectorSiteRow};
use crate::projection::project_cells;

const VECTOR_SUBSTATION_KIND: &str = "Substation";
const VECTOR_DEFAULT_FEEDER_KV: f64 = 33.0;
const VECTOR_LOW_FEEDER_KV: f64 = 11.0;

#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Bus voltage used when a dataset carries none
    pub default_kv: Kilovolts,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            default_kv: Kilovolts::kv(110.0),
        }
    }
}

/// Row counts from one build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub substations_added: usize,
    pub substations_skipped: usize,
    pub lines_added: usize,
    pub lines_skipped: usize,
}

/// A resolved line row: endpoint names plus the edge payload
struct LineCandidate {
    from: String,
    to: String,
    line: Line,
}

fn add_substations(
    network: &mut Network,
    report: &mut BuildReport,
    rows: impl Iterator<Item = (String, Result<Substation, RowError>)>,
) {
    for (label, result) in rows {
        match result.and_then(|sub| network.add_substation(sub)) {
            Ok(idx) => {
                report.substations_added += 1;
                debug!(source = %network.source, site = %label, bus = idx.index(), "created bus");
            }
            Err(err) => {
                report.substations_skipped += 1;
                warn!(source = %network.source, site = %label, error = %err, "skipping site");
            }
        }
    }
}

fn add_lines(
    network: &mut Network,
    report: &mut BuildReport,
    rows: impl Iterator<Item = (String, Result<LineCandidate, RowError>)>,
) {
    for (label, result) in rows {
        let added = result.and_then(|c| network.add_line(&c.from, &c.to, c.line).map(|_| (c.from, c.to)));
        match added {
            Ok((from, to)) => {
                report.lines_added += 1;
                debug!(source = %network.source, line = %label, %from, %to, "created line");
            }
            Err(err) => {
                report.lines_skipped += 1;
                warn!(source = %network.source, line = %label, error = %err, "skipping line");
            }
        }
    }
}

// ============================================================================
// Transpower
// ============================================================================

pub fn transpower_substation(row: &TranspowerSiteRow, opts: &BuildOptions) -> Result<Substation, RowError> {
    let (nztm, position) = project_cells(&row.x, &row.y)?;
    Ok(
        Substation::new(row.location.trim(), NetworkSource::Transpower, nztm, position)
            .with_kind(row.kind.as_str())
            .with_description(row.description.as_str())
            .with_nominal_kv(opts.default_kv),
    )
}

fn transpower_line(row: &TranspowerLineRow, opts: &BuildOptions) -> Result<LineCandidate, RowError> {
    let (from, to) = resolver::split_line_code(&row.location)?;
    let voltage = Kilovolts::parse(&row.design_volt).unwrap_or(opts.default_kv);
    Ok(LineCandidate {
        from: from.to_string(),
        to: to.to_string(),
        line: Line::new(row.location.trim(), NetworkSource::Transpower, voltage)
            .with_kind(row.kind.as_str())
            .with_description(row.description.as_str()),
    })
}

/// Transmission network: sites as buses, `MXLOCATION` codes as lines
pub fn build_transpower(
    sites: &[TranspowerSiteRow],
    lines: &[TranspowerLineRow],
    opts: &BuildOptions,
) -> (Network, BuildReport) {
    let mut network = Network::new(NetworkSource::Transpower);
    let mut report = BuildReport::default();

    add_substations(
        &mut network,
        &mut report,
        sites
            .iter()
            .map(|row| (row.location.clone(), transpower_substation(row, opts))),
    );
    add_lines(
        &mut network,
        &mut report,
        lines
            .iter()
            .map(|row| (row.location.clone(), transpower_line(row, opts))),
    );

    info!(
        source = %network.source,
        substations = report.substations_added,
        lines = report.lines_added,
        skipped_sites = report.substations_skipped,
        skipped_lines = report.lines_skipped,
        "built network"
    );
    (network, report)
}

// ============================================================================
// Vector
// ============================================================================

/// `"Vector 33/11KV Substation"` from `"MANUREWA 33/11KV"`
fn vector_description(name: &str) -> String {
    let suffix = name
        .rsplit_once(' ')
        .map(|(_, last)| last)
        .unwrap_or("Unknown");
    format!("Vector {} Substation", suffix)
}

pub fn vector_substation(row: &VectorSiteRow, opts: &BuildOptions) -> Result<Substation, RowError> {
    let (nztm, position) = project_cells(&row.x, &row.y)?;
    let name = row.name.trim();
    Ok(Substation::new(name, NetworkSource::Vector, nztm, position)
        .with_kind(VECTOR_SUBSTATION_KIND)
        .with_description(vector_description(name))
        .with_nominal_kv(opts.default_kv))
}

fn feeder_voltage(op_voltage: &str) -> Kilovolts {
    if op_voltage.contains("11") {
        Kilovolts::kv(VECTOR_LOW_FEEDER_KV)
    } else {
        Kilovolts::kv(VECTOR_DEFAULT_FEEDER_KV)
    }
}

fn vector_line(row: &VectorFeederRow) -> Result<LineCandidate, RowError> {
    let (from, to) = resolver::resolve_feeder(&row.feeder_name)?;
    let length = row
        .shape_length
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|m| m.is_finite())
        .map(Kilometres::metres)
        .unwrap_or_default();
    Ok(LineCandidate {
        from: from.to_string(),
        to: to.to_string(),
        line: Line::new(row.feeder_name.trim(), NetworkSource::Vector, feeder_voltage(&row.op_voltage))
            .with_kind("Feeder")
            .with_description(format!("{} to {}", from, to))
            .with_length(length),
    })
}

/// Distribution network: zone substations as buses, feeders as lines
pub fn build_vector(
    sites: &[VectorSiteRow],
    feeders: &[VectorFeederRow],
    opts: &BuildOptions,
) -> (Network, BuildReport) {
    let mut network = Network::new(NetworkSource::Vector);
    let mut report = BuildReport::default();

    add_substations(
        &mut network,
        &mut report,
        sites
            .iter()
            .map(|row| (row.name.clone(), vector_substation(row, opts))),
    );
    add_lines(
        &mut network,
        &mut report,
        feeders
            .iter()
            .map(|row| (row.feeder_name.clone(), vector_line(row))),
    );

    info!(
        source = %network.source,
        substations = report.substations_added,
        lines = report.lines_added,
        skipped_sites = report.substations_skipped,
        skipped_lines = report.lines_skipped,
        "built network"
    );
    (network, report)
}
