//! Request-scoped pipeline: load CSVs, build the graph, flatten for the map.
//!
//! Nothing is cached. Every call reads the files again so the output always
//! reflects what is on disk.

use std::time::Instant;
use tracing::info;

use crate::config::{Config, DataConfig};
use crate::domain::NetworkSource;
use crate::error::{IngestError, IngestResult};
use crate::ingest::{read_rows, TranspowerLineRow, TranspowerSiteRow, VectorFeederRow, VectorSiteRow};
use crate::network::{build_transpower, build_vector, BuildOptions, BuildReport, MapData, Network, SubstationDetail};

/// Load and link one source network
pub fn load_network(
    source: NetworkSource,
    data: &DataConfig,
    opts: &BuildOptions,
) -> IngestResult<(Network, BuildReport)> {
    info!(%source, "creating network");
    match source {
        NetworkSource::Transpower => {
            let sites: Vec<TranspowerSiteRow> = read_rows(&data.transpower_sites)?;
            let lines: Vec<TranspowerLineRow> = read_rows(&data.transpower_lines)?;
            Ok(build_transpower(&sites, &lines, opts))
        }
        NetworkSource::Vector => {
            let sites: Vec<VectorSiteRow> = read_rows(&data.vector_sites)?;
            let feeders: Vec<VectorFeederRow> = read_rows(&data.vector_feeders)?;
            Ok(build_vector(&sites, &feeders, opts))
        }
    }
}

/// Merged map payload for the given sources, in order
pub fn build_map_data(cfg: &Config, sources: &[NetworkSource]) -> IngestResult<MapData> {
    let start = Instant::now();
    let opts = cfg.network.build_options();

    let mut data = MapData::default();
    for &source in sources {
        let (network, _) = load_network(source, &cfg.data, &opts)?;
        data.extend(&network);
    }

    info!(
        substations = data.substations.len(),
        lines = data.lines.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "prepared map data"
    );
    Ok(data)
}

/// Detail view of one substation, `None` if the source has no such name
pub fn substation_detail(
    cfg: &Config,
    source: NetworkSource,
    name: &str,
) -> IngestResult<Option<SubstationDetail>> {
    let (network, _) = load_network(source, &cfg.data, &cfg.network.build_options())?;
    Ok(SubstationDetail::from_network(&network, name))
}

/// Run a synchronous pipeline step on the blocking pool
pub async fn run_blocking<T, F>(f: F) -> IngestResult<T>
where
    F: FnOnce() -> IngestResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| IngestError::Task(e.to_string()))?
}
