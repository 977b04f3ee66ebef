use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::str::FromStr;

use super::error::ApiError;
use crate::domain::NetworkSource;
use crate::network::{MapData, SubstationDetail};
use crate::pipeline::{build_map_data, run_blocking, substation_detail};
use crate::state::AppState;

fn parse_source(raw: &str) -> Result<NetworkSource, ApiError> {
    NetworkSource::from_str(raw)
        .map_err(|_| ApiError::BadRequest(format!("unknown network source '{}'", raw)))
}

/// GET /network_data - all networks merged
pub async fn network_data(State(st): State<AppState>) -> Result<Json<MapData>, ApiError> {
    let cfg = st.cfg.clone();
    let data = run_blocking(move || build_map_data(&cfg, &NetworkSource::ALL)).await?;
    Ok(Json(data))
}

/// GET /network_data/:source - one network
pub async fn source_network_data(
    State(st): State<AppState>,
    Path(source): Path<String>,
) -> Result<Json<MapData>, ApiError> {
    let source = parse_source(&source)?;
    let cfg = st.cfg.clone();
    let data = run_blocking(move || build_map_data(&cfg, &[source])).await?;
    Ok(Json(data))
}

#[derive(Debug, Deserialize)]
pub struct SubstationQuery {
    pub name: String,
}

/// GET /substations/:source?name=... - one substation with its connections
pub async fn get_substation(
    State(st): State<AppState>,
    Path(source): Path<String>,
    Query(q): Query<SubstationQuery>,
) -> Result<Json<SubstationDetail>, ApiError> {
    let source = parse_source(&source)?;
    let cfg = st.cfg.clone();
    let name = q.name.clone();
    run_blocking(move || substation_detail(&cfg, source, &name))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("substation '{}' in {}", q.name, source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(parse_source("transpower").unwrap(), NetworkSource::Transpower);
        assert_eq!(parse_source("VECTOR").unwrap(), NetworkSource::Vector);
        assert!(matches!(parse_source("orion"), Err(ApiError::BadRequest(_))));
    }
}
