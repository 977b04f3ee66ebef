use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: chrono::DateTime<chrono::Utc>,
    datasets: Vec<DatasetHealth>,
}

/// Presence of one input file on disk
#[derive(Debug, Serialize)]
pub struct DatasetHealth {
    name: &'static str,
    present: bool,
}

/// GET /healthz - liveness probe
pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /health - reports whether the input datasets are readable.
///
/// Returns 503 when any file is missing, since `/network_data` would fail.
pub async fn health_check(State(st): State<AppState>) -> impl IntoResponse {
    let data = &st.cfg.data;
    let datasets: Vec<DatasetHealth> = [
        ("transpower_sites", &data.transpower_sites),
        ("transpower_lines", &data.transpower_lines),
        ("vector_sites", &data.vector_sites),
        ("vector_feeders", &data.vector_feeders),
    ]
    .into_iter()
    .map(|(name, path)| DatasetHealth {
        name,
        present: path.is_file(),
    })
    .collect();

    let all_present = datasets.iter().all(|d| d.present);
    let response = HealthResponse {
        status: if all_present { "healthy" } else { "degraded" },
        timestamp: chrono::Utc::now(),
        datasets,
    };

    let status_code = if all_present {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    tracing::debug!(healthy = all_present, "Health check completed");

    (status_code, Json(response))
}
