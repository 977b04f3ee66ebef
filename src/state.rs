use std::sync::Arc;

use crate::config::Config;

/// Shared handler state. Read-only; every request rebuilds its own network.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        Self { cfg: Arc::new(cfg) }
    }
}
