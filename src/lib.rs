//! # grid-map
//!
//! Links New Zealand utility-network CSV datasets into a graph of substations
//! and lines and serves it as JSON to a web map.
//!
//! ```text
//! CSV rows ──▶ ingest ──▶ projection (NZTM → WGS84) ──▶ network (graph) ──▶ payload (JSON)
//! ```
//!
//! The whole pipeline runs per request; nothing is cached or persisted.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod network;
pub mod pipeline;
pub mod projection;
pub mod state;
pub mod telemetry;

pub use error::{IngestError, RowError};
pub use network::{MapData, Network, SubstationDetail};
