use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::Kilovolts;
use crate::network::BuildOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub enable_cors: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Locations of the input datasets and the map page
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub transpower_sites: PathBuf,
    pub transpower_lines: PathBuf,
    pub vector_sites: PathBuf,
    pub vector_feeders: PathBuf,
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub default_bus_kv: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { default_bus_kv: 110.0 }
    }
}

impl NetworkConfig {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            default_kv: Kilovolts::kv(self.default_bus_kv),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence
    pub filter: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file("config/default.toml"))
                .merge(Env::prefixed("GRIDMAP__").split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    const DEFAULT_TOML: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 5001

        [data]
        transpower_sites = "data/Transpower/Sites.csv"
        transpower_lines = "data/Transpower/Transmission_Lines.csv"
        vector_sites = "data/Vector/zone_substations.csv"
        vector_feeders = "data/Vector/feeders.csv"
        static_dir = "static"
    "#;

    fn figment() -> Figment {
        Figment::new()
            .merge(Toml::string(DEFAULT_TOML))
            .merge(Env::prefixed("GRIDMAP__").split("__"))
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.set_env("GRIDMAP__SERVER__PORT", "8080");
            jail.set_env("GRIDMAP__NETWORK__DEFAULT_BUS_KV", "66");
            jail.set_env("GRIDMAP__LOGGING__FORMAT", "pretty");

            let cfg = Config::from_figment(figment()).map_err(|e| e.to_string())?;
            assert_eq!(cfg.server.port, 8080);
            assert_eq!(cfg.server.request_timeout_secs, 30);
            assert!(!cfg.server.enable_cors);
            assert_eq!(cfg.network.build_options().default_kv, Kilovolts(66.0));
            assert_eq!(cfg.data.static_dir, PathBuf::from("static"));
            assert_eq!(cfg.logging.format, LogFormat::Pretty);
            Ok(())
        });
    }

    #[test]
    fn test_network_defaults() {
        Jail::expect_with(|_jail| {
            let cfg = Config::from_figment(figment()).map_err(|e| e.to_string())?;
            assert_eq!(cfg.network.default_bus_kv, 110.0);
            assert_eq!(cfg.server.socket_addr().unwrap().port(), 5001);
            assert_eq!(cfg.logging.format, LogFormat::Json);
            assert!(cfg.logging.filter.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_missing_data_section_fails() {
        let result = Config::from_figment(
            Figment::new().merge(Toml::string("[server]\nhost = \"127.0.0.1\"\nport = 1\n")),
        );
        assert!(result.is_err());
    }
}
