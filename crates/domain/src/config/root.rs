use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::discovery::DiscoveryConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-sd.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-sd/config.toml";

/// Main configuration structure for Ferrous SD
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Zone, key layout and record defaults
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Resolvers used for foreign names
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-sd.toml in current directory
    /// 3. /etc/ferrous-sd/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(zone) = overrides.zone {
            self.discovery.zone = zone;
        }
        if let Some(services) = overrides.services_file {
            self.discovery.services_file = Some(services);
        }
        if let Some(upstreams) = overrides.upstream_servers {
            self.upstream.servers = upstreams;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discovery.zone.trim().is_empty() {
            return Err(ConfigError::Validation("Zone cannot be empty".to_string()));
        }

        if self.discovery.path_prefix.trim_matches('/').is_empty() {
            return Err(ConfigError::Validation(
                "Key path prefix cannot be empty".to_string(),
            ));
        }

        for server in &self.upstream.servers {
            if server.parse::<SocketAddr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "Upstream '{}' is not an ip:port address",
                    server
                )));
            }
        }

        if self.upstream.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream query timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub zone: Option<String>,
    pub services_file: Option<String>,
    pub upstream_servers: Option<Vec<String>>,
    pub log_level: Option<String>,
}
