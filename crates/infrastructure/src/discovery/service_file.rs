//! TOML seed file for the in-memory store.
//!
//! ```toml
//! [[service]]
//! key = "/skydns/local/skydns/web/x1"
//! host = "10.0.0.1"
//! port = 8080
//! ```

use super::memory_store::InMemoryServiceStore;
use ferrous_sd_domain::config::{ConfigError, DiscoveryConfig};
use ferrous_sd_domain::ServiceEntry;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct ServiceFile {
    #[serde(default, rename = "service")]
    services: Vec<ServiceFileEntry>,
}

#[derive(Debug, Deserialize)]
struct ServiceFileEntry {
    key: String,

    #[serde(flatten)]
    service: ServiceEntry,
}

impl InMemoryServiceStore {
    /// Build a store from a services file.
    pub fn from_file(path: &str, config: &DiscoveryConfig) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ServicesFile(path.to_string(), e.to_string()))?;
        let store = Self::from_toml(&contents, config)
            .map_err(|e| ConfigError::ServicesFile(path.to_string(), e.to_string()))?;

        info!(path = %path, services = store.len(), "Services file loaded");
        Ok(store)
    }

    pub fn from_toml(contents: &str, config: &DiscoveryConfig) -> Result<Self, ConfigError> {
        let file: ServiceFile =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let store = Self::new(config);
        for entry in file.services {
            let json = serde_json::to_string(&entry.service)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
            store
                .insert(&entry.key, &json)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }
        Ok(store)
    }
}
