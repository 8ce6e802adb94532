use super::group::group_services;
use async_trait::async_trait;
use ferrous_sd_application::ports::ServiceBackend;
use ferrous_sd_domain::config::DiscoveryConfig;
use ferrous_sd_domain::name::path_from_name;
use ferrous_sd_domain::{DomainError, ServiceEntry};
use std::collections::BTreeMap;
use std::sync::RwLock;
use tracing::debug;

const WILDCARDS: [&str; 2] = ["*", "any"];

/// Service store keeping raw JSON values under slash-separated paths, the
/// way a SkyDNS-style key/value backend lays them out.
///
/// Values are validated on insert and decoded on every read, so `records`
/// hands out fresh entries with the key filled in and defaults applied.
pub struct InMemoryServiceStore {
    prefix: String,
    default_ttl: u32,
    default_priority: u16,
    values: RwLock<BTreeMap<String, String>>,
}

impl InMemoryServiceStore {
    pub fn new(config: &DiscoveryConfig) -> Self {
        Self {
            prefix: config.path_prefix.trim_matches('/').to_ascii_lowercase(),
            default_ttl: config.default_ttl,
            default_priority: config.default_priority,
            values: RwLock::new(BTreeMap::new()),
        }
    }

    /// Store a JSON service value at `key` (e.g. `/skydns/local/skydns/web/x1`).
    pub fn insert(&self, key: &str, json: &str) -> Result<(), DomainError> {
        let key = key.trim_end_matches('/').to_ascii_lowercase();
        if !key.starts_with(&format!("/{}/", self.prefix)) {
            return Err(DomainError::InvalidService {
                key,
                reason: format!("key must live under /{}", self.prefix),
            });
        }

        serde_json::from_str::<ServiceEntry>(json).map_err(|e| DomainError::InvalidService {
            key: key.clone(),
            reason: e.to_string(),
        })?;

        debug!(key = %key, "Service stored");
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, json.to_string());
        Ok(())
    }

    /// Store `service` at the path of `name`, replacing whatever was there.
    pub fn insert_service(&self, name: &str, service: &ServiceEntry) -> Result<(), DomainError> {
        let key = path_from_name(name, &self.prefix);
        let json = serde_json::to_string(service).map_err(|e| DomainError::InvalidService {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        self.insert(&key, &json)
    }

    pub fn remove(&self, key: &str) -> bool {
        let key = key.trim_end_matches('/').to_ascii_lowercase();
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&key)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn decode(&self, key: &str, json: &str) -> Result<ServiceEntry, DomainError> {
        let mut service: ServiceEntry =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidService {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        service.key = key.to_string();
        if service.priority == 0 {
            service.priority = self.default_priority;
        }
        if service.ttl == 0 {
            service.ttl = self.default_ttl;
        }
        Ok(service)
    }
}

/// Whether `key` is selected by the queried path segments. Exact lookups want
/// the same depth; subtree lookups accept anything at or below it.
fn key_matches(query: &[&str], key: &str, exact: bool) -> bool {
    let segments: Vec<&str> = key.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < query.len() || (exact && segments.len() != query.len()) {
        return false;
    }
    query
        .iter()
        .zip(&segments)
        .all(|(want, have)| WILDCARDS.contains(want) || want == have)
}

#[async_trait]
impl ServiceBackend for InMemoryServiceStore {
    async fn records(&self, name: &str, exact: bool) -> Result<Vec<ServiceEntry>, DomainError> {
        let path = path_from_name(name, &self.prefix);
        let query: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        let services = values
            .iter()
            .filter(|(key, _)| key_matches(&query, key, exact))
            .map(|(key, json)| self.decode(key, json))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(path = %path, exact = exact, matches = services.len(), "Store lookup");

        if services.is_empty() {
            return Err(DomainError::NotFound(path));
        }
        Ok(services)
    }

    fn group(&self, services: Vec<ServiceEntry>) -> Vec<ServiceEntry> {
        group_services(services)
    }
}
