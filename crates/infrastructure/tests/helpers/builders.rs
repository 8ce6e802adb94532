#![allow(dead_code)]
use ferrous_sd_domain::config::DiscoveryConfig;
use ferrous_sd_domain::ServiceEntry;
use ferrous_sd_infrastructure::discovery::InMemoryServiceStore;

pub fn discovery_config() -> DiscoveryConfig {
    DiscoveryConfig::default()
}

pub fn empty_store() -> InMemoryServiceStore {
    InMemoryServiceStore::new(&discovery_config())
}

/// Store seeded with `(key, json)` pairs.
pub fn store_with(values: &[(&str, &str)]) -> InMemoryServiceStore {
    let store = empty_store();
    for (key, json) in values {
        store.insert(key, json).unwrap();
    }
    store
}

pub fn entry(key: &str, host: &str, group: &str) -> ServiceEntry {
    ServiceEntry {
        key: key.to_string(),
        group: group.to_string(),
        ..ServiceEntry::new(host)
    }
}
