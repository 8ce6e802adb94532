use serde::{Deserialize, Serialize};

use crate::service::{DEFAULT_PRIORITY, DEFAULT_TTL};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Zone this server is authoritative for. Targets outside it are
    /// delegated to the upstream proxy.
    #[serde(default = "default_zone")]
    pub zone: String,

    /// First path segment of every backend key (`/skydns/...`).
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    #[serde(default = "default_priority")]
    pub default_priority: u16,

    /// Optional TOML file seeding the in-memory service store.
    #[serde(default)]
    pub services_file: Option<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            path_prefix: default_path_prefix(),
            default_ttl: default_ttl(),
            default_priority: default_priority(),
            services_file: None,
        }
    }
}

fn default_zone() -> String {
    "skydns.local.".to_string()
}

fn default_path_prefix() -> String {
    "skydns".to_string()
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

fn default_priority() -> u16 {
    DEFAULT_PRIORITY
}
