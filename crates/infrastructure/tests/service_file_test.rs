mod helpers;

use ferrous_sd_application::ports::ServiceBackend;
use ferrous_sd_domain::config::ConfigError;
use ferrous_sd_infrastructure::discovery::InMemoryServiceStore;
use helpers::discovery_config;
use std::io::Write;
use tempfile::NamedTempFile;

const SERVICES: &str = r#"
[[service]]
key = "/skydns/local/skydns/web/x1"
host = "10.0.0.1"
port = 8080

[[service]]
key = "/skydns/local/skydns/web/x2"
host = "web.example.org"
weight = 30
targetstrip = 1
"#;

#[tokio::test]
async fn test_load_services_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SERVICES.as_bytes()).unwrap();

    let store =
        InMemoryServiceStore::from_file(file.path().to_str().unwrap(), &discovery_config())
            .unwrap();

    assert_eq!(store.len(), 2);
    let services = store.records("web.skydns.local.", false).await.unwrap();
    assert_eq!(services[0].port, 8080);
    assert_eq!(services[1].weight, 30);
    assert_eq!(services[1].target_strip, 1);
}

#[test]
fn test_empty_file_gives_empty_store() {
    let store = InMemoryServiceStore::from_toml("", &discovery_config()).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_missing_file_is_reported() {
    let result = InMemoryServiceStore::from_file("/nonexistent/services.toml", &discovery_config());

    assert!(matches!(result, Err(ConfigError::ServicesFile(_, _))));
}

#[test]
fn test_entry_outside_prefix_is_rejected() {
    let contents = r#"
[[service]]
key = "/etcd/web"
host = "10.0.0.1"
"#;

    let result = InMemoryServiceStore::from_toml(contents, &discovery_config());

    assert!(matches!(result, Err(ConfigError::Validation(_))));
}
