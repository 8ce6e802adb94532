#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_sd_application::ports::{DnsProxy, ProxyResponse, ServiceBackend};
use ferrous_sd_domain::name::normalize;
use ferrous_sd_domain::{DnsRecord, DomainError, QueryState, RecordClass, RecordType, ServiceEntry};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Backend keyed by (normalized) name; a name without entries is `NotFound`.
/// `group` passes entries through unchanged.
#[derive(Clone, Default)]
pub struct MockServiceBackend {
    services: Arc<RwLock<HashMap<String, Vec<ServiceEntry>>>>,
    exact_services: Arc<RwLock<HashMap<String, Vec<ServiceEntry>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<RwLock<Vec<(String, bool)>>>,
}

impl MockServiceBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, name: &str, service: ServiceEntry) {
        self.services
            .write()
            .unwrap()
            .entry(normalize(name))
            .or_default()
            .push(service);
    }

    /// Entries returned only for exact-match fetches.
    pub fn add_exact(&self, name: &str, service: ServiceEntry) {
        self.exact_services
            .write()
            .unwrap()
            .entry(normalize(name))
            .or_default()
            .push(service);
    }

    pub fn set_error(&self, name: &str, error: DomainError) {
        self.errors.write().unwrap().insert(normalize(name), error);
    }

    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ServiceBackend for MockServiceBackend {
    async fn records(&self, name: &str, exact: bool) -> Result<Vec<ServiceEntry>, DomainError> {
        let key = normalize(name);
        self.calls.write().unwrap().push((key.clone(), exact));

        if let Some(err) = self.errors.read().unwrap().get(&key).cloned() {
            return Err(err);
        }

        let source = if exact {
            &self.exact_services
        } else {
            &self.services
        };
        source
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .filter(|entries| !entries.is_empty())
            .ok_or(DomainError::NotFound(key))
    }

    fn group(&self, services: Vec<ServiceEntry>) -> Vec<ServiceEntry> {
        services
    }
}

/// Proxy answering from canned responses keyed by (name, type). Unknown
/// questions fail, like an upstream returning SERVFAIL.
#[derive(Clone, Default)]
pub struct MockDnsProxy {
    responses: Arc<RwLock<HashMap<(String, RecordType), Vec<DnsRecord>>>>,
    lookups: Arc<RwLock<Vec<(String, RecordType)>>>,
    classes: Arc<RwLock<Vec<RecordClass>>>,
}

impl MockDnsProxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, record_type: RecordType, answers: Vec<DnsRecord>) {
        self.responses
            .write()
            .unwrap()
            .insert((normalize(name), record_type), answers);
    }

    pub fn lookups(&self) -> Vec<(String, RecordType)> {
        self.lookups.read().unwrap().clone()
    }

    /// Class of the client question behind each lookup, in call order.
    pub fn classes(&self) -> Vec<RecordClass> {
        self.classes.read().unwrap().clone()
    }

    pub fn lookup_count(&self, name: &str) -> usize {
        let key = normalize(name);
        self.lookups
            .read()
            .unwrap()
            .iter()
            .filter(|(n, _)| *n == key)
            .count()
    }
}

#[async_trait]
impl DnsProxy for MockDnsProxy {
    async fn lookup(
        &self,
        state: &QueryState,
        name: &str,
        record_type: RecordType,
    ) -> Result<ProxyResponse, DomainError> {
        let key = normalize(name);
        self.lookups.write().unwrap().push((key.clone(), record_type));
        self.classes.write().unwrap().push(state.class);

        self.responses
            .read()
            .unwrap()
            .get(&(key.clone(), record_type))
            .cloned()
            .map(ProxyResponse::new)
            .ok_or(DomainError::UpstreamRcode {
                server: "mock".to_string(),
                rcode: format!("SERVFAIL for {}", key),
            })
    }
}
