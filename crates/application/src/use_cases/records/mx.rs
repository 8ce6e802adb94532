use super::additional::TargetExpander;
use super::address::ResolveAddressRecordsUseCase;
use crate::ports::{DnsProxy, ServiceBackend};
use ferrous_sd_domain::name::domain_from_key;
use ferrous_sd_domain::{DomainError, QueryState, RecordSet, TargetKind};
use std::sync::Arc;
use tracing::debug;

/// Answers MX questions from services flagged as mail exchangers.
pub struct ResolveMxRecordsUseCase {
    backend: Arc<dyn ServiceBackend>,
    proxy: Arc<dyn DnsProxy>,
    address: ResolveAddressRecordsUseCase,
}

impl ResolveMxRecordsUseCase {
    pub fn new(backend: Arc<dyn ServiceBackend>, proxy: Arc<dyn DnsProxy>) -> Self {
        let address = ResolveAddressRecordsUseCase::new(Arc::clone(&backend), Arc::clone(&proxy));
        Self {
            backend,
            proxy,
            address,
        }
    }

    pub async fn execute(&self, zone: &str, state: &QueryState) -> Result<RecordSet, DomainError> {
        let services = self.backend.records(&state.name, false).await?;
        let services = self.backend.group(services);

        let mut set = RecordSet::default();
        let mut expander = TargetExpander::new(&self.address, self.proxy.as_ref(), zone, state);

        for mut service in services.into_iter().filter(|s| s.mail) {
            match TargetKind::classify(&service.host) {
                TargetKind::Name => {
                    set.answers.push(service.new_mx(&state.name));
                    expander.expand(&service.target(), &mut set.extra).await;
                }
                TargetKind::V4(addr) => {
                    service.host = domain_from_key(&service.key);
                    set.answers.push(service.new_mx(&state.name));
                    set.extra.push(service.new_a(&service.target(), addr));
                }
                TargetKind::V6(addr) => {
                    service.host = domain_from_key(&service.key);
                    set.answers.push(service.new_mx(&state.name));
                    set.extra.push(service.new_aaaa(&service.target(), addr));
                }
            }
        }

        debug!(
            name = %state.name,
            answers = set.answers.len(),
            extra = set.extra.len(),
            "MX records resolved"
        );

        Ok(set)
    }
}
