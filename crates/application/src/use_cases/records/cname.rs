use crate::ports::ServiceBackend;
use ferrous_sd_domain::{DnsRecord, DomainError, QueryState, TargetKind};
use std::sync::Arc;

/// Answers CNAME questions from the entry stored exactly at the queried name.
pub struct ResolveCnameRecordsUseCase {
    backend: Arc<dyn ServiceBackend>,
}

impl ResolveCnameRecordsUseCase {
    pub fn new(backend: Arc<dyn ServiceBackend>) -> Self {
        Self { backend }
    }

    /// A single CNAME to the host of the service stored exactly at the
    /// queried name, unless that host is an address.
    pub async fn execute(
        &self,
        _zone: &str,
        state: &QueryState,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let services = self.backend.records(&state.name, true).await?;
        let services = self.backend.group(services);

        Ok(services
            .first()
            .filter(|service| TargetKind::classify(&service.host).is_name())
            .map(|service| vec![service.new_cname(&state.name, &service.host)])
            .unwrap_or_default())
    }
}
