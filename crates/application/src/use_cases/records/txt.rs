use crate::ports::ServiceBackend;
use ferrous_sd_domain::{DnsRecord, DomainError, QueryState};
use std::sync::Arc;

/// Answers TXT questions from the text of every matching service.
pub struct ResolveTxtRecordsUseCase {
    backend: Arc<dyn ServiceBackend>,
}

impl ResolveTxtRecordsUseCase {
    pub fn new(backend: Arc<dyn ServiceBackend>) -> Self {
        Self { backend }
    }

    pub async fn execute(
        &self,
        _zone: &str,
        state: &QueryState,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let services = self.backend.records(&state.name, false).await?;
        let services = self.backend.group(services);

        Ok(services
            .iter()
            .filter(|service| !service.text.is_empty())
            .map(|service| service.new_txt(&state.name))
            .collect())
    }
}
