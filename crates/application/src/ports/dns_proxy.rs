use async_trait::async_trait;
use ferrous_sd_domain::{DnsRecord, DomainError, QueryState, RecordType};

#[derive(Debug, Clone, Default)]
pub struct ProxyResponse {
    pub answers: Vec<DnsRecord>,
    pub upstream_server: Option<String>,
}

impl ProxyResponse {
    pub fn new(answers: Vec<DnsRecord>) -> Self {
        Self {
            answers,
            upstream_server: None,
        }
    }
}

/// Resolver for names outside the zone we are authoritative for.
#[async_trait]
pub trait DnsProxy: Send + Sync {
    async fn lookup(
        &self,
        state: &QueryState,
        name: &str,
        record_type: RecordType,
    ) -> Result<ProxyResponse, DomainError>;
}
