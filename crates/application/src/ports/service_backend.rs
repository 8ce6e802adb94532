use async_trait::async_trait;
use ferrous_sd_domain::{DomainError, ServiceEntry};

/// Read side of the service-discovery store.
#[async_trait]
pub trait ServiceBackend: Send + Sync {
    /// Services stored for `name`.
    ///
    /// With `exact` only the entry stored at the name itself is returned;
    /// otherwise every entry in the subtree below it is. A name holding
    /// nothing is an error (`DomainError::NotFound`), which the record
    /// builders treat as "not ours to answer".
    async fn records(&self, name: &str, exact: bool) -> Result<Vec<ServiceEntry>, DomainError>;

    /// Merge raw entries describing the same logical service. Must be
    /// idempotent.
    fn group(&self, services: Vec<ServiceEntry>) -> Vec<ServiceEntry>;
}
