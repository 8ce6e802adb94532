mod dns_proxy;
mod service_backend;

pub use dns_proxy::{DnsProxy, ProxyResponse};
pub use service_backend::ServiceBackend;

// Re-export for convenience
pub use ferrous_sd_domain::QueryState;
