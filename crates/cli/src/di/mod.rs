use ferrous_sd_application::ports::{DnsProxy, ServiceBackend};
use ferrous_sd_application::use_cases::{
    ResolveAddressRecordsUseCase, ResolveCnameRecordsUseCase, ResolveMxRecordsUseCase,
    ResolveSrvRecordsUseCase, ResolveTxtRecordsUseCase,
};
use ferrous_sd_domain::Config;
use ferrous_sd_infrastructure::discovery::InMemoryServiceStore;
use ferrous_sd_infrastructure::dns::UpstreamProxy;
use std::sync::Arc;
use tracing::info;

pub struct Services {
    pub address: ResolveAddressRecordsUseCase,
    pub srv: ResolveSrvRecordsUseCase,
    pub mx: ResolveMxRecordsUseCase,
    pub cname: ResolveCnameRecordsUseCase,
    pub txt: ResolveTxtRecordsUseCase,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let store = match &config.discovery.services_file {
            Some(path) => InMemoryServiceStore::from_file(path, &config.discovery)?,
            None => InMemoryServiceStore::new(&config.discovery),
        };
        let backend: Arc<dyn ServiceBackend> = Arc::new(store);
        let proxy: Arc<dyn DnsProxy> = Arc::new(UpstreamProxy::from_config(&config.upstream)?);

        info!(
            upstreams = config.upstream.servers.len(),
            timeout_ms = config.upstream.query_timeout_ms,
            "Use cases ready"
        );

        Ok(Self {
            address: ResolveAddressRecordsUseCase::new(Arc::clone(&backend), Arc::clone(&proxy)),
            srv: ResolveSrvRecordsUseCase::new(Arc::clone(&backend), Arc::clone(&proxy)),
            mx: ResolveMxRecordsUseCase::new(Arc::clone(&backend), proxy),
            cname: ResolveCnameRecordsUseCase::new(Arc::clone(&backend)),
            txt: ResolveTxtRecordsUseCase::new(backend),
        })
    }
}
