use super::address::ResolveAddressRecordsUseCase;
use crate::ports::DnsProxy;
use ferrous_sd_domain::name::{is_subdomain, normalize};
use ferrous_sd_domain::{DnsRecord, QueryState, RecordType};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Populates the additional section for the name targets of one SRV or MX
/// answer. Each target is expanded at most once per instance, so an
/// instance must not outlive the query it was created for.
pub(super) struct TargetExpander<'a> {
    address: &'a ResolveAddressRecordsUseCase,
    proxy: &'a dyn DnsProxy,
    zone: &'a str,
    state: &'a QueryState,
    expanded: FxHashSet<String>,
}

impl<'a> TargetExpander<'a> {
    pub(super) fn new(
        address: &'a ResolveAddressRecordsUseCase,
        proxy: &'a dyn DnsProxy,
        zone: &'a str,
        state: &'a QueryState,
    ) -> Self {
        Self {
            address,
            proxy,
            zone,
            state,
            expanded: FxHashSet::default(),
        }
    }

    pub(super) async fn expand(&mut self, target: &str, extra: &mut Vec<DnsRecord>) {
        if !self.expanded.insert(normalize(target)) {
            return;
        }

        if is_subdomain(self.zone, target) {
            let internal = QueryState::new(target, RecordType::A).with_class(self.state.class);
            match self.address.execute(self.zone, &internal, &[]).await {
                Ok(records) => extra.extend(records),
                Err(e) => debug!(target = %target, error = %e, "In-zone target unresolved"),
            }
            return;
        }

        match self.proxy.lookup(self.state, target, RecordType::A).await {
            Ok(response) => extra.extend(response.answers),
            Err(e) => debug!(target = %target, error = %e, "Proxy A lookup failed"),
        }

        // CNAMEs in the AAAA answer were already added from the A answer.
        match self.proxy.lookup(self.state, target, RecordType::AAAA).await {
            Ok(response) => extra.extend(response.answers.into_iter().filter(|r| !r.is_cname())),
            Err(e) => debug!(target = %target, error = %e, "Proxy AAAA lookup failed"),
        }
    }
}
