use crate::ports::{DnsProxy, ServiceBackend};
use ferrous_sd_domain::name::{fqdn, is_subdomain, names_equal, normalize};
use ferrous_sd_domain::{DnsRecord, DomainError, QueryState, RecordType, ServiceEntry, TargetKind};
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::debug;

/// Longest CNAME chain followed on behalf of a single query.
pub const MAX_CNAME_CHAIN: usize = 8;

/// Answers A and AAAA questions from the service store, following
/// name-valued hosts as CNAMEs.
pub struct ResolveAddressRecordsUseCase {
    backend: Arc<dyn ServiceBackend>,
    proxy: Arc<dyn DnsProxy>,
}

impl ResolveAddressRecordsUseCase {
    pub fn new(backend: Arc<dyn ServiceBackend>, proxy: Arc<dyn DnsProxy>) -> Self {
        Self { backend, proxy }
    }

    /// Address records for `state`, in service order.
    ///
    /// `previous` holds the CNAMEs already emitted on the way to this name;
    /// pass an empty slice for a top-level query. Only a failing fetch for
    /// `state.name` itself is an error: services whose targets cannot be
    /// resolved are left out of the answer.
    pub fn execute<'a>(
        &'a self,
        zone: &'a str,
        state: &'a QueryState,
        previous: &'a [DnsRecord],
    ) -> BoxFuture<'a, Result<Vec<DnsRecord>, DomainError>> {
        Box::pin(self.resolve(zone, state, previous))
    }

    async fn resolve(
        &self,
        zone: &str,
        state: &QueryState,
        previous: &[DnsRecord],
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let services = self.backend.records(&state.name, false).await?;
        let services = self.backend.group(services);

        let mut records = Vec::new();
        for service in &services {
            match TargetKind::classify(&service.host) {
                TargetKind::V4(addr) if state.record_type == RecordType::A => {
                    records.push(service.new_a(&state.name, addr));
                }
                TargetKind::V6(addr) if state.record_type == RecordType::AAAA => {
                    records.push(service.new_aaaa(&state.name, addr));
                }
                TargetKind::Name => {
                    self.follow_cname(zone, state, previous, service, &mut records)
                        .await;
                }
                _ => {}
            }
        }

        debug!(
            name = %state.name,
            record_type = %state.record_type,
            depth = previous.len(),
            records = records.len(),
            "Address records resolved"
        );

        Ok(records)
    }

    async fn follow_cname(
        &self,
        zone: &str,
        state: &QueryState,
        previous: &[DnsRecord],
        service: &ServiceEntry,
        records: &mut Vec<DnsRecord>,
    ) {
        let target = fqdn(&service.host);

        // x CNAME x
        if names_equal(&target, &state.name) {
            return;
        }

        let candidate = service.new_cname(&state.name, &target);

        if previous.len() >= MAX_CNAME_CHAIN {
            debug!(name = %state.name, target = %target, "CNAME chain too long, dropping");
            return;
        }
        if is_duplicate_cname(&candidate, previous.iter().chain(records.iter())) {
            debug!(name = %state.name, target = %target, "Duplicate CNAME target, dropping");
            return;
        }

        let mut chain = previous.to_vec();
        chain.push(candidate.clone());
        let next_state = state.with_name(&target);

        match self.execute(zone, &next_state, &chain).await {
            Ok(next_records) => {
                // An unresolvable chain contributes nothing, not a dangling CNAME.
                if !next_records.is_empty() {
                    records.push(candidate);
                    records.extend(next_records);
                }
            }
            Err(e) => {
                if is_subdomain(zone, &target) {
                    debug!(target = %target, error = %e, "In-zone CNAME target unresolved");
                    return;
                }

                match self.proxy.lookup(state, &target, state.record_type).await {
                    Ok(response) => {
                        records.push(candidate);
                        records.extend(response.answers);
                    }
                    Err(e) => {
                        debug!(target = %target, error = %e, "Proxy lookup failed, dropping service");
                    }
                }
            }
        }
    }
}

fn is_duplicate_cname<'a>(
    candidate: &DnsRecord,
    mut seen: impl Iterator<Item = &'a DnsRecord>,
) -> bool {
    let Some(target) = candidate.target().map(normalize) else {
        return false;
    };
    seen.any(|record| {
        record.is_cname() && record.target().map(normalize).as_deref() == Some(target.as_str())
    })
}
