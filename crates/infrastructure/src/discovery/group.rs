use ferrous_sd_domain::ServiceEntry;

fn depth(key: &str) -> usize {
    key.matches('/').count()
}

/// Restrict a fetched set to one service group.
///
/// The entries closest to the queried name (fewest key segments) decide: if
/// they all carry the same non-empty group, entries from other groups are
/// dropped while ungrouped entries stay. Any disagreement at that level, or
/// no group at all, leaves the set untouched.
pub fn group_services(services: Vec<ServiceEntry>) -> Vec<ServiceEntry> {
    let Some(shallowest) = services.iter().map(|s| depth(&s.key)).min() else {
        return services;
    };

    let mut top = services.iter().filter(|s| depth(&s.key) == shallowest);
    let group = match top.next() {
        Some(first) if !first.group.is_empty() => first.group.clone(),
        _ => return services,
    };
    if top.any(|s| s.group != group) {
        return services;
    }

    services
        .into_iter()
        .filter(|s| s.group.is_empty() || s.group == group)
        .collect()
}
