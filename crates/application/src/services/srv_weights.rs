use ferrous_sd_domain::ServiceEntry;
use rustc_hash::FxHashMap;

/// Share given to entries stored without a weight.
pub const DEFAULT_WEIGHT: u32 = 100;

/// Turns raw service weights into SRV weights, proportionally within each
/// priority.
pub struct SrvWeights;

impl SrvWeights {
    /// One weight per entry, in input order.
    ///
    /// The first pass totals every priority (an unweighted entry counts as
    /// [`DEFAULT_WEIGHT`]); the second scales each entry against its
    /// priority's total. The result is floored and saturates at `u16::MAX`.
    pub fn compute(services: &[ServiceEntry]) -> Vec<u16> {
        let mut totals: FxHashMap<u16, u64> = FxHashMap::default();
        for service in services {
            *totals.entry(service.priority).or_insert(0) += u64::from(Self::share(service));
        }

        services
            .iter()
            .map(|service| {
                let total = totals.get(&service.priority).copied().unwrap_or(0);
                if total == 0 {
                    return 0;
                }
                let weight = 100.0 / total as f64 * f64::from(Self::share(service));
                weight.floor() as u16
            })
            .collect()
    }

    fn share(service: &ServiceEntry) -> u32 {
        if service.weight == 0 {
            DEFAULT_WEIGHT
        } else {
            service.weight
        }
    }
}
