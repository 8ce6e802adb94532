use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// What a service's `host` field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
    Name,
}

impl TargetKind {
    /// Strict address parsing; anything that is not an address is a name.
    /// IPv4-mapped IPv6 literals count as IPv4.
    pub fn classify(host: &str) -> Self {
        match host.parse::<IpAddr>() {
            Ok(IpAddr::V4(v4)) => TargetKind::V4(v4),
            Ok(IpAddr::V6(v6)) => match v6.to_ipv4_mapped() {
                Some(v4) => TargetKind::V4(v4),
                None => TargetKind::V6(v6),
            },
            Err(_) => TargetKind::Name,
        }
    }

    pub fn is_name(&self) -> bool {
        matches!(self, TargetKind::Name)
    }
}
