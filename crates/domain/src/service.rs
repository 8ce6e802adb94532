use crate::dns_record::{DnsRecord, RecordData};
use crate::name::{fqdn, split_txt, target_strip};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

pub const DEFAULT_PRIORITY: u16 = 10;
pub const DEFAULT_TTL: u32 = 300;

/// One discovered service, as read from the backend.
///
/// The serialized form follows the SkyDNS service schema so values written
/// by existing registrators decode unchanged. `key` is not part of the value;
/// the backend fills it with the path the value was read from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ServiceEntry {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub port: u16,

    #[serde(default)]
    pub priority: u16,

    #[serde(default)]
    pub weight: u32,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub mail: bool,

    #[serde(default)]
    pub ttl: u32,

    #[serde(default, rename = "targetstrip")]
    pub target_strip: usize,

    #[serde(default)]
    pub group: String,

    #[serde(skip)]
    pub key: String,
}

impl ServiceEntry {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            priority: DEFAULT_PRIORITY,
            ttl: DEFAULT_TTL,
            ..Default::default()
        }
    }

    /// Target used by SRV and MX records: the host as an absolute name with
    /// `target_strip` leading labels removed.
    pub fn target(&self) -> String {
        target_strip(&fqdn(&self.host), self.target_strip)
    }

    pub fn new_a(&self, name: &str, addr: Ipv4Addr) -> DnsRecord {
        DnsRecord::new(name, self.ttl, RecordData::A(addr))
    }

    pub fn new_aaaa(&self, name: &str, addr: Ipv6Addr) -> DnsRecord {
        DnsRecord::new(name, self.ttl, RecordData::AAAA(addr))
    }

    pub fn new_cname(&self, name: &str, target: &str) -> DnsRecord {
        DnsRecord::new(
            name,
            self.ttl,
            RecordData::CNAME {
                target: fqdn(target),
            },
        )
    }

    pub fn new_srv(&self, name: &str, weight: u16) -> DnsRecord {
        DnsRecord::new(
            name,
            self.ttl,
            RecordData::SRV {
                priority: self.priority,
                weight,
                port: self.port,
                target: self.target(),
            },
        )
    }

    pub fn new_mx(&self, name: &str) -> DnsRecord {
        DnsRecord::new(
            name,
            self.ttl,
            RecordData::MX {
                preference: self.priority,
                exchange: self.target(),
            },
        )
    }

    pub fn new_txt(&self, name: &str) -> DnsRecord {
        DnsRecord::new(
            name,
            self.ttl,
            RecordData::TXT {
                chunks: split_txt(&self.text),
            },
        )
    }
}
