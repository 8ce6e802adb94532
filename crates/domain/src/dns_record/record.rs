use super::RecordType;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of a synthesized record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),

    AAAA(Ipv6Addr),

    CNAME {
        target: String,
    },

    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },

    MX {
        preference: u16,
        exchange: String,
    },

    /// Character-strings of at most 255 bytes each.
    TXT {
        chunks: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,

    pub ttl: u32,

    pub data: RecordData,
}

impl DnsRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME { .. } => RecordType::CNAME,
            RecordData::SRV { .. } => RecordType::SRV,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::TXT { .. } => RecordType::TXT,
        }
    }

    pub fn is_cname(&self) -> bool {
        matches!(self.data, RecordData::CNAME { .. })
    }

    /// Name this record points at: CNAME target, SRV target or MX exchange.
    pub fn target(&self) -> Option<&str> {
        match &self.data {
            RecordData::CNAME { target } | RecordData::SRV { target, .. } => Some(target),
            RecordData::MX { exchange, .. } => Some(exchange),
            _ => None,
        }
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\tIN\t{}\t", self.name, self.ttl, self.record_type())?;
        match &self.data {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::AAAA(addr) => write!(f, "{}", addr),
            RecordData::CNAME { target } => write!(f, "{}", target),
            RecordData::SRV {
                priority,
                weight,
                port,
                target,
            } => write!(f, "{} {} {} {}", priority, weight, port, target),
            RecordData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RecordData::TXT { chunks } => {
                let quoted: Vec<String> = chunks.iter().map(|c| format!("{:?}", c)).collect();
                write!(f, "{}", quoted.join(" "))
            }
        }
    }
}
