#![allow(dead_code)]
use ferrous_sd_domain::{DnsRecord, RecordData, ServiceEntry};
use std::net::{Ipv4Addr, Ipv6Addr};

pub struct ServiceEntryBuilder {
    entry: ServiceEntry,
}

impl ServiceEntryBuilder {
    pub fn new(host: &str) -> Self {
        Self {
            entry: ServiceEntry {
                key: "/skydns/local/skydns/svc".to_string(),
                ..ServiceEntry::new(host)
            },
        }
    }

    pub fn key(mut self, key: &str) -> Self {
        self.entry.key = key.to_string();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.entry.port = port;
        self
    }

    pub fn priority(mut self, priority: u16) -> Self {
        self.entry.priority = priority;
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.entry.weight = weight;
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.entry.text = text.to_string();
        self
    }

    pub fn mail(mut self) -> Self {
        self.entry.mail = true;
        self
    }

    pub fn build(self) -> ServiceEntry {
        self.entry
    }
}

pub fn a_record(name: &str, addr: &str) -> DnsRecord {
    DnsRecord::new(name, 300, RecordData::A(addr.parse::<Ipv4Addr>().unwrap()))
}

pub fn aaaa_record(name: &str, addr: &str) -> DnsRecord {
    DnsRecord::new(name, 300, RecordData::AAAA(addr.parse::<Ipv6Addr>().unwrap()))
}

pub fn cname_record(name: &str, target: &str) -> DnsRecord {
    DnsRecord::new(
        name,
        300,
        RecordData::CNAME {
            target: target.to_string(),
        },
    )
}
