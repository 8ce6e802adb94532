#![allow(dead_code)]
use ferrous_sd_domain::ServiceEntry;

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

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.entry.ttl = ttl;
        self
    }

    pub fn target_strip(mut self, count: usize) -> Self {
        self.entry.target_strip = count;
        self
    }

    pub fn build(self) -> ServiceEntry {
        self.entry
    }
}
