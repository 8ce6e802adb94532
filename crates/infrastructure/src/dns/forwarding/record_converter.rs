use ferrous_sd_domain::name::fqdn;
use ferrous_sd_domain::{DnsRecord, DomainError, RecordData};
use hickory_proto::rr::rdata::{self, MX, SRV, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

/// Conversion between synthesized records and hickory wire records.
pub struct RecordConverter;

impl RecordConverter {
    pub fn to_hickory(record: &DnsRecord) -> Result<Record, DomainError> {
        let rdata = match &record.data {
            RecordData::A(addr) => RData::A(rdata::A(*addr)),
            RecordData::AAAA(addr) => RData::AAAA(rdata::AAAA(*addr)),
            RecordData::CNAME { target } => RData::CNAME(rdata::CNAME(parse_name(target)?)),
            RecordData::SRV {
                priority,
                weight,
                port,
                target,
            } => RData::SRV(SRV::new(*priority, *weight, *port, parse_name(target)?)),
            RecordData::MX {
                preference,
                exchange,
            } => RData::MX(MX::new(*preference, parse_name(exchange)?)),
            RecordData::TXT { chunks } => RData::TXT(TXT::new(chunks.clone())),
        };

        Ok(Record::from_rdata(parse_name(&record.name)?, record.ttl, rdata))
    }

    /// `None` for record types that are never synthesized.
    pub fn from_hickory(record: &Record) -> Option<DnsRecord> {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(cname) => RecordData::CNAME {
                target: fqdn(&cname.to_utf8()),
            },
            RData::SRV(srv) => RecordData::SRV {
                priority: srv.priority(),
                weight: srv.weight(),
                port: srv.port(),
                target: fqdn(&srv.target().to_utf8()),
            },
            RData::MX(mx) => RecordData::MX {
                preference: mx.preference(),
                exchange: fqdn(&mx.exchange().to_utf8()),
            },
            RData::TXT(txt) => RecordData::TXT {
                chunks: txt
                    .txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                    .collect(),
            },
            _ => return None,
        };

        Some(DnsRecord::new(
            fqdn(&record.name().to_utf8()),
            record.ttl(),
            data,
        ))
    }
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(&fqdn(name))
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
}
