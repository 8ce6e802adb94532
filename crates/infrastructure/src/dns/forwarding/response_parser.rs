use super::record_converter::RecordConverter;
use ferrous_sd_domain::{DnsRecord, DomainError};
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer section, restricted to the record types this crate knows.
    pub answers: Vec<DnsRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes)
            .map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))?;

        let total = message.answers().len();
        let answers: Vec<DnsRecord> = message
            .answers()
            .iter()
            .filter_map(RecordConverter::from_hickory)
            .collect();

        let parsed = ParsedResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            answers,
        };

        debug!(
            rcode = ?parsed.rcode,
            answers = parsed.answers.len(),
            skipped = total - parsed.answers.len(),
            truncated = parsed.truncated,
            "DNS response parsed"
        );

        Ok(parsed)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
