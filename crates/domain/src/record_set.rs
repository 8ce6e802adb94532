use crate::dns_record::DnsRecord;

/// Answer records plus the additional section that pre-resolves their targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub answers: Vec<DnsRecord>,
    pub extra: Vec<DnsRecord>,
}

impl RecordSet {
    pub fn new(answers: Vec<DnsRecord>, extra: Vec<DnsRecord>) -> Self {
        Self { answers, extra }
    }

    pub fn from_answers(answers: Vec<DnsRecord>) -> Self {
        Self {
            answers,
            extra: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.extra.is_empty()
    }
}
