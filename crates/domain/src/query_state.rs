use super::dns_record::RecordType;
use crate::name::fqdn;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordClass {
    #[default]
    IN,
    CH,
    HS,
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordClass::IN => "IN",
            RecordClass::CH => "CH",
            RecordClass::HS => "HS",
        };
        f.write_str(s)
    }
}

impl FromStr for RecordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(RecordClass::IN),
            "CH" => Ok(RecordClass::CH),
            "HS" => Ok(RecordClass::HS),
            _ => Err(format!("Unknown record class: {}", s)),
        }
    }
}

/// The question being answered at one point of the call tree.
///
/// `name` keeps the casing the client sent, in absolute form. The class is
/// carried into every query forwarded upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl QueryState {
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            name: fqdn(name).into(),
            record_type,
            class: RecordClass::IN,
        }
    }

    pub fn with_class(mut self, class: RecordClass) -> Self {
        self.class = class;
        self
    }

    /// Same question asked about another name, as used when following a CNAME.
    pub fn with_name(&self, name: &str) -> Self {
        Self {
            name: fqdn(name).into(),
            record_type: self.record_type,
            class: self.class,
        }
    }
}
