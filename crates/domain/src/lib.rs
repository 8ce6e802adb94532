//! Ferrous SD Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod name;
pub mod query_state;
pub mod record_set;
pub mod service;
pub mod target;

pub use config::{CliOverrides, Config};
pub use dns_record::{DnsRecord, RecordData, RecordType};
pub use errors::DomainError;
pub use query_state::{QueryState, RecordClass};
pub use record_set::RecordSet;
pub use service::ServiceEntry;
pub use target::TargetKind;
