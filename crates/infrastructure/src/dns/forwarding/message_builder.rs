use super::record_type_map::RecordTypeMapper;
use ferrous_sd_domain::{DomainError, RecordClass, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// A serialized query together with the ID its answer must carry.
#[derive(Debug, Clone)]
pub struct OutgoingQuery {
    pub id: u16,

    pub bytes: Vec<u8>,
}

pub struct MessageBuilder;

impl MessageBuilder {
    /// Recursive (RD) query for `domain` with a random ID.
    pub fn build_query(
        domain: &str,
        record_type: RecordType,
        class: RecordClass,
    ) -> Result<OutgoingQuery, DomainError> {
        let name = Name::from_str(domain)
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", domain, e)))?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(RecordTypeMapper::class_to_hickory(class));

        let id = fastrand::u16(..);
        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let mut bytes = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut bytes);
        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("failed to encode query for {}: {}", domain, e))
        })?;

        Ok(OutgoingQuery { id, bytes })
    }
}
