use ferrous_sd_domain::{RecordClass, RecordType};
use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};

/// Mapping from the synthesized record types and classes to hickory's.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::SRV => HickoryRecordType::SRV,
        }
    }

    pub fn class_to_hickory(class: RecordClass) -> DNSClass {
        match class {
            RecordClass::IN => DNSClass::IN,
            RecordClass::CH => DNSClass::CH,
            RecordClass::HS => DNSClass::HS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_map_to_matching_codes() {
        assert_eq!(RecordTypeMapper::to_hickory(RecordType::A), HickoryRecordType::A);
        assert_eq!(RecordTypeMapper::to_hickory(RecordType::AAAA), HickoryRecordType::AAAA);
        assert_eq!(RecordTypeMapper::to_hickory(RecordType::SRV), HickoryRecordType::SRV);
    }

    #[test]
    fn test_classes_map_to_matching_codes() {
        assert_eq!(RecordTypeMapper::class_to_hickory(RecordClass::IN), DNSClass::IN);
        assert_eq!(RecordTypeMapper::class_to_hickory(RecordClass::CH), DNSClass::CH);
        assert_eq!(RecordTypeMapper::class_to_hickory(RecordClass::HS), DNSClass::HS);
    }
}
