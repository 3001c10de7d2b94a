use super::name::{decode_name, encode_name_into};
use super::read_u16;
use rootwalk_domain::{DomainError, RecordClass, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            qtype: record_type.to_u16(),
            qclass: RecordClass::IN.to_u16(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(self.name.len() + 6);
        self.encode_into(&mut buf)?;
        Ok(buf)
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        encode_name_into(&self.name, buf)?;
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        Ok(())
    }

    /// Decodes the question at `offset`; returns it with its encoded length.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let (name, name_len) = decode_name(buf, offset)?;
        let fixed = offset + name_len;

        let question = Self {
            name,
            qtype: read_u16(buf, fixed)?,
            qclass: read_u16(buf, fixed + 2)?,
        };

        Ok((question, name_len + 4))
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }
}
