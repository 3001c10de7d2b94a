#![allow(dead_code)]
use rootwalk_domain::RecordType;
use rootwalk_infrastructure::dns::wire::header::RCODE_MASK;
use rootwalk_infrastructure::dns::wire::{Message, Question, RecordData, ResourceRecord};

/// Builds a response to a captured query, echoing its ID and question
/// unless told otherwise.
pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn for_query(query: &[u8]) -> Self {
        let query = Message::decode(query).unwrap();
        Self {
            message: Message::response_to(&query, 0),
        }
    }

    pub fn for_name(id: u16, name: &str) -> Self {
        let query = Message::query(id, Question::new(name, RecordType::A), false);
        Self {
            message: Message::response_to(&query, 0),
        }
    }

    pub fn answer(mut self, name: &str, ip: &str) -> Self {
        self.message
            .answers
            .push(ResourceRecord::a(name, 300, ip).unwrap());
        self
    }

    pub fn delegation(mut self, zone: &str, host: &str) -> Self {
        self.message
            .authorities
            .push(ResourceRecord::ns(zone, 172800, host).unwrap());
        self
    }

    pub fn glue(mut self, host: &str, ip: &str) -> Self {
        self.message
            .additionals
            .push(ResourceRecord::a(host, 172800, ip).unwrap());
        self
    }

    /// Authority-section SOA with opaque rdata, as sent with negative answers.
    pub fn soa(mut self, zone: &str) -> Self {
        let rdata = vec![0u8; 22];
        self.message.authorities.push(ResourceRecord {
            name: zone.to_string(),
            rtype: RecordType::SOA.to_u16(),
            rclass: 1,
            ttl: 3600,
            rdata_length: rdata.len() as u16,
            data: RecordData::Raw(rdata),
        });
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.message.header.flags =
            (self.message.header.flags & !RCODE_MASK) | (rcode as u16 & RCODE_MASK);
        self
    }

    pub fn id(mut self, id: u16) -> Self {
        self.message.header.id = id;
        self
    }

    pub fn echo_name(mut self, name: &str) -> Self {
        self.message.questions = vec![Question::new(name, RecordType::A)];
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.message.encode().unwrap()
    }
}
