use super::header::{Header, FLAG_RECURSION_DESIRED, FLAG_RESPONSE, RCODE_MASK};
use super::question::Question;
use super::record::ResourceRecord;
use super::HEADER_SIZE;
use rootwalk_domain::{DomainError, RecordType};

const OPCODE_MASK: u16 = 0x7800;

/// A fully decoded message: header plus every section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn query(id: u16, question: Question, recursion_desired: bool) -> Self {
        Self {
            header: Header::query(id, recursion_desired),
            questions: vec![question],
            ..Self::default()
        }
    }

    /// Response skeleton echoing the query's ID and questions.
    pub fn response_to(query: &Message, rcode: u8) -> Self {
        Self {
            header: Header {
                id: query.header.id,
                flags: FLAG_RESPONSE
                    | (query.header.flags & (OPCODE_MASK | FLAG_RECURSION_DESIRED))
                    | (rcode as u16 & RCODE_MASK),
                ..Header::default()
            },
            questions: query.questions.clone(),
            ..Self::default()
        }
    }

    /// Decodes every section, walking the buffer sequentially.
    pub fn decode(buf: &[u8]) -> Result<Self, DomainError> {
        let header = Header::decode(buf)?;
        let mut offset = HEADER_SIZE;

        let mut questions = Vec::with_capacity(header.question_count as usize);
        for _ in 0..header.question_count {
            let (question, len) = Question::decode(buf, offset)?;
            offset += len;
            questions.push(question);
        }

        let (answers, next) = decode_section(buf, offset, header.answer_count)?;
        let (authorities, next) = decode_section(buf, next, header.authority_count)?;
        let (additionals, _) = decode_section(buf, next, header.additional_count)?;

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    /// Encodes the message without name compression. Section counts are taken
    /// from the vectors, not from `header`.
    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        let count = |n: usize| {
            u16::try_from(n).map_err(|_| {
                DomainError::InvalidDomainName(format!("section of {} entries is too large", n))
            })
        };

        let header = Header {
            question_count: count(self.questions.len())?,
            answer_count: count(self.answers.len())?,
            authority_count: count(self.authorities.len())?,
            additional_count: count(self.additionals.len())?,
            ..self.header
        };

        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&header.encode());
        for question in &self.questions {
            question.encode_into(&mut buf)?;
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.encode_into(&mut buf)?;
        }
        Ok(buf)
    }

    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }
}

/// Decodes `count` records starting at `offset`; returns them with the
/// offset just past the last one.
pub fn decode_section(
    buf: &[u8],
    offset: usize,
    count: u16,
) -> Result<(Vec<ResourceRecord>, usize), DomainError> {
    let mut records = Vec::with_capacity(count as usize);
    let mut offset = offset;

    for _ in 0..count {
        let (record, len) = ResourceRecord::decode(buf, offset)?;
        offset += len;
        records.push(record);
    }

    Ok((records, offset))
}

/// Builds the wire bytes of a single-question A query.
pub fn build_query(domain: &str, id: u16, recursion_desired: bool) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + domain.len() + 6);
    buf.extend_from_slice(&Header::query(id, recursion_desired).encode());
    Question::new(domain, RecordType::A).encode_into(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_layout() {
        let bytes = build_query("example.com", 0x1234, false).unwrap();

        assert_eq!(&bytes[0..2], &[0x12, 0x34]);
        assert_eq!(&bytes[2..4], &[0x00, 0x00], "non-recursive query");
        assert_eq!(&bytes[4..6], &[0x00, 0x01]);
        assert_eq!(&bytes[6..12], &[0; 6]);
        assert_eq!(bytes.len(), HEADER_SIZE + 17);
    }

    #[test]
    fn test_build_query_recursion_desired() {
        let bytes = build_query("example.com", 1, true).unwrap();
        assert_eq!(bytes[2] & 0x01, 0x01, "RD flag should be set");
    }

    #[test]
    fn test_build_query_label_too_long() {
        let name = format!("{}.example.com", "a".repeat(64));
        assert!(matches!(
            build_query(&name, 1, false),
            Err(DomainError::LabelTooLong { .. })
        ));
    }

    #[test]
    fn test_message_roundtrip() {
        let query = Message::query(77, Question::new("example.com", RecordType::A), false);
        let mut response = Message::response_to(&query, 0);
        response
            .authorities
            .push(ResourceRecord::ns("example.com", 3600, "ns1.example.com").unwrap());
        response
            .additionals
            .push(ResourceRecord::a("ns1.example.com", 3600, "203.0.113.1").unwrap());

        let bytes = response.encode().unwrap();
        let decoded = Message::decode(&bytes).unwrap();

        assert_eq!(decoded.header.id, 77);
        assert!(decoded.header.is_response());
        assert_eq!(decoded.header.authority_count, 1);
        assert_eq!(decoded.header.additional_count, 1);
        assert_eq!(decoded.question().unwrap().name, "example.com");
        assert_eq!(decoded.authorities, response.authorities);
        assert_eq!(decoded.additionals, response.additionals);
    }

    #[test]
    fn test_response_to_carries_rcode() {
        let query = Message::query(5, Question::new("example.com", RecordType::A), true);
        let response = Message::response_to(&query, 3);

        assert_eq!(response.header.response_code(), 3);
        assert!(response.header.recursion_desired());
    }

    #[test]
    fn test_decode_short_message() {
        assert!(matches!(
            Message::decode(&[0u8; 11]),
            Err(DomainError::BufferTooShort { .. })
        ));
    }

    #[test]
    fn test_decode_count_exceeds_data() {
        let query = Message::query(5, Question::new("example.com", RecordType::A), false);
        let mut bytes = Message::response_to(&query, 0).encode().unwrap();
        // claim one answer that is not there
        bytes[7] = 1;

        assert!(matches!(
            Message::decode(&bytes),
            Err(DomainError::BufferTooShort { .. })
        ));
    }
}
