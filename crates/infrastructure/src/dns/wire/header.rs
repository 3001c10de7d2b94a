use super::{read_slice, HEADER_SIZE};
use rootwalk_domain::DomainError;

pub const FLAG_RESPONSE: u16 = 0x8000;
pub const FLAG_AUTHORITATIVE: u16 = 0x0400;
pub const FLAG_TRUNCATED: u16 = 0x0200;
pub const FLAG_RECURSION_DESIRED: u16 = 0x0100;
pub const FLAG_RECURSION_AVAILABLE: u16 = 0x0080;
pub const RCODE_MASK: u16 = 0x000F;

/// The fixed 12-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    /// QR, opcode, AA/TC/RD/RA bits and the response code, packed.
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    /// Header for a standard query carrying one question.
    pub fn query(id: u16, recursion_desired: bool) -> Self {
        Self {
            id,
            flags: if recursion_desired {
                FLAG_RECURSION_DESIRED
            } else {
                0
            },
            question_count: 1,
            ..Self::default()
        }
    }

    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..2].copy_from_slice(&self.id.to_be_bytes());
        buf[2..4].copy_from_slice(&self.flags.to_be_bytes());
        buf[4..6].copy_from_slice(&self.question_count.to_be_bytes());
        buf[6..8].copy_from_slice(&self.answer_count.to_be_bytes());
        buf[8..10].copy_from_slice(&self.authority_count.to_be_bytes());
        buf[10..12].copy_from_slice(&self.additional_count.to_be_bytes());
        buf
    }

    pub fn decode(buf: &[u8]) -> Result<Self, DomainError> {
        let b = read_slice(buf, 0, HEADER_SIZE)?;
        let field = |i: usize| u16::from_be_bytes([b[i], b[i + 1]]);

        Ok(Self {
            id: field(0),
            flags: field(2),
            question_count: field(4),
            answer_count: field(6),
            authority_count: field(8),
            additional_count: field(10),
        })
    }

    pub fn response_code(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_RESPONSE != 0
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags & FLAG_AUTHORITATIVE != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & FLAG_TRUNCATED != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RECURSION_DESIRED != 0
    }

    /// Answer, authority and additional records combined.
    pub fn record_count(&self) -> u32 {
        self.answer_count as u32 + self.authority_count as u32 + self.additional_count as u32
    }

    /// Checks a response header against the ID of the query it answers.
    ///
    /// Response codes 1-5 map to their errors; any other code passes. A
    /// response without a single record in any section is rejected.
    pub fn verify(&self, expected_id: u16) -> Result<(), DomainError> {
        if self.id != expected_id {
            return Err(DomainError::IdMismatch {
                expected: expected_id,
                found: self.id,
            });
        }

        match self.response_code() {
            1 => return Err(DomainError::FormatError),
            2 => return Err(DomainError::ServerFailure),
            3 => return Err(DomainError::NameError),
            4 => return Err(DomainError::NotImplemented),
            5 => return Err(DomainError::Refused),
            _ => {}
        }

        if self.record_count() == 0 {
            return Err(DomainError::EmptyResponse);
        }

        Ok(())
    }
}
