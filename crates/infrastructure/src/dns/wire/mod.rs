//! DNS wire format (RFC 1035 §4.1)
//!
//! Hand-rolled codec for the subset the iterative resolver needs: the fixed
//! header, a single question, and resource records with compressed names.
//! Every reader takes the whole message buffer plus an absolute offset, since
//! compression pointers always address the full message.

pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod record;

pub use header::Header;
pub use message::{build_query, Message};
pub use name::{decode_name, encode_name, encode_name_into};
pub use question::Question;
pub use record::{RecordData, ResourceRecord};

use rootwalk_domain::DomainError;

/// Fixed size of the message header.
pub const HEADER_SIZE: usize = 12;

/// Largest response read over UDP (no EDNS(0) negotiation).
pub const MAX_UDP_PAYLOAD: usize = 512;

pub const MAX_LABEL_LEN: usize = 63;

pub(crate) fn read_slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], DomainError> {
    offset
        .checked_add(len)
        .and_then(|end| buf.get(offset..end))
        .ok_or_else(|| DomainError::buffer_too_short(offset, len, buf.len()))
}

pub(crate) fn read_u16(buf: &[u8], offset: usize) -> Result<u16, DomainError> {
    let bytes = read_slice(buf, offset, 2)?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

pub(crate) fn read_u32(buf: &[u8], offset: usize) -> Result<u32, DomainError> {
    let bytes = read_slice(buf, offset, 4)?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u16_big_endian() {
        assert_eq!(read_u16(&[0x01, 0x2c], 0).unwrap(), 300);
    }

    #[test]
    fn test_read_u32_big_endian() {
        assert_eq!(read_u32(&[0, 0, 0x0e, 0x10], 0).unwrap(), 3600);
    }

    #[test]
    fn test_read_past_end() {
        let err = read_u16(&[0x01], 0).unwrap_err();
        assert_eq!(err, DomainError::buffer_too_short(0, 2, 1));
    }

    #[test]
    fn test_read_offset_overflow() {
        assert!(read_slice(&[0u8; 4], usize::MAX, 2).is_err());
    }
}
