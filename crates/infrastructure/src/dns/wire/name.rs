//! Domain-name encoding with compression-pointer aware decoding.

use super::MAX_LABEL_LEN;
use rootwalk_domain::DomainError;
use std::collections::HashSet;

const POINTER_MASK: u8 = 0xC0;

/// Encodes a dotted name as length-prefixed labels ending in a zero byte.
///
/// A single trailing dot is accepted; `""` and `"."` encode the root name.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(name.len() + 2);
    encode_name_into(name, &mut buf)?;
    Ok(buf)
}

pub fn encode_name_into(name: &str, buf: &mut Vec<u8>) -> Result<(), DomainError> {
    let name = name.strip_suffix('.').unwrap_or(name);

    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::LabelTooLong {
                    label: label.to_string(),
                    len: label.len(),
                });
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }

    buf.push(0);
    Ok(())
}

/// Decodes the name stored at `offset`, following compression pointers.
///
/// Returns the dotted name (no trailing dot) and the number of bytes the name
/// occupies at `offset`. A pointer counts as two bytes regardless of how long
/// the name it refers to is. Labels must be UTF-8 without embedded dots, so
/// the dotted form always encodes back to the same labels.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    let mut labels: Vec<&str> = Vec::new();
    let mut visited: HashSet<usize> = HashSet::new();
    let mut consumed: Option<usize> = None;
    let mut pos = offset;

    visited.insert(offset);

    let consumed = loop {
        let len = *buf
            .get(pos)
            .ok_or_else(|| DomainError::buffer_too_short(pos, 1, buf.len()))?;

        match len & POINTER_MASK {
            0x00 if len == 0 => {
                break consumed.unwrap_or_else(|| pos + 1 - offset);
            }
            0x00 => {
                let start = pos + 1;
                let end = start + len as usize;
                let bytes = buf
                    .get(start..end)
                    .ok_or_else(|| DomainError::buffer_too_short(start, len as usize, buf.len()))?;
                labels.push(decode_label(bytes)?);
                pos = end;
            }
            POINTER_MASK => {
                let low = *buf
                    .get(pos + 1)
                    .ok_or_else(|| DomainError::buffer_too_short(pos, 2, buf.len()))?;
                let target = (((len & !POINTER_MASK) as usize) << 8) | low as usize;

                if consumed.is_none() {
                    consumed = Some(pos + 2 - offset);
                }
                if !visited.insert(target) {
                    return Err(DomainError::CircularReference(target));
                }
                pos = target;
            }
            _ => return Err(DomainError::UnsupportedLabelType(len)),
        }
    };

    Ok((labels.join("."), consumed))
}

fn decode_label(bytes: &[u8]) -> Result<&str, DomainError> {
    let label = std::str::from_utf8(bytes)
        .map_err(|_| DomainError::InvalidDomainName(format!("non UTF-8 label {:?}", bytes)))?;
    if label.contains('.') {
        return Err(DomainError::InvalidDomainName(format!(
            "label '{}' contains a dot",
            label
        )));
    }
    Ok(label)
}
