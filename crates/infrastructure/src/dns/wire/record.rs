use super::name::{decode_name, encode_name, encode_name_into};
use super::{read_slice, read_u16, read_u32};
use rootwalk_domain::{DomainError, RecordClass, RecordType};
use std::fmt;
use std::net::Ipv4Addr;

/// Size of TYPE + CLASS + TTL + RDLENGTH following a record's owner name.
const FIXED_FIELDS_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// Target host of an IN NS record, fully expanded.
    NameServer(String),
    /// Uninterpreted rdata; four address bytes for A records.
    Raw(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    /// RDLENGTH as carried on the wire.
    pub rdata_length: u16,
    pub data: RecordData,
}

impl ResourceRecord {
    /// IN A record from a dotted-decimal literal.
    pub fn a(name: impl Into<String>, ttl: u32, address: &str) -> Result<Self, DomainError> {
        let ip: Ipv4Addr = address
            .parse()
            .map_err(|_| DomainError::InvalidAddress(address.to_string()))?;

        Ok(Self {
            name: name.into(),
            rtype: RecordType::A.to_u16(),
            rclass: RecordClass::IN.to_u16(),
            ttl,
            rdata_length: 4,
            data: RecordData::Raw(ip.octets().to_vec()),
        })
    }

    /// IN NS record delegating `name` to `host`.
    pub fn ns(
        name: impl Into<String>,
        ttl: u32,
        host: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let host = host.into();
        let rdata_length = encode_name(&host)?.len() as u16;

        Ok(Self {
            name: name.into(),
            rtype: RecordType::NS.to_u16(),
            rclass: RecordClass::IN.to_u16(),
            ttl,
            rdata_length,
            data: RecordData::NameServer(host),
        })
    }

    /// Decodes the record at `offset`; returns it with its encoded length.
    ///
    /// NS rdata is decoded against the whole message so that compression
    /// pointers inside it resolve to absolute offsets.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let (name, name_len) = decode_name(buf, offset)?;
        let fixed = offset + name_len;

        read_slice(buf, fixed, FIXED_FIELDS_LEN)?;
        let rtype = read_u16(buf, fixed)?;
        let rclass = read_u16(buf, fixed + 2)?;
        let ttl = read_u32(buf, fixed + 4)?;
        let rdata_length = read_u16(buf, fixed + 8)?;

        let rdata_start = fixed + FIXED_FIELDS_LEN;
        let rdata = read_slice(buf, rdata_start, rdata_length as usize)?;

        let data = if rtype == RecordType::NS.to_u16() && rclass == RecordClass::IN.to_u16() {
            let (host, host_len) = decode_name(buf, rdata_start)?;
            if host_len != rdata.len() {
                return Err(DomainError::InvalidDomainName(format!(
                    "NS rdata is {} bytes but its name occupies {}",
                    rdata.len(),
                    host_len
                )));
            }
            RecordData::NameServer(host)
        } else {
            RecordData::Raw(rdata.to_vec())
        };

        let record = Self {
            name,
            rtype,
            rclass,
            ttl,
            rdata_length,
            data,
        };

        Ok((record, name_len + FIXED_FIELDS_LEN + rdata_length as usize))
    }

    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(self.name.len() + 16);
        self.encode_into(&mut buf)?;
        Ok(buf)
    }

    /// Appends the record without name compression.
    ///
    /// A records must carry exactly four address bytes.
    pub fn encode_into(&self, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        let rdata = match &self.data {
            RecordData::NameServer(host) => encode_name(host)?,
            RecordData::Raw(bytes) if self.rtype == RecordType::A.to_u16() => {
                if bytes.len() != 4 {
                    return Err(DomainError::InvalidAddress(format!("{:?}", bytes)));
                }
                bytes.clone()
            }
            RecordData::Raw(bytes) => bytes.clone(),
        };

        let rdata_length = u16::try_from(rdata.len()).map_err(|_| {
            DomainError::InvalidDomainName(format!("rdata of {} bytes is too long", rdata.len()))
        })?;

        encode_name_into(&self.name, buf)?;
        buf.extend_from_slice(&self.rtype.to_be_bytes());
        buf.extend_from_slice(&self.rclass.to_be_bytes());
        buf.extend_from_slice(&self.ttl.to_be_bytes());
        buf.extend_from_slice(&rdata_length.to_be_bytes());
        buf.extend_from_slice(&rdata);
        Ok(())
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn is_internet(&self) -> bool {
        self.rclass == RecordClass::IN.to_u16()
    }

    /// Address of an IN A record with a four-byte payload.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.rtype != RecordType::A.to_u16() || !self.is_internet() {
            return None;
        }
        match &self.data {
            RecordData::Raw(bytes) if bytes.len() == 4 => {
                Some(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]))
            }
            _ => None,
        }
    }

    /// Target host of an IN NS record.
    pub fn name_server(&self) -> Option<&str> {
        match &self.data {
            RecordData::NameServer(host) => Some(host),
            RecordData::Raw(_) => None,
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = RecordClass::from_u16(self.rclass)
            .map(|c| c.to_string())
            .unwrap_or_else(|| format!("CLASS{}", self.rclass));
        let rtype = self
            .record_type()
            .map(|t| t.to_string())
            .unwrap_or_else(|| format!("TYPE{}", self.rtype));

        write!(f, "{} {} {} {} ", self.name, self.ttl, class, rtype)?;

        if let Some(ip) = self.ipv4() {
            return write!(f, "{}", ip);
        }
        match &self.data {
            RecordData::NameServer(host) => write!(f, "{}", host),
            RecordData::Raw(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}
