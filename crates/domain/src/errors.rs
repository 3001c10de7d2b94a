use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Buffer too short: need {needed} bytes at offset {offset}, have {available}")]
    BufferTooShort {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Label too long ({len} bytes, max 63): {label}")]
    LabelTooLong { label: String, len: usize },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Circular compression pointer to offset {0}")]
    CircularReference(usize),

    #[error("Unsupported label type byte 0x{0:02x}")]
    UnsupportedLabelType(u8),

    #[error("Response ID {found} does not match query ID {expected}")]
    IdMismatch { expected: u16, found: u16 },

    #[error("Server reported a format error in the query (FORMERR)")]
    FormatError,

    #[error("Server failure (SERVFAIL)")]
    ServerFailure,

    #[error("Domain not found (NXDOMAIN)")]
    NameError,

    #[error("Server does not implement the query (NOTIMP)")]
    NotImplemented,

    #[error("Server refused the query (REFUSED)")]
    Refused,

    #[error("Response carries no answer, authority or additional records")]
    EmptyResponse,

    #[error("Echoed question {found} does not match query {expected}")]
    QuestionMismatch { expected: String, found: String },

    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("Transport error talking to {server}: {message}")]
    Transport { server: String, message: String },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Unsupported query type {0}, only A lookups are resolved")]
    UnsupportedQueryType(String),

    #[error("Failed to resolve {0}")]
    UnresolvedDomain(String),

    #[error("Resolution depth exceeded (limit {limit})")]
    ResolutionDepthExceeded { limit: usize },
}

impl DomainError {
    pub fn buffer_too_short(offset: usize, needed: usize, available: usize) -> Self {
        Self::BufferTooShort {
            offset,
            needed,
            available,
        }
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::TransportTimeout { .. })
    }

    /// True for errors raised while decoding or validating wire bytes.
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            Self::BufferTooShort { .. }
                | Self::LabelTooLong { .. }
                | Self::InvalidDomainName(_)
                | Self::CircularReference(_)
                | Self::UnsupportedLabelType(_)
                | Self::IdMismatch { .. }
                | Self::QuestionMismatch { .. }
        )
    }
}
