use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    /// Queried name without a trailing dot, e.g. `"example.com"`.
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl AsRef<str>, record_type: RecordType) -> Self {
        let domain = domain.as_ref();
        let trimmed = domain.strip_suffix('.').unwrap_or(domain);
        Self {
            domain: trimmed.into(),
            record_type,
        }
    }

    /// Compares `name` with the queried domain, ignoring ASCII case and a
    /// single trailing dot on either side.
    pub fn matches_name(&self, name: &str) -> bool {
        names_equal(&self.domain, name)
    }
}

/// Lower-cases `name` and strips one trailing dot.
pub fn normalize_name(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}

pub fn names_equal(a: &str, b: &str) -> bool {
    let a = a.strip_suffix('.').unwrap_or(a);
    let b = b.strip_suffix('.').unwrap_or(b);
    a.eq_ignore_ascii_case(b)
}
