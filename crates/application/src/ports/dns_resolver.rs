use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DomainError, Resolution};
use std::net::Ipv4Addr;

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Walks the delegation chain for `query`, starting at `start_server`.
    ///
    /// Only A queries are resolved; other types fail with
    /// `DomainError::UnsupportedQueryType`.
    async fn resolve(
        &self,
        query: &DnsQuery,
        start_server: Ipv4Addr,
    ) -> Result<Resolution, DomainError>;
}
