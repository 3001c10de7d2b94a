use crate::ports::DnsResolver;
use rootwalk_domain::{DnsQuery, DomainError, RecordType, Resolution};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
    default_server: Ipv4Addr,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>, default_server: Ipv4Addr) -> Self {
        Self {
            resolver,
            default_server,
        }
    }

    /// Resolves the A records of `domain`, starting at `server` or at the
    /// configured default server when none is given.
    pub async fn execute(
        &self,
        domain: &str,
        server: Option<Ipv4Addr>,
    ) -> Result<Resolution, DomainError> {
        let start = Instant::now();
        let start_server = server.unwrap_or(self.default_server);
        let query = DnsQuery::new(domain, RecordType::A);

        debug!(domain = %query.domain, server = %start_server, "Starting iterative resolution");

        match self.resolver.resolve(&query, start_server).await {
            Ok(resolution) => {
                info!(
                    domain = %resolution.domain,
                    addresses = resolution.addresses.len(),
                    server = %resolution.authoritative_server,
                    round_trips = resolution.round_trips,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Resolution complete"
                );
                Ok(resolution)
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Resolution failed"
                );
                Err(e)
            }
        }
    }
}
