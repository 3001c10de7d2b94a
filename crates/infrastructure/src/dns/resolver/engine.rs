use super::config::EngineConfig;
use super::response::{inspect_response, ResponseOutcome};
use super::worklist::Worklist;
use crate::dns::transport::DnsTransport;
use crate::dns::wire::build_query;
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use rootwalk_application::ports::DnsResolver;
use rootwalk_domain::{DnsQuery, DomainError, RecordType, Resolution};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::debug;

/// Walks the delegation chain from a starting name server until some server
/// returns A records for the queried name.
///
/// Each top-level call owns its worklist and query ID. Nested lookups of
/// glueless name-server hostnames start at the configured fallback server
/// and share the caller's round-trip budget.
pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    config: EngineConfig,
}

struct Walk {
    addresses: Vec<Ipv4Addr>,
    server: Ipv4Addr,
}

impl IterativeResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, config: EngineConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub async fn lookup(&self, domain: &str, start: Ipv4Addr) -> Result<Resolution, DomainError> {
        let domain = domain.strip_suffix('.').unwrap_or(domain);
        let mut round_trips = 0usize;

        let walk = self.walk(domain, start, 0, &mut round_trips).await?;

        debug!(
            domain = %domain,
            addresses = walk.addresses.len(),
            server = %walk.server,
            round_trips,
            "Lookup finished"
        );

        Ok(Resolution {
            domain: domain.into(),
            addresses: walk.addresses,
            authoritative_server: walk.server,
            round_trips,
        })
    }

    fn walk<'a>(
        &'a self,
        domain: &'a str,
        start: Ipv4Addr,
        depth: usize,
        round_trips: &'a mut usize,
    ) -> BoxFuture<'a, Result<Walk, DomainError>> {
        async move {
            let id = fastrand::u16(..);
            let query = build_query(domain, id, self.config.recursion_desired)?;
            let mut worklist = Worklist::new(start);

            while let Some(server) = worklist.pop() {
                if *round_trips >= self.config.max_round_trips {
                    return Err(DomainError::ResolutionDepthExceeded {
                        limit: self.config.max_round_trips,
                    });
                }
                *round_trips += 1;

                debug!(
                    domain = %domain,
                    server = %server,
                    id,
                    depth,
                    pending = worklist.len(),
                    "Querying name server"
                );

                let response = self
                    .transport
                    .exchange(SocketAddr::from((server, self.config.port)), &query)
                    .await?;

                let (glue, name_servers) = match inspect_response(&response.bytes, id, domain)? {
                    ResponseOutcome::Answer(addresses) => {
                        return Ok(Walk { addresses, server });
                    }
                    ResponseOutcome::Referral { glue, name_servers } => (glue, name_servers),
                };

                for address in glue {
                    if worklist.push(address) {
                        debug!(domain = %domain, glue = %address, "Glue address enqueued");
                    }
                }

                if !worklist.is_empty() {
                    continue;
                }

                let Some(host) = name_servers.first() else {
                    break;
                };

                if depth + 1 > self.config.max_depth {
                    return Err(DomainError::ResolutionDepthExceeded {
                        limit: self.config.max_depth,
                    });
                }

                debug!(
                    domain = %domain,
                    name_server = %host,
                    fallback = %self.config.fallback_server,
                    depth = depth + 1,
                    "Resolving glueless name server"
                );

                let nested = self
                    .walk(host, self.config.fallback_server, depth + 1, round_trips)
                    .await?;

                for address in nested.addresses.into_iter().rev() {
                    if worklist.push(address) {
                        debug!(
                            domain = %domain,
                            name_server = %host,
                            address = %address,
                            "Name server address enqueued"
                        );
                    }
                }
            }

            Err(DomainError::UnresolvedDomain(domain.to_string()))
        }
        .boxed()
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(
        &self,
        query: &DnsQuery,
        start_server: Ipv4Addr,
    ) -> Result<Resolution, DomainError> {
        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            start = %start_server,
            "IterativeResolver: starting lookup"
        );

        if query.record_type != RecordType::A {
            return Err(DomainError::UnsupportedQueryType(
                query.record_type.to_string(),
            ));
        }

        self.lookup(&query.domain, start_server).await
    }
}
