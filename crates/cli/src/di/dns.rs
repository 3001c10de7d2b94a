use rootwalk_application::use_cases::ResolveDomainUseCase;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{EngineConfig, ResolverBuilder, UdpTransport};
use std::sync::Arc;
use tracing::debug;

pub struct DnsServices {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver_config = &config.resolver;

        let transport = Arc::new(
            UdpTransport::new(resolver_config.query_timeout()).with_retries(resolver_config.retries),
        );

        debug!(
            root = %resolver_config.root_server,
            timeout_ms = resolver_config.query_timeout_ms,
            retries = resolver_config.retries,
            "Initializing iterative resolver"
        );

        let resolver = ResolverBuilder::new(transport)
            .with_config(EngineConfig::try_from(resolver_config)?)
            .build();

        let resolve_domain = Arc::new(ResolveDomainUseCase::new(
            resolver,
            resolver_config.root_server_addr()?,
        ));

        Ok(Self { resolve_domain })
    }
}
