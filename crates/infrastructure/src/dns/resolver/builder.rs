use super::config::EngineConfig;
use super::engine::IterativeResolver;
use crate::dns::transport::DnsTransport;
use rootwalk_application::ports::DnsResolver;
use std::sync::Arc;
use tracing::debug;

pub struct ResolverBuilder {
    transport: Arc<dyn DnsTransport>,
    config: EngineConfig,
}

impl ResolverBuilder {
    pub fn new(transport: Arc<dyn DnsTransport>) -> Self {
        Self {
            transport,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Arc<dyn DnsResolver> {
        debug!(
            transport = self.transport.protocol_name(),
            fallback = %self.config.fallback_server,
            port = self.config.port,
            max_depth = self.config.max_depth,
            max_round_trips = self.config.max_round_trips,
            "Building iterative resolver"
        );

        Arc::new(IterativeResolver::new(self.transport, self.config))
    }
}
