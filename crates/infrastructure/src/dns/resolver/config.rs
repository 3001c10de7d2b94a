use rootwalk_domain::{ConfigError, ResolverConfig};
use std::net::Ipv4Addr;

/// Runtime settings of the iterative engine, with addresses already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Where nested lookups of glueless name servers start.
    pub fallback_server: Ipv4Addr,

    pub port: u16,

    pub max_depth: usize,

    pub max_round_trips: usize,

    pub recursion_desired: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback_server: Ipv4Addr::new(8, 8, 8, 8),
            port: 53,
            max_depth: 8,
            max_round_trips: 64,
            recursion_desired: false,
        }
    }
}

impl EngineConfig {
    pub fn with_fallback_server(mut self, server: Ipv4Addr) -> Self {
        self.fallback_server = server;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_round_trips(mut self, max_round_trips: usize) -> Self {
        self.max_round_trips = max_round_trips;
        self
    }

    pub fn with_recursion_desired(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }
}

impl TryFrom<&ResolverConfig> for EngineConfig {
    type Error = ConfigError;

    fn try_from(config: &ResolverConfig) -> Result<Self, Self::Error> {
        config.validate()?;

        Ok(Self {
            fallback_server: config.fallback_server_addr()?,
            port: config.port,
            max_depth: config.max_depth,
            max_round_trips: config.max_round_trips,
            recursion_desired: config.recursion_desired,
        })
    }
}
