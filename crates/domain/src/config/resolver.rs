use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

use super::errors::ConfigError;

/// Iterative resolver tuning.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Server queried first when the caller does not name one.
    #[serde(default = "default_root_server")]
    pub root_server: String,

    /// Starting point for nested lookups of name servers that came without glue.
    #[serde(default = "default_fallback_server")]
    pub fallback_server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Deadline for a single UDP round trip.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Extra attempts per round trip after a timeout.
    #[serde(default)]
    pub retries: u32,

    /// Maximum nesting of name-server hostname lookups.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum round trips per top-level lookup, nested lookups included.
    #[serde(default = "default_max_round_trips")]
    pub max_round_trips: usize,

    #[serde(default)]
    pub recursion_desired: bool,
}

impl ResolverConfig {
    pub fn root_server_addr(&self) -> Result<Ipv4Addr, ConfigError> {
        parse_server(&self.root_server)
    }

    pub fn fallback_server_addr(&self) -> Result<Ipv4Addr, ConfigError> {
        parse_server(&self.fallback_server)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.root_server_addr()?;
        self.fallback_server_addr()?;

        if self.port == 0 {
            return Err(ConfigError::Validation("Resolver port cannot be 0".to_string()));
        }
        if self.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Validation(
                "max_depth must be greater than 0".to_string(),
            ));
        }
        if self.max_round_trips == 0 {
            return Err(ConfigError::Validation(
                "max_round_trips must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            fallback_server: default_fallback_server(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            retries: 0,
            max_depth: default_max_depth(),
            max_round_trips: default_max_round_trips(),
            recursion_desired: false,
        }
    }
}

fn parse_server(s: &str) -> Result<Ipv4Addr, ConfigError> {
    s.parse::<Ipv4Addr>()
        .map_err(|_| ConfigError::InvalidServer(s.to_string()))
}

// a.root-servers.net
fn default_root_server() -> String {
    "198.41.0.4".to_string()
}

fn default_fallback_server() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_max_depth() -> usize {
    8
}

fn default_max_round_trips() -> usize {
    64
}
