//! rootwalk domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, ResolverConfig};
pub use dns_query::{names_equal, normalize_name, DnsQuery};
pub use dns_record::{RecordClass, RecordType};
pub use errors::DomainError;
pub use resolution::Resolution;
