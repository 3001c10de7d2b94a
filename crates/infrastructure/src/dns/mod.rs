pub mod resolver;
pub mod transport;
pub mod wire;

pub use resolver::{EngineConfig, IterativeResolver, ResolverBuilder, Worklist};
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
pub use wire::{Header, Message, Question, RecordData, ResourceRecord};
