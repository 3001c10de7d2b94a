pub mod builder;
pub mod config;
pub mod engine;
pub mod response;
pub mod worklist;

pub use builder::ResolverBuilder;
pub use config::EngineConfig;
pub use engine::IterativeResolver;
pub use response::{inspect_response, ResponseOutcome};
pub use worklist::Worklist;
