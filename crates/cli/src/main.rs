use clap::Parser;
use rootwalk_domain::CliOverrides;
use std::net::Ipv4Addr;
use std::process::ExitCode;
use tracing::{debug, error};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version = "0.1.0")]
#[command(about = "Rootwalk - iterative DNS resolver that walks delegations from the root")]
struct Cli {
    /// Domain name to resolve
    domain: String,

    /// Name server to start from (defaults to resolver.root_server)
    server: Option<Ipv4Addr>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Server used to resolve name servers that come without glue
    #[arg(long, value_name = "IP")]
    fallback: Option<String>,

    /// Per round-trip timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Extra attempts after a timed-out round trip
    #[arg(long)]
    retries: Option<u32>,

    /// Destination port for every query
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        fallback_server: cli.fallback.clone(),
        query_timeout_ms: cli.timeout_ms,
        retries: cli.retries,
        port: cli.port,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!("Starting rootwalk v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config)?;

    match services.resolve_domain.execute(&cli.domain, cli.server).await {
        Ok(resolution) => {
            for address in &resolution.addresses {
                println!("{}", address);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(domain = %cli.domain, error = %e, "Resolution failed");
            eprintln!("rootwalk: {}: {}", cli.domain, e);
            Ok(ExitCode::FAILURE)
        }
    }
}
