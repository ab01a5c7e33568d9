//! Loan Amortization Server
//!
//! REST API server for fixed and variable loan schedules.

use anyhow::Context;
use clap::Parser;
use loan_server::config::{build_config, env_vars, CliArgs as ConfigCliArgs, ServerConfig};
use loan_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Loan Amortization Server - REST API for loan payment schedules
#[derive(Parser, Debug)]
#[command(name = "loan_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = env_vars::HOST)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = env_vars::PORT)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = env_vars::LOG_LEVEL)]
    log_level: Option<String>,

    /// Seed for reproducible variable-rate schedules
    #[arg(long, env = env_vars::RNG_SEED)]
    rng_seed: Option<u64>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            rng_seed: args.rng_seed,
        }
    }
}

/// Production logs are JSON lines for collectors; elsewhere human-readable
fn init_tracing(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.as_filter_str()));
    let registry = tracing_subscriber::registry().with(filter);

    if config.environment.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args).context("Failed to load server configuration")?;

    init_tracing(&config);

    tracing::info!("Loan Amortization Server v{}", loan_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        max_term_years = %config.max_term_years,
        seeded = config.rng_seed.is_some(),
        "Server configuration loaded"
    );

    let server = Server::new(config);
    tracing::info!(address = %server.config().socket_addr(), "Starting server");

    server
        .run()
        .await
        .context("Server terminated with an I/O error")?;

    Ok(())
}
