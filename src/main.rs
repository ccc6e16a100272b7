//! Service entry point.
//!
//! Loads settings from the given config file (plus optional env-file
//! overrides), builds the application, and serves it on the configured
//! address. Configuration errors are fatal: the process exits non-zero
//! before ever binding a socket.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;

use exec_agent::http::App;
use exec_agent::observability::logging;

#[derive(Parser)]
#[command(name = "exec-agent")]
#[command(about = "Configuration-driven HTTP service scaffold", long_about = None)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long)]
    config: PathBuf,

    /// Optional path to a KEY=value env file applied as overrides.
    #[arg(long)]
    env: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match exec_agent::load_settings(&cli.config, cli.env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("exec-agent: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&settings.logging);

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        service_name = %settings.service_name,
        metadata = ?settings.metadata,
        "Configuration loaded"
    );

    let bind_address = settings.bind_address();
    let app = App::build(settings);

    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %bind_address, error = %e, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = app.serve(listener).await {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
