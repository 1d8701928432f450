use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hecm_leads::cli::{Cli, Command, print_states, run_estimate};
use hecm_leads::config::AppConfig;
use hecm_leads::error::CliError;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hecm_leads=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port } => {
            let mut config = match AppConfig::load() {
                Ok(config) => config,
                Err(e) => {
                    error!("Failed to load configuration: {e}");
                    std::process::exit(1);
                }
            };
            if let Some(port) = port {
                config.port = port;
            }
            if let Err(e) = hecm_leads::api::run_http_server(config).await {
                error!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Estimate(args) => match run_estimate(&args) {
            Ok(output) => println!("{output}"),
            Err(CliError::Input(e)) => {
                eprintln!("Invalid input: {e}");
                std::process::exit(1);
            }
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        },
        Command::States => print_states(),
    }
}
