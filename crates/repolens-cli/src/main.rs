//! Repolens CLI entrypoint.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod handlers;

use commands::Commands;
use config::ServerConfig;

#[derive(Parser)]
#[command(name = "repolens")]
#[command(author, version, about = "Repository listing service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, listen } => {
            let config = ServerConfig::load(config.as_deref())?;
            handlers::serve(config, listen).await?;
        }
        Commands::List {
            org,
            phrase,
            page,
            config,
        } => {
            let config = ServerConfig::load(config.as_deref())?;
            handlers::list(config, org, phrase, page).await?;
        }
    }

    Ok(())
}
