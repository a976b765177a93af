//! weatherchat CLI — the main entry point.
//!
//! Commands:
//! - `serve`     — Start the HTTP gateway
//! - `ask`       — Answer one message and exit
//! - `city`      — Show the reference record for a city
//! - `knowledge` — Print the full reference knowledge base
//! - `config`    — Show the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "weatherchat",
    about = "Weather chat assistant backed by an OpenAI-compatible model",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of ~/.weatherchat/config.toml
    #[arg(short, long, global = true, env = "WEATHERCHAT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Send a single message and print the reply
    Ask {
        /// The message to send
        message: String,
    },

    /// Look up a city in the reference knowledge base
    City {
        /// City name or part of it
        name: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the reference knowledge base
    Knowledge,

    /// Show the effective configuration (API key redacted)
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Serve { port } => commands::serve::run(config_path, port).await?,
        Commands::Ask { message } => commands::ask::run(config_path, message).await?,
        Commands::City { name, json } => commands::city::run(&name, json)?,
        Commands::Knowledge => commands::city::knowledge(),
        Commands::Config => commands::config_cmd::show(config_path)?,
    }

    Ok(())
}
