pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "fishlog-api")]
#[command(about = "Fishlog API - multi-tenant fishing log server")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to listen on, overrides FISHLOG_API_PORT/PORT")]
        port: Option<u16>,
    },

    #[command(about = "Apply database migrations and seed reference data")]
    Migrate,

    #[command(about = "Mint a bearer token for an account with the configured secret")]
    Token {
        #[arg(long, help = "Account id to put in the token")]
        account_id: Uuid,
    },

    #[command(about = "Check a running server's /health endpoint")]
    Health {
        #[arg(long, help = "Server base URL (defaults to the configured bind address)")]
        url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::handle(config, port).await,
        Commands::Migrate => commands::migrate::handle(config, output_format).await,
        Commands::Token { account_id } => commands::token::handle(config, account_id, output_format),
        Commands::Health { url } => commands::health::handle(config, url, output_format).await,
    }
}
