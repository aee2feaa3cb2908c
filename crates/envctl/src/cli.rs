//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use domain::Tier;

/// Inspect and check the coffee shop environment configuration
#[derive(Parser, Debug)]
#[command(name = "envctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON overlay file
    #[arg(short, long, global = true, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Env file loaded instead of searching for `.env`
    #[arg(long, global = true, env = "ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Base tier (development or production)
    #[arg(long, global = true, env = "APP_ENV", value_parser = parse_tier)]
    pub tier: Option<Tier>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved record
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Load and validate the record
    Check,

    /// Print a single value
    Get {
        /// Variable key (AUTH0_CLIENT_ID) or field path (auth0.clientId)
        key: String,
    },

    /// Print a built-in variant without reading any source
    Template {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Dotenv)]
        format: OutputFormat,
    },
}

/// Output encodings
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Dotenv,
}

fn parse_tier(value: &str) -> Result<Tier, String> {
    value.parse().map_err(|e: domain::DomainError| e.to_string())
}
