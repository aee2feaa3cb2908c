//! envctl - entry point
//!
//! Parses arguments, initializes logging and dispatches to a command.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use domain::Tier;
use envctl_lib::{commands, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> AppResult<String> {
    let (config, tier, env_file) = (cli.config, cli.tier, cli.env_file);
    match cli.command {
        Commands::Template { format } => {
            commands::template(tier.unwrap_or_else(Tier::build_default), format)
        }
        Commands::Show { format } => {
            commands::show(&commands::loader(config, tier, env_file)?, format)
        }
        Commands::Check => commands::check(&commands::loader(config, tier, env_file)?),
        Commands::Get { key } => commands::get(&commands::loader(config, tier, env_file)?, &key),
    }
}

/// Initialize tracing subscriber on stderr
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
