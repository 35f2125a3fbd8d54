// SPDX-FileCopyrightText: 2026 Plugres Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! plugres - normalize plugin lists into resolved plugin descriptors.
//!
//! This is the binary entry point.

mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::resolve::{ResolveArgs, WhichArgs};

/// plugres - normalize plugin lists into resolved plugin descriptors.
#[derive(Parser, Debug)]
#[command(name = "plugres", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize plugins and print the descriptors as JSON.
    Resolve(ResolveArgs),
    /// Print the file a plugin name resolves to.
    Which(WhichArgs),
    /// Print the effective configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => plugres_config::load_and_validate_path(path),
        None => plugres_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            plugres_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let result = match cli.command {
        Some(Commands::Resolve(args)) => resolve::run_resolve(&config, &args),
        Some(Commands::Which(args)) => resolve::run_which(&config, &args),
        Some(Commands::Config) => resolve::render_config(&config),
        None => Ok("plugres: use --help for available commands".to_string()),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Initializes the tracing subscriber on stderr with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "plugres={log_level},plugres_core={log_level},plugres_plugin={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
