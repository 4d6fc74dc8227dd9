//! model-select - Model selection dropdown for a terminal chat panel

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use model_select::config::Config;
use model_select::{App, paths};
use std::path::{Path, PathBuf};

/// Model selection dropdown for a terminal chat panel
#[derive(Parser)]
#[command(name = "model-select")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat panel (default)
    Run {
        /// Model id to start with
        #[arg(long)]
        selected: Option<String>,
    },
    /// Print the configured models
    List,
}

fn main() -> Result<()> {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to the temp dir - tail with: tail -f /tmp/model-select.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let directory = log_path.parent().unwrap_or_else(|| Path::new("."));
        let file_appender = tracing_appender::rolling::never(directory, "model-select.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::List) => {
            cmd_list(&config);
            Ok(())
        }
        Some(Commands::Run { selected }) => {
            model_select::tui::run(App::new(config, selected.as_deref()))
        }
        None => model_select::tui::run(App::new(config, None)),
    }
}

fn cmd_list(config: &Config) {
    for option in &config.models {
        println!("{}\t{}", option.id, option.label);
    }
}
