//! webes CLI - Command-line interface for webes
//!
//! Provides `webes validate`, `webes init` and `webes wipe`.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use commands::validate::ValidateArgs;

#[derive(Parser)]
#[command(name = "webes")]
#[command(about = "webes - single-file component toolkit")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check components for unused classes, ids and functions
    Validate(ValidateArgs),
    /// Initialize a new webes project
    Init {
        /// Project root (defaults to current directory)
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Remove the dist/ and dev/ trees of a webes project
    Wipe {
        /// Project root (defaults to current directory)
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate(args) => match commands::validate::execute(&args) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Init { root } => {
            if let Err(e) = commands::init::execute(&root) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::Wipe { root, force } => {
            if let Err(e) = commands::wipe::execute(&root, force) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// Install the stderr log subscriber for the requested verbosity
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .init();
}
