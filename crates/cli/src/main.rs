//! # typeschema CLI entry point
//!
//! Parses command-line arguments, sets up logging on stderr and dispatches
//! to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use typeschema_cli::generate::{run_generate, GenerateArgs};
use typeschema_cli::init_config::{run_init_config, InitConfigArgs};
use typeschema_cli::list::{run_list, ListArgs};
use typeschema_core::GeneratorConfig;

/// Generate draft-04 JSON Schema documents from typed object models.
#[derive(Parser, Debug)]
#[command(name = "typeschema", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file. Defaults to `typeschema.toml` if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the schema of one type, or of every type with --all.
    Generate(GenerateArgs),

    /// List the types declared by a model file.
    List(ListArgs),

    /// Write a default configuration file.
    InitConfig(InitConfigArgs),
}

fn init_tracing(verbose: u8, debug: bool) {
    let level = match verbose {
        0 if debug => "debug",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = GeneratorConfig::load(cli.config.as_deref());
    init_tracing(cli.verbose, config.as_ref().is_ok_and(|c| c.debug));

    let result = match cli.command {
        Commands::Generate(args) => config
            .map_err(anyhow::Error::from)
            .and_then(|config| run_generate(&args, config)),
        Commands::List(args) => run_list(&args),
        Commands::InitConfig(args) => run_init_config(&args).map(|path| println!("{}", path.display())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
