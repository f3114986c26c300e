//! # packer CLI entry point
//!
//! Parses command-line arguments, installs tracing, and dispatches to the
//! subcommand handlers. Any failure is logged with its full context chain
//! and turned into exit code 1.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use packer_cli::check::{run_check, CheckArgs};
use packer_cli::logging::{init_tracing, LogFormat};
use packer_cli::pack::{run_pack, PackArgs};

/// Package item selection.
///
/// Reads files of package lines such as `81 : (1,53.38,€45) (2,88.62,€98)`
/// and prints, for every package, the indexes of the items to ship.
#[derive(Parser, Debug)]
#[command(name = "packer", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log line format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Select the best set of items for every package in a file.
    Pack(PackArgs),

    /// Validate a package file without selecting.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_format);
    tracing::debug!("packer starting");

    let result = match cli.command {
        Commands::Pack(args) => run_pack(&args),
        Commands::Check(args) => run_check(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
