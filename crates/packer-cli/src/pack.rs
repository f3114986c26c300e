//! # Pack Subcommand
//!
//! Reads a package file and prints the best set of every package, one line
//! per package in input order.
//!
//! ```bash
//! packer pack input.txt
//! packer pack input.txt --format json
//! ```
//!
//! Nothing is printed unless every line parses. Without a file argument the
//! command logs that a path is needed and exits successfully.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::output::{render, OutputFormat};
use crate::source::read_packages;

/// Arguments for the pack subcommand.
#[derive(Args, Debug)]
pub struct PackArgs {
    /// Path to the package file, one package per line.
    pub file: Option<PathBuf>,

    /// Output format for the results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the pack subcommand against stdout.
pub fn run_pack(args: &PackArgs) -> Result<u8> {
    run_pack_to(args, &mut io::stdout().lock())
}

/// Execute the pack subcommand, writing results to `out`.
pub fn run_pack_to(args: &PackArgs, out: &mut impl Write) -> Result<u8> {
    let Some(path) = &args.file else {
        tracing::info!("a file path is needed, exiting");
        return Ok(0);
    };

    let packages = read_packages(path)?;

    let mut rendered = String::new();
    for package in &packages {
        rendered.push_str(&render(args.format, package)?);
        rendered.push('\n');
    }
    out.write_all(rendered.as_bytes())
        .context("failed to write results")?;

    tracing::debug!(packages = packages.len(), "packed all packages");
    Ok(0)
}
