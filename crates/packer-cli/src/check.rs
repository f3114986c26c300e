//! # Check Subcommand
//!
//! Validates every line of a package file against the grammar and the
//! item/package bounds without selecting anything.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::source::read_packages;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the package file to validate.
    pub file: PathBuf,
}

/// Execute the check subcommand against stdout.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    run_check_to(args, &mut io::stdout().lock())
}

/// Execute the check subcommand, writing the summary to `out`.
pub fn run_check_to(args: &CheckArgs, out: &mut impl Write) -> Result<u8> {
    let packages = read_packages(&args.file)?;
    writeln!(out, "ok: {} packages", packages.len()).context("failed to write summary")?;
    Ok(0)
}
