//! # packer-cli — Command-Line Interface for packer
//!
//! Provides the `packer` binary around `packer-core`.
//!
//! ## Subcommands
//!
//! - `packer pack <FILE>` — print the best set of every package in the file.
//! - `packer check <FILE>` — validate the file without selecting.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here return an exit code.
//! - Selection and validation logic belong to `packer-core`, not here.
//! - Results go to stdout, logs to stderr.

pub mod check;
pub mod logging;
pub mod output;
pub mod pack;
pub mod source;
