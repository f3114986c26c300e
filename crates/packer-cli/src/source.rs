//! # Line Source
//!
//! Reads a package file lazily, one line at a time, and feeds it to the core
//! parser. The file is never loaded whole.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use packer_core::{try_extract_packages, Package};

/// Open `path` and return an iterator over its lines.
pub fn open_lines(path: &Path) -> Result<impl Iterator<Item = io::Result<String>>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open package file: {}", path.display()))?;
    Ok(BufReader::new(file).lines())
}

/// Read and validate every package in `path`.
pub fn read_packages(path: &Path) -> Result<Vec<Package>> {
    let lines = open_lines(path)?;
    let packages = try_extract_packages(lines)
        .with_context(|| format!("failed to read packages from {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        packages = packages.len(),
        "read package file"
    );
    Ok(packages)
}
