//! # Line Stream Processing
//!
//! Turns a sequence of input lines into packages and result lines. Processing
//! is fail-fast: the first malformed line aborts the whole stream and no
//! results are produced for the lines before it.
//!
//! Trailing `\r` is stripped from every line. Blank lines at the end of the
//! input are ignored; a blank line with another record after it is rejected.

use std::io;

use crate::error::PackerError;
use crate::package::Package;
use crate::parser::parse_line;
use crate::selector::select_best_set;

/// Parse every line of a fallible line source.
///
/// Read errors from the source surface as [`PackerError::Io`].
pub fn try_extract_packages<I, S>(lines: I) -> Result<Vec<Package>, PackerError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut packages = Vec::new();
    let mut pending_blank: Option<String> = None;

    for (number, line) in lines.into_iter().enumerate() {
        let line = line?;
        let line = line.as_ref().trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() {
            pending_blank.get_or_insert_with(|| line.to_string());
            continue;
        }
        if let Some(blank) = pending_blank.take() {
            return Err(PackerError::validation(blank));
        }

        tracing::trace!(line = number + 1, "parsing package line");
        packages.push(parse_line(line)?);
    }

    tracing::debug!(packages = packages.len(), "extracted packages");
    Ok(packages)
}

/// Parse every line into a [`Package`].
pub fn extract_packages<I, S>(lines: I) -> Result<Vec<Package>, PackerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    try_extract_packages(lines.into_iter().map(Ok))
}

/// Parse every line and select the best set for each package, in input order.
pub fn pack_lines<I, S>(lines: I) -> Result<Vec<String>, PackerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let packages = extract_packages(lines)?;
    Ok(packages.iter().map(select_best_set).collect())
}

/// Like [`pack_lines`], with every result terminated by `\n`.
pub fn pack_to_string<I, S>(lines: I) -> Result<String, PackerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for result in pack_lines(lines)? {
        out.push_str(&result);
        out.push('\n');
    }
    Ok(out)
}
