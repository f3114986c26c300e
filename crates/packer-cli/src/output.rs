//! # Result Rendering
//!
//! Formats one package's best set for stdout, either as the plain result
//! line or as a JSON object.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use packer_core::{BestSet, Package};

/// Output format for `packer pack`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated indexes, or `-` when nothing fits.
    #[default]
    Text,
    /// One JSON object per package.
    Json,
}

#[derive(Serialize)]
struct PackageReport {
    weight_limit: f64,
    #[serde(flatten)]
    best_set: BestSet,
}

/// Render the best set of `package` in `format`, without a line terminator.
pub fn render(format: OutputFormat, package: &Package) -> Result<String> {
    let best_set = package.best_set();
    match format {
        OutputFormat::Text => Ok(best_set.to_string()),
        OutputFormat::Json => {
            let report = PackageReport {
                weight_limit: package.weight_limit(),
                best_set,
            };
            Ok(serde_json::to_string(&report)?)
        }
    }
}
