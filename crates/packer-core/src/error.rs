//! # Error Types
//!
//! Two failure kinds reach callers of the core: a line that does not match
//! the package grammar, and a numeric value that breaks an item or package
//! bound. Both abort the whole input stream. Line-source I/O failures are
//! carried alongside so a streamed file can be processed with one error type.
//!
//! Bound checks live on the value types (`Item::new`, `Package::new`,
//! `Package::add_item`) and report an [`InvariantError`] without line
//! context. The parser attaches the offending line when it wraps the
//! violation into [`PackerError::Invariant`].

use thiserror::Error;

/// Top-level error type for packer.
#[derive(Error, Debug)]
pub enum PackerError {
    /// The line does not match the package grammar.
    #[error("the syntax of line '{line}' is incorrect")]
    Validation {
        /// The offending line, as read.
        line: String,
    },

    /// A value on the line violates an item or package bound.
    #[error("invalid package in line '{line}': {violation}")]
    Invariant {
        /// The line that produced the violating value.
        line: String,
        /// Which bound was violated.
        #[source]
        violation: InvariantError,
    },

    /// The line source failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackerError {
    /// Build a [`PackerError::Validation`] for `line`.
    pub fn validation(line: impl Into<String>) -> Self {
        Self::Validation { line: line.into() }
    }

    /// Attach line context to a bound violation.
    pub fn invariant(line: impl Into<String>, violation: InvariantError) -> Self {
        Self::Invariant {
            line: line.into(),
            violation,
        }
    }
}

/// A numeric bound on an item or a package was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantError {
    /// Item weight outside `0..=max`.
    #[error("item weight {weight} must be between 0 and {max}")]
    ItemWeight {
        /// The rejected weight.
        weight: f64,
        /// The upper bound.
        max: f64,
    },

    /// Item cost outside `0..=max`.
    #[error("item cost {cost} must be between 0 and {max}")]
    ItemCost {
        /// The rejected cost.
        cost: f64,
        /// The upper bound.
        max: f64,
    },

    /// Package weight limit outside `0..=max`.
    #[error("package weight limit {limit} must be between 0 and {max}")]
    WeightLimit {
        /// The rejected limit.
        limit: f64,
        /// The upper bound.
        max: f64,
    },

    /// The package already holds `max` items.
    #[error("a package can not hold more than {max} items")]
    TooManyItems {
        /// The item-count bound.
        max: usize,
    },
}
