//! # Packages
//!
//! A [`Package`] is one input line's weight-limited container together with
//! its candidate items. The weight limit must be within `0..=100` and a
//! package holds at most [`MAX_ITEMS_IN_PACKAGE`] items. Both bounds are
//! checked when the value is built; there is no way to obtain a `Package`
//! that breaks them.
//!
//! Packages are filled one [`Package::add_item`] at a time by the parser and
//! only read from afterwards. Selection borrows the package immutably.

use serde::{Deserialize, Serialize};

use crate::error::InvariantError;
use crate::item::Item;
use crate::selector::{self, BestSet};

/// Upper bound for a package's weight limit.
pub const MAX_PACKAGE_WEIGHT: f64 = 100.0;

/// Maximum number of candidate items in one package.
pub const MAX_ITEMS_IN_PACKAGE: usize = 15;

/// A weight-limited package and its candidate items, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPackage")]
pub struct Package {
    weight_limit: f64,
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct RawPackage {
    weight_limit: f64,
    #[serde(default)]
    items: Vec<Item>,
}

impl TryFrom<RawPackage> for Package {
    type Error = InvariantError;

    fn try_from(raw: RawPackage) -> Result<Self, Self::Error> {
        let mut package = Package::new(raw.weight_limit)?;
        for item in raw.items {
            package.add_item(item)?;
        }
        Ok(package)
    }
}

impl Package {
    /// Create an empty package.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::WeightLimit`] if `weight_limit` is not within
    /// `0..=100`.
    pub fn new(weight_limit: f64) -> Result<Self, InvariantError> {
        if !(0.0..=MAX_PACKAGE_WEIGHT).contains(&weight_limit) {
            return Err(InvariantError::WeightLimit {
                limit: weight_limit,
                max: MAX_PACKAGE_WEIGHT,
            });
        }
        Ok(Self {
            weight_limit,
            items: Vec::new(),
        })
    }

    /// Append a candidate item.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::TooManyItems`] when the package is already full.
    pub fn add_item(&mut self, item: Item) -> Result<(), InvariantError> {
        if self.items.len() == MAX_ITEMS_IN_PACKAGE {
            return Err(InvariantError::TooManyItems {
                max: MAX_ITEMS_IN_PACKAGE,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn weight_limit(&self) -> f64 {
        self.weight_limit
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Select the best set of items for this package.
    ///
    /// See [`selector::best_set`].
    pub fn best_set(&self) -> BestSet {
        selector::best_set(self)
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} : ", self.weight_limit)?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
