//! # Package Items
//!
//! An [`Item`] is one candidate `(index, weight, cost)` triple. Weight and
//! cost are bounded to `0..=100`; values outside that range (and NaN) are
//! **rejected at construction**, never clamped. Items are immutable.

use serde::{Deserialize, Serialize};

use crate::error::InvariantError;

/// Upper bound for an item's weight.
pub const MAX_ITEM_WEIGHT: f64 = 100.0;

/// Upper bound for an item's cost.
pub const MAX_ITEM_COST: f64 = 100.0;

/// A candidate item for a package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    index: u32,
    weight: f64,
    cost: f64,
}

/// Unchecked wire form; deserialization goes through [`Item::new`].
#[derive(Deserialize)]
struct RawItem {
    index: u32,
    weight: f64,
    cost: f64,
}

impl TryFrom<RawItem> for Item {
    type Error = InvariantError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Item::new(raw.index, raw.weight, raw.cost)
    }
}

impl Item {
    /// Create an item, checking the weight and cost bounds.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::ItemWeight`] or [`InvariantError::ItemCost`]
    /// when the value is not within `0..=100`.
    pub fn new(index: u32, weight: f64, cost: f64) -> Result<Self, InvariantError> {
        if !(0.0..=MAX_ITEM_WEIGHT).contains(&weight) {
            return Err(InvariantError::ItemWeight {
                weight,
                max: MAX_ITEM_WEIGHT,
            });
        }
        if !(0.0..=MAX_ITEM_COST).contains(&cost) {
            return Err(InvariantError::ItemCost {
                cost,
                max: MAX_ITEM_COST,
            });
        }
        Ok(Self {
            index,
            weight,
            cost,
        })
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:.2}, {:.2})", self.index, self.weight, self.cost)
    }
}
