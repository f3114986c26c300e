//! # Best-Set Selection
//!
//! Chooses which items go into a package. This is a cost-greedy heuristic,
//! not a knapsack optimum, and it is kept exactly as follows:
//!
//! 1. Drop every item heavier than the weight limit.
//! 2. Rank the rest by cost, highest first.
//! 3. For each distinct cost keep only the lightest item. Among items with
//!    equal cost and equal weight the lowest index is kept.
//! 4. Walk the ranking once, accepting an item whenever it still fits under
//!    the limit. Skipped items are never revisited.
//! 5. Report the accepted indexes sorted ascending as text and joined with
//!    `,`, or [`NO_SELECTION`] when nothing was accepted.
//!
//! Step 3 can throw away an item that an exhaustive search would have used,
//! and step 4 never backtracks. Both are part of the contract.

use std::cmp::Ordering;

use serde::Serialize;

use crate::item::Item;
use crate::package::Package;

/// Result reported for a package when no item can be included.
pub const NO_SELECTION: &str = "-";

/// The items chosen for one package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestSet {
    /// Chosen indexes, sorted ascending by their decimal text.
    selected: Vec<u32>,
    total_weight: f64,
    total_cost: f64,
}

impl BestSet {
    fn empty() -> Self {
        Self {
            selected: Vec::new(),
            total_weight: 0.0,
            total_cost: 0.0,
        }
    }

    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl std::fmt::Display for BestSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.selected.is_empty() {
            return f.write_str(NO_SELECTION);
        }
        for (i, index) in self.selected.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// Select the best set for `package` and render it as the result line.
pub fn select_best_set(package: &Package) -> String {
    best_set(package).to_string()
}

/// Select the best set for `package`.
pub fn best_set(package: &Package) -> BestSet {
    let limit = package.weight_limit();

    let mut candidates: Vec<&Item> = package
        .items()
        .iter()
        .filter(|item| item.weight() <= limit)
        .collect();
    if candidates.is_empty() {
        tracing::debug!(limit, "no item fits under the weight limit");
        return BestSet::empty();
    }

    candidates.sort_by(|a, b| rank(a, b));
    // Ranking puts the lightest, lowest-index item first within each cost.
    candidates.dedup_by(|later, first| later.cost() == first.cost());

    let mut chosen = BestSet::empty();
    for item in candidates {
        if chosen.total_weight + item.weight() <= limit {
            chosen.total_weight += item.weight();
            chosen.total_cost += item.cost();
            chosen.selected.push(item.index());
        }
    }
    chosen.selected.sort_by_cached_key(|index| index.to_string());

    tracing::debug!(
        limit,
        selected = chosen.selected.len(),
        total_weight = chosen.total_weight,
        "selected best set"
    );
    chosen
}

/// Cost descending, then weight ascending, then index ascending.
fn rank(a: &Item, b: &Item) -> Ordering {
    b.cost()
        .partial_cmp(&a.cost())
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.weight().partial_cmp(&b.weight()).unwrap_or(Ordering::Equal))
        .then_with(|| a.index().cmp(&b.index()))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Packages with up to 15 items on a 0.01 grid, like parsed input.
    fn arb_package() -> impl Strategy<Value = Package> {
        let cents = |max: u32| (0..=max).prop_map(|c| f64::from(c) / 100.0);
        (
            cents(10_000),
            prop::collection::vec((cents(10_000), cents(10_000)), 0..=15),
        )
            .prop_map(|(limit, items)| {
                let mut pkg = Package::new(limit).unwrap();
                for (i, (weight, cost)) in items.into_iter().enumerate() {
                    let item = Item::new(i as u32 + 1, weight, cost).unwrap();
                    pkg.add_item(item).unwrap();
                }
                pkg
            })
    }

    proptest! {
        /// The accepted weight never exceeds the package limit.
        #[test]
        fn selected_weight_within_limit(pkg in arb_package()) {
            let best = best_set(&pkg);
            prop_assert!(best.total_weight() <= pkg.weight_limit());
        }

        /// Items heavier than the limit are never selected.
        #[test]
        fn heavy_items_never_selected(pkg in arb_package()) {
            let best = best_set(&pkg);
            for item in pkg.items() {
                if item.weight() > pkg.weight_limit() {
                    prop_assert!(!best.selected().contains(&item.index()));
                }
            }
        }

        /// At most one item per distinct cost makes it into the set.
        #[test]
        fn one_item_per_cost(pkg in arb_package()) {
            let best = best_set(&pkg);
            let mut costs: Vec<f64> = pkg
                .items()
                .iter()
                .filter(|item| best.selected().contains(&item.index()))
                .map(Item::cost)
                .collect();
            let before = costs.len();
            costs.sort_by(|a, b| a.partial_cmp(b).unwrap());
            costs.dedup();
            prop_assert_eq!(before, costs.len());
        }

        /// Output indexes are in ascending text order.
        #[test]
        fn output_sorted_as_text(pkg in arb_package()) {
            let rendered = select_best_set(&pkg);
            if rendered != NO_SELECTION {
                let parts: Vec<&str> = rendered.split(',').collect();
                let mut sorted = parts.clone();
                sorted.sort();
                prop_assert_eq!(parts, sorted);
            }
        }

        /// Selection is a pure function of the package.
        #[test]
        fn selection_is_deterministic(pkg in arb_package()) {
            prop_assert_eq!(select_best_set(&pkg), select_best_set(&pkg));
        }
    }
}
