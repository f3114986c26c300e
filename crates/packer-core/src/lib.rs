//! # packer-core — Package Item Selection
//!
//! Reads package lines of the form
//!
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3)
//! ```
//!
//! and picks, for every package, which items to ship.
//!
//! ## Key Design Principles
//!
//! 1. **Validated constructors.** `Item` and `Package` check their numeric
//!    bounds when built. Nothing out of range is ever clamped.
//!
//! 2. **Grammar first.** A line is matched against the full grammar before it
//!    is decomposed, so partial parses never happen.
//!
//! 3. **Heuristic selection.** The best set is chosen by cost-greedy ranking
//!    with lowest-weight tie-breaking. It is deterministic and deliberately
//!    not a knapsack optimum.
//!
//! 4. **Fail fast.** One bad line aborts the whole stream with a single
//!    [`PackerError`].
//!
//! ## Crate Policy
//!
//! - No I/O: callers supply lines and consume result strings.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod item;
pub mod package;
pub mod parser;
pub mod pipeline;
pub mod selector;

// Re-export primary types for ergonomic imports.
pub use error::{InvariantError, PackerError};
pub use item::{Item, MAX_ITEM_COST, MAX_ITEM_WEIGHT};
pub use package::{Package, MAX_ITEMS_IN_PACKAGE, MAX_PACKAGE_WEIGHT};
pub use parser::{is_line_syntax_ok, parse_line};
pub use pipeline::{extract_packages, pack_lines, pack_to_string, try_extract_packages};
pub use selector::{best_set, select_best_set, BestSet, NO_SELECTION};
