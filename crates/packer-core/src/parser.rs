//! # Package Line Grammar
//!
//! One input line describes one package:
//!
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3)
//! ```
//!
//! The weight limit is an integer. Each item is `(index,weight,cost)` where
//! weight and cost are decimals with at most two fractional digits and the
//! cost may carry a single currency symbol, which is decorative. At least one
//! item is required and items are separated by one space.
//!
//! The whole line is matched against the grammar before anything is split,
//! so a line is either fully well-formed or rejected with
//! [`PackerError::Validation`]. Bound violations found while building the
//! package (a limit or value over 100, a 16th item) reject the whole line with
//! [`PackerError::Invariant`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PackerError;
use crate::item::Item;
use crate::package::Package;

const DECIMAL: &str = r"[0-9]+(?:\.[0-9]{0,2})?";

static LINE_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    let item = format!(r"\([0-9]+,{DECIMAL},\p{{Sc}}?{DECIMAL}\)");
    Regex::new(&format!(r"^[0-9]+ ?: ?(?:{item} )*{item} ?\n?$"))
        .expect("line grammar is a valid regex")
});

/// Check whether `line` matches the package line grammar.
pub fn is_line_syntax_ok(line: &str) -> bool {
    LINE_GRAMMAR.is_match(line)
}

/// Parse one line into a fully populated [`Package`].
///
/// # Errors
///
/// - [`PackerError::Validation`] if the line does not match the grammar.
/// - [`PackerError::Invariant`] if the weight limit, an item weight or an
///   item cost exceeds 100, or the line holds more than 15 items.
pub fn parse_line(line: &str) -> Result<Package, PackerError> {
    if !is_line_syntax_ok(line) {
        return Err(PackerError::validation(line));
    }
    let (limit, items) = line
        .split_once(':')
        .ok_or_else(|| PackerError::validation(line))?;

    let limit = parse_number::<f64>(limit, line)?;
    let mut package = Package::new(limit).map_err(|e| PackerError::invariant(line, e))?;

    for token in items.split_whitespace() {
        let item = parse_item(token, line)?;
        package
            .add_item(item)
            .map_err(|e| PackerError::invariant(line, e))?;
    }

    tracing::debug!(
        weight_limit = package.weight_limit(),
        items = package.items().len(),
        "parsed package"
    );
    Ok(package)
}

/// Parse one `(index,weight,cost)` token.
fn parse_item(token: &str, line: &str) -> Result<Item, PackerError> {
    let fields: Vec<&str> = token
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(',')
        .collect();
    let [index, weight, cost] = fields.as_slice() else {
        return Err(PackerError::validation(line));
    };

    let index = parse_number::<u32>(index, line)?;
    let weight = parse_number::<f64>(weight, line)?;
    let cost = parse_number::<f64>(cost.trim_start_matches(|c: char| !c.is_ascii_digit()), line)?;

    Item::new(index, weight, cost).map_err(|e| PackerError::invariant(line, e))
}

/// The grammar only admits digits here; overflow of the index is the one way
/// this can still fail.
fn parse_number<T: std::str::FromStr>(field: &str, line: &str) -> Result<T, PackerError> {
    field
        .trim()
        .parse()
        .map_err(|_| PackerError::validation(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvariantError;

    const SAMPLE: &str = "20 : (1,10.60,€2) (2,20.0,€3) (3,30.0,€4)";

    #[test]
    fn test_sample_line_is_valid() {
        assert!(is_line_syntax_ok(SAMPLE));
        assert!(is_line_syntax_ok(&format!("{SAMPLE}\n")));
    }

    #[test]
    fn test_unbalanced_parenthesis_is_invalid() {
        assert!(!is_line_syntax_ok("20 : (1,10.60,€2) (2,20.0,€3) (3,30.0,€4"));
        assert!(!is_line_syntax_ok("20 : (1,10.60,€2) (2,20.0,€3) (3,30.0,€4\n"));
    }

    #[test]
    fn test_grammar_variants() {
        // Spacing around the colon is optional, as is a trailing space.
        assert!(is_line_syntax_ok("20:(1,10.60,€2)"));
        assert!(is_line_syntax_ok("20 :(1,10,2) "));
        // Currency is optional and any single currency symbol is accepted.
        assert!(is_line_syntax_ok("20 : (1,10.6,2) (2,3.,$4.5) (3,1.25,£9)"));
    }

    #[test]
    fn test_grammar_rejections() {
        assert!(!is_line_syntax_ok(""));
        assert!(!is_line_syntax_ok("20 : "));
        assert!(!is_line_syntax_ok("20.5 : (1,10,€2)"));
        assert!(!is_line_syntax_ok("20 : (1,10.605,€2)"));
        assert!(!is_line_syntax_ok("20 : (1,10,€€2)"));
        assert!(!is_line_syntax_ok("20 : (1,10,€2)  (2,1,€1)"));
        assert!(!is_line_syntax_ok("20 : (1,10)"));
        assert!(!is_line_syntax_ok("20 : (-1,10,€2)"));
        assert!(!is_line_syntax_ok("20 : (1,10,€2)(2,1,€1)"));
        assert!(!is_line_syntax_ok("twenty : (1,10,€2)"));
        assert!(!is_line_syntax_ok("20 : (1,10,€2) trailing"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(!is_line_syntax_ok("٢٠ : (1,10,€2)"));
    }

    #[test]
    fn test_parse_sample_line() {
        let pkg = parse_line(SAMPLE).unwrap();
        assert_eq!(pkg.weight_limit(), 20.0);
        let items: Vec<(u32, f64, f64)> = pkg
            .items()
            .iter()
            .map(|i| (i.index(), i.weight(), i.cost()))
            .collect();
        assert_eq!(items, vec![(1, 10.6, 2.0), (2, 20.0, 3.0), (3, 30.0, 4.0)]);
    }

    #[test]
    fn test_parse_without_currency_and_spaces() {
        let pkg = parse_line("8:(1,15.3,34)").unwrap();
        assert_eq!(pkg.weight_limit(), 8.0);
        assert_eq!(pkg.items()[0].cost(), 34.0);
    }

    #[test]
    fn test_parse_trailing_dot_decimal() {
        let pkg = parse_line("8 : (1,3.,€4.)").unwrap();
        assert_eq!(pkg.items()[0].weight(), 3.0);
        assert_eq!(pkg.items()[0].cost(), 4.0);
    }

    #[test]
    fn test_parse_invalid_grammar_carries_line() {
        let line = "10 : (1,45.60,€5) (2,34.0,€3) (3,23.0,€15";
        match parse_line(line) {
            Err(PackerError::Validation { line: got }) => assert_eq!(got, line),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_weight_limit_over_max() {
        let err = parse_line("101 : (1,1,€1)").unwrap_err();
        assert!(matches!(
            err,
            PackerError::Invariant {
                violation: InvariantError::WeightLimit { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_item_weight_over_max() {
        let err = parse_line("50 : (1,100.01,€1)").unwrap_err();
        assert!(matches!(
            err,
            PackerError::Invariant {
                violation: InvariantError::ItemWeight { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_item_cost_over_max() {
        let err = parse_line("50 : (1,1,€101)").unwrap_err();
        match err {
            PackerError::Invariant { line, violation } => {
                assert_eq!(line, "50 : (1,1,€101)");
                assert!(matches!(violation, InvariantError::ItemCost { .. }));
            }
            other => panic!("expected invariant error, got {other:?}"),
        }
    }

    #[test]
    fn test_fifteen_items_accepted_sixteen_rejected() {
        let items = |n: u32| {
            (1..=n)
                .map(|i| format!("({i},1,€1)"))
                .collect::<Vec<_>>()
                .join(" ")
        };
        assert_eq!(parse_line(&format!("50 : {}", items(15))).unwrap().items().len(), 15);

        let err = parse_line(&format!("50 : {}", items(16))).unwrap_err();
        assert!(matches!(
            err,
            PackerError::Invariant {
                violation: InvariantError::TooManyItems { max: 15 },
                ..
            }
        ));
    }

    #[test]
    fn test_index_overflow_is_validation_error() {
        let err = parse_line("50 : (99999999999,1,€1)").unwrap_err();
        assert!(matches!(err, PackerError::Validation { .. }));
    }
}
