//! # Ingredient Parser
//!
//! This module splits free-form ingredient lines into a leading quantity, a
//! recognized unit and the remaining description.
//!
//! ## Features
//!
//! - Mixed and simple fractions (2 1/4, 1/2), decimals and integers
//! - Unicode fraction glyphs (½, ¾, ...) normalized to `n/d`
//! - Single and two-word units ("tbsp", "fluid ounce"), abbreviated
//! - Unit detection only happens once a leading quantity is found
//!
//! Ranges such as "1-2 cups" are not interpreted: only the first number is
//! captured and "-2 cups" stays in the description.
//!
//! ## Usage
//!
//! ```rust
//! use groceries::ingredient_parser::parse_ingredient;
//!
//! let parsed = parse_ingredient("1 1/2 cups all-purpose flour");
//! assert_eq!(parsed.quantity, "1 1/2");
//! assert_eq!(parsed.unit, "cup");
//! assert_eq!(parsed.text, "all-purpose flour");
//! ```

use crate::ingredient_model::ParsedIngredient;
use crate::units::{is_two_word_unit, is_unit, to_abbreviation, to_ascii_fraction};
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

// Leading quantity alternatives in priority order: mixed or simple fraction,
// decimal, integer, single fraction glyph. Digits are ASCII only.
const LEADING_QUANTITY_PATTERN: &str =
    r"^(?:[0-9]+\s+[0-9]+/[0-9]+|[0-9]+/[0-9]+|[0-9]+\.[0-9]+|[0-9]+|[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅐⅛⅜⅝⅞])";

lazy_static! {
    static ref LEADING_QUANTITY: Regex = Regex::new(LEADING_QUANTITY_PATTERN)
        .expect("Leading quantity pattern should be valid");
}

/// Parse a single ingredient line
///
/// Lines without a leading quantity come back with the whole original line
/// as `text` and empty `quantity` and `unit`.
///
/// # Examples
///
/// ```rust
/// use groceries::ingredient_parser::parse_ingredient;
///
/// let parsed = parse_ingredient("½ tsp. salt");
/// assert_eq!(parsed.quantity, "1/2");
/// assert_eq!(parsed.unit, "tsp");
/// assert_eq!(parsed.text, "salt");
///
/// let plain = parse_ingredient("salt to taste");
/// assert!(plain.quantity.is_empty());
/// assert_eq!(plain.text, "salt to taste");
/// ```
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let candidate = line.trim_start();

    let Some(found) = LEADING_QUANTITY.find(candidate) else {
        trace!("No leading quantity in line: '{}'", line);
        return ParsedIngredient::unquantified(line);
    };

    let quantity = to_ascii_fraction(found.as_str()).trim().to_string();
    let remainder = candidate[found.end()..].trim();
    let words: Vec<&str> = remainder.split_whitespace().collect();

    let (unit, consumed) = detect_unit(&words);
    let text = words[consumed..].join(" ");

    debug!(
        "Parsed ingredient line '{}' -> quantity='{}', unit='{}', text='{}'",
        line, quantity, unit, text
    );

    ParsedIngredient {
        quantity,
        unit,
        text,
    }
}

/// Parse every non-blank line of an ingredients block
pub fn parse_ingredient_block(text: &str) -> Vec<ParsedIngredient> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_ingredient)
        .collect()
}

/// Detect a unit at the start of the words following the quantity.
///
/// Returns the abbreviated unit and how many words it spans.
fn detect_unit(words: &[&str]) -> (String, usize) {
    if let Some(first) = words.first() {
        if is_unit(first) {
            return (to_abbreviation(first), 1);
        }
    }

    if words.len() >= 2 {
        let pair = format!("{} {}", words[0], words[1]);
        if is_two_word_unit(&pair) {
            return (to_abbreviation(&pair), 2);
        }
    }

    (String::new(), 0)
}
