//! # Quantity Arithmetic
//!
//! Fraction parsing, addition of grocery-list amounts and conversion of a
//! sum back to the closest readable fraction.
//!
//! Amounts are display strings such as "1 cup", "½ cup" or "3". Two amounts
//! whose unit text matches (or which both lack a unit) are added
//! numerically; anything else is chained with " + " so no information is
//! lost.
//!
//! ## Usage
//!
//! ```rust
//! use groceries::quantity::{combine_amounts, decimal_to_fraction, parse_fraction};
//!
//! assert_eq!(parse_fraction("3/4"), 0.75);
//! assert_eq!(decimal_to_fraction(0.25), "¼");
//! assert_eq!(combine_amounts("1/4 cup", "1/4 cup"), "½ cup");
//! assert_eq!(combine_amounts("1 cup", "2 tbsp"), "1 cup + 2 tbsp");
//! ```

use crate::units::replace_fraction_glyphs;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

/// Largest denominator tried when approximating a sum as a fraction
pub const MAX_DENOMINATOR: u32 = 100;

/// Absolute tolerance for accepting a fraction approximation
pub const FRACTION_TOLERANCE: f64 = 0.01;

lazy_static! {
    // Digits, fraction glyphs and fraction punctuation; whatever is left of
    // an amount after removing these is its unit text
    static ref NUMERIC_CHARS: Regex = Regex::new(r"[0-9½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅐⅛⅜⅝⅞/.]")
        .expect("Numeric character pattern should be valid");
    static ref LEADING_NUMBER: Regex = Regex::new(r"^\s*[0-9½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅐⅛⅜⅝⅞][0-9½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅐⅛⅜⅝⅞/.\s]*")
        .expect("Leading number pattern should be valid");
}

/// Parse a quantity token into a number.
///
/// Handles "n/d", mixed numbers ("1 1/2"), decimals, integers and fraction
/// glyphs. Anything unparseable, and fractions with a zero denominator,
/// yield `0.0`.
///
/// # Examples
///
/// ```rust
/// use groceries::quantity::parse_fraction;
///
/// assert_eq!(parse_fraction("1/2"), 0.5);
/// assert_eq!(parse_fraction("1 1/2"), 1.5);
/// assert_eq!(parse_fraction("¾"), 0.75);
/// assert_eq!(parse_fraction("2.5"), 2.5);
/// assert_eq!(parse_fraction("3/0"), 0.0);
/// assert_eq!(parse_fraction("a pinch"), 0.0);
/// ```
pub fn parse_fraction(token: &str) -> f64 {
    let normalized = replace_fraction_glyphs(token);
    let normalized = normalized.trim();

    let Some((head, denominator)) = normalized.rsplit_once('/') else {
        return parse_number(normalized);
    };

    let denominator = parse_number(denominator);
    if denominator == 0.0 {
        trace!("Zero denominator in fraction '{}'", token);
        return 0.0;
    }

    let head = head.trim();
    let (whole, numerator) = match head.rsplit_once(char::is_whitespace) {
        Some((whole, numerator)) => (parse_number(whole), parse_number(numerator)),
        None => (0.0, parse_number(head)),
    };

    whole + numerator / denominator
}

fn parse_number(token: &str) -> f64 {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Convert a number to the simplest fraction within [`FRACTION_TOLERANCE`].
///
/// Denominators are tried from 1 to [`MAX_DENOMINATOR`] and numerators from
/// 0 up to the denominator, so the smallest denominator wins. Halves,
/// thirds and quarters are rendered as glyphs. Values with no close enough
/// fraction fall back to two decimals.
///
/// # Examples
///
/// ```rust
/// use groceries::quantity::decimal_to_fraction;
///
/// assert_eq!(decimal_to_fraction(0.5), "½");
/// assert_eq!(decimal_to_fraction(2.0), "2");
/// assert_eq!(decimal_to_fraction(0.3), "3/10");
/// assert_eq!(decimal_to_fraction(1.25), "1.25");
/// ```
pub fn decimal_to_fraction(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }

    for denominator in 1..=MAX_DENOMINATOR {
        for numerator in 0..=denominator {
            let candidate = numerator as f64 / denominator as f64;
            if (candidate - value).abs() < FRACTION_TOLERANCE {
                return render_fraction(numerator, denominator);
            }
        }
    }

    let fixed = format!("{value:.2}");
    match fixed.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => fixed,
    }
}

fn render_fraction(numerator: u32, denominator: u32) -> String {
    match (numerator, denominator) {
        (n, 1) => n.to_string(),
        (1, 2) => "½".to_string(),
        (1, 3) => "⅓".to_string(),
        (2, 3) => "⅔".to_string(),
        (1, 4) => "¼".to_string(),
        (3, 4) => "¾".to_string(),
        (n, d) => format!("{n}/{d}"),
    }
}

/// Unit text of an amount: everything but digits, glyphs and fraction punctuation
fn amount_unit(amount: &str) -> String {
    NUMERIC_CHARS.replace_all(amount, "").trim().to_string()
}

/// Leading numeric or fractional part of an amount, if any
fn leading_number(amount: &str) -> Option<&str> {
    LEADING_NUMBER
        .find(amount)
        .map(|found| found.as_str().trim())
        .filter(|number| !number.is_empty())
}

/// Check whether two amounts can be added numerically.
///
/// Both must carry the same unit text (case-insensitive), or both none.
///
/// # Examples
///
/// ```rust
/// use groceries::quantity::is_amount_combinable;
///
/// assert!(is_amount_combinable("1 cup", "2 Cup"));
/// assert!(is_amount_combinable("2", "3"));
/// assert!(!is_amount_combinable("1 cup", "1 tbsp"));
/// assert!(!is_amount_combinable("", "1 cup"));
/// ```
pub fn is_amount_combinable(a: &str, b: &str) -> bool {
    let unit_a = amount_unit(a);
    let unit_b = amount_unit(b);

    match (unit_a.is_empty(), unit_b.is_empty()) {
        (true, true) => true,
        (false, false) => unit_a.to_lowercase() == unit_b.to_lowercase(),
        _ => false,
    }
}

/// Add two amounts, or chain them with " + " when they cannot be added.
///
/// The sum is rendered with [`decimal_to_fraction`] and keeps the unit of
/// the first amount.
pub fn combine_amounts(a: &str, b: &str) -> String {
    let chained = || format!("{a} + {b}");

    if !is_amount_combinable(a, b) {
        trace!("Amounts '{}' and '{}' are not combinable", a, b);
        return chained();
    }

    let (Some(number_a), Some(number_b)) = (leading_number(a), leading_number(b)) else {
        trace!("No leading number in '{}' or '{}'", a, b);
        return chained();
    };

    let total = parse_fraction(number_a) + parse_fraction(number_b);
    let sum = decimal_to_fraction(total);
    let unit = amount_unit(a);

    debug!("Combined amounts '{}' + '{}' -> {} ({})", a, b, sum, total);

    if unit.is_empty() {
        sum
    } else {
        format!("{sum} {unit}")
    }
}
