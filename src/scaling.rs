//! # Recipe Scaling
//!
//! Scale a recipe's ingredient block from its original number of servings to
//! a new one. Scaled quantities are snapped to common cooking fractions
//! (1/8, 1/4, 1/3, 1/2, 2/3, 3/4) when close enough, otherwise rendered as a
//! short decimal.
//!
//! ```rust
//! use groceries::scaling::scale_ingredients;
//!
//! let scaled = scale_ingredients("2 cups flour\n1 egg", "4", "2");
//! assert_eq!(scaled, "4 cup flour\n2 egg");
//! ```

use crate::ingredient_parser::parse_ingredient;
use crate::quantity::parse_fraction;
use crate::units::replace_fraction_glyphs;
use log::{debug, trace};

/// Placeholder used for "servings unknown"
pub const SERVINGS_SENTINEL: &str = "-";

/// Fractions a scaled quantity may snap to, in priority order
const COOKING_FRACTIONS: [(u32, u32); 6] = [(1, 8), (1, 4), (1, 3), (1, 2), (2, 3), (3, 4)];

const SNAP_TOLERANCE: f64 = 0.01;

/// Format a scaled quantity for display in a recipe
///
/// # Examples
///
/// ```rust
/// use groceries::scaling::format_quantity;
///
/// assert_eq!(format_quantity(3.0), "3");
/// assert_eq!(format_quantity(0.333), "1/3");
/// assert_eq!(format_quantity(1.5), "1.5");
/// assert_eq!(format_quantity(0.1), "0.1");
/// ```
pub fn format_quantity(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;

    if rounded.fract() == 0.0 {
        return format!("{}", rounded as i64);
    }

    for (numerator, denominator) in COOKING_FRACTIONS {
        let fraction = numerator as f64 / denominator as f64;
        if (rounded - fraction).abs() < SNAP_TOLERANCE {
            return format!("{numerator}/{denominator}");
        }
    }

    let fixed = format!("{rounded:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Multiply a quantity token by `factor`.
///
/// `"-"` and empty quantities are returned as-is, as is anything that is not
/// a number or fraction.
pub fn scale_quantity(quantity: &str, factor: f64) -> String {
    let trimmed = quantity.trim();
    if trimmed.is_empty() || trimmed == SERVINGS_SENTINEL {
        return quantity.to_string();
    }

    let normalized = replace_fraction_glyphs(trimmed);
    if normalized.contains('/') {
        return format_quantity(parse_fraction(&normalized) * factor);
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => format_quantity(value * factor),
        _ => {
            trace!("Quantity '{}' is not numeric, leaving it unscaled", quantity);
            quantity.to_string()
        }
    }
}

fn parse_servings(servings: &str) -> Option<f64> {
    servings
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Scale a newline-delimited ingredients block from `original_servings` to
/// `new_servings`.
///
/// The block is returned unchanged when either serving count is the
/// [`SERVINGS_SENTINEL`] or not a number, when both are equal, or when the
/// original serving count is zero. Lines without a leading quantity pass
/// through untouched.
pub fn scale_ingredients(ingredients: &str, new_servings: &str, original_servings: &str) -> String {
    let new_trimmed = new_servings.trim();
    let original_trimmed = original_servings.trim();

    if new_trimmed == SERVINGS_SENTINEL
        || original_trimmed == SERVINGS_SENTINEL
        || new_trimmed == original_trimmed
    {
        return ingredients.to_string();
    }

    let (Some(new_count), Some(original_count)) =
        (parse_servings(new_trimmed), parse_servings(original_trimmed))
    else {
        debug!(
            "Servings '{}' -> '{}' are not numeric, leaving ingredients unscaled",
            original_servings, new_servings
        );
        return ingredients.to_string();
    };

    if original_count == 0.0 || new_count == original_count {
        return ingredients.to_string();
    }

    let factor = new_count / original_count;
    debug!(
        "Scaling ingredients from {} to {} servings (factor {})",
        original_count, new_count, factor
    );

    ingredients
        .split('\n')
        .map(|line| scale_line(line, factor))
        .collect::<Vec<_>>()
        .join("\n")
}

fn scale_line(line: &str, factor: f64) -> String {
    let parsed = parse_ingredient(line);
    if !parsed.has_quantity() {
        return line.to_string();
    }

    let mut scaled = scale_quantity(&parsed.quantity, factor);
    if !parsed.unit.is_empty() {
        scaled.push(' ');
        scaled.push_str(&parsed.unit);
    }
    scaled.push(' ');
    scaled.push_str(&parsed.text);

    scaled.trim().to_string()
}
