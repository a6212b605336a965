//! # Recipe Scaling Example
//!
//! Scales an ingredient block to a different number of servings and shows
//! how quantities are rendered as cooking fractions.

use groceries::quantity::{combine_amounts, decimal_to_fraction, parse_fraction};
use groceries::scaling::{scale_ingredients, scale_quantity};

fn main() {
    println!("⚖️  Recipe Scaling Example");
    println!("=========================\n");

    let cookies = "2 1/4 cups flour\n1 tsp baking soda\n1 cup butter\n3/4 cup sugar\n2 eggs\nsalt to taste";

    // Example 1: Scaling a whole block
    println!("🍪 Example 1: Chocolate Chip Cookies (24 → 36 and 24 → 8)");
    println!("---------------------------------------------------------");
    for (new, original) in [("36", "24"), ("8", "24")] {
        println!("  {} servings:", new);
        for line in scale_ingredients(cookies, new, original).lines() {
            println!("    {}", line);
        }
    }
    println!();

    // Example 2: Cases left untouched
    println!("🚫 Example 2: Unscaled Inputs");
    println!("-----------------------------");
    for (new, original) in [("-", "24"), ("24", "24"), ("a few", "24"), ("4", "0")] {
        let unchanged = scale_ingredients(cookies, new, original) == cookies;
        println!("  new: {:<6} original: {:<4} unchanged: {}", new, original, unchanged);
    }
    println!();

    // Example 3: Single quantities
    println!("🔢 Example 3: Single Quantities");
    println!("-------------------------------");
    for (quantity, factor) in [("½", 2.0), ("1 1/2", 2.0), ("3", 0.5), ("2", 1.0 / 3.0), ("some", 2.0)] {
        println!("  {:<6} × {:.2} = {}", quantity, factor, scale_quantity(quantity, factor));
    }
    println!();

    // Example 4: Fraction rendering
    println!("🥄 Example 4: Decimals as Fractions");
    println!("-----------------------------------");
    for token in ["0.5", "1/3", "2/3", "0.25", "3/4", "1.5", "2"] {
        let value = parse_fraction(token);
        println!("  {:<5} → {}", token, decimal_to_fraction(value));
    }
    println!();

    // Example 5: Combining amounts
    println!("➕ Example 5: Combining Amounts");
    println!("------------------------------");
    for (a, b) in [("1 cup", "1 cup"), ("1/2 cup", "1/4 cup"), ("1 cup", "2 tbsp"), ("", "1 cup")] {
        println!("  \"{}\" + \"{}\" → \"{}\"", a, b, combine_amounts(a, b));
    }
}
