//! # Grocery List Example
//!
//! Builds one grocery list from two recipes. Matching ingredients are merged
//! and compatible amounts are added together. Every item is sorted into a
//! grocery-store section.

use groceries::grocery_list::{GroceryList, MergeOutcome};
use groceries::ingredient_parser::parse_ingredient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🛒 Grocery List Builder Example");
    println!("===============================\n");

    let pancakes = r#"
    1 1/2 cups all-purpose flour
    2 tbsp sugar
    1 cup milk
    2 eggs
    3 tbsp butter
    pinch of salt
    "#;

    let crumble = r#"
    ½ cup all-purpose flour
    1/2 cup sugar
    4 apples
    1 tsp cinnamon
    frozen blueberries
    "#;

    // Example 1: What the parser sees
    println!("📖 Example 1: Parsed Ingredient Lines");
    println!("-------------------------------------");
    for line in pancakes.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let parsed = parse_ingredient(line);
        println!(
            "  {:<30} → quantity: {:<6} unit: {:<6} name: \"{}\"",
            line, parsed.quantity, parsed.unit, parsed.text
        );
    }
    println!();

    // Example 2: Merging two recipes
    println!("🥞 Example 2: Merging Pancakes and Apple Crumble");
    println!("------------------------------------------------");
    let mut list = GroceryList::new();
    for (title, recipe) in [("Pancakes", pancakes), ("Apple crumble", crumble)] {
        let outcomes = list.add_ingredients(recipe);
        let merged = outcomes
            .iter()
            .filter(|o| matches!(o, MergeOutcome::Merged(_)))
            .count();
        println!(
            "  {}: {} lines, {} merged into existing items",
            title,
            outcomes.len(),
            merged
        );
    }
    println!();

    // Example 3: The list by store section
    println!("🏪 Example 3: Grocery List by Section");
    println!("------------------------------------");
    for (category, items) in list.grouped() {
        println!("  {}", category);
        for item in items {
            println!("    {}", item);
        }
    }
    println!();

    // Example 4: Checking items off
    println!("✅ Example 4: Checking Items Off");
    println!("--------------------------------");
    let ids: Vec<String> = ["all-purpose flour", "sugar"]
        .iter()
        .filter_map(|name| list.find(name).map(|item| item.id.clone()))
        .collect();
    for id in &ids {
        list.set_completed(id, true);
    }
    println!("  {} of {} items remaining", list.remaining(), list.len());
    println!();

    // Example 5: The stored form
    println!("💾 Example 5: JSON Representation");
    println!("---------------------------------");
    println!("{}", serde_json::to_string_pretty(list.items())?);

    Ok(())
}
