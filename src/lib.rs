//! # Groceries
//!
//! Ingredient text processing for recipe and grocery-list management:
//! parsing ingredient lines, categorizing ingredients by grocery-store
//! section, merging quantities across recipes and scaling recipes to a new
//! number of servings.

pub mod categorizer;
pub mod config;
pub mod errors;
pub mod grocery_list;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod observability;
pub mod quantity;
pub mod scaling;
pub mod store;
pub mod units;

// Re-export types for easier access
pub use categorizer::categorize_ingredient;
pub use config::AppConfig;
pub use errors::GroceryError;
pub use grocery_list::{GroceryList, MergeOutcome};
pub use ingredient_model::{Category, GroceryItem, ParsedIngredient};
pub use ingredient_parser::parse_ingredient;
pub use quantity::{combine_amounts, decimal_to_fraction, is_amount_combinable, parse_fraction};
pub use scaling::{scale_ingredients, scale_quantity};
pub use store::{GroceryStore, JsonFileStore};
