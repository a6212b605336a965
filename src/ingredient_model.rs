//! # Ingredient and Grocery Data Model
//!
//! This module defines the typed records that flow through the ingredient
//! processing pipeline:
//!
//! - **ParsedIngredient**: the quantity/unit/description triple produced by
//!   the parser for one ingredient line
//! - **GroceryItem**: one entry of a grocery list, with its merged amount
//! - **Category**: the fixed set of grocery-store sections used for grouping
//!
//! ## Usage
//!
//! ```rust
//! use groceries::ingredient_model::{Category, ParsedIngredient};
//!
//! let parsed = ParsedIngredient::new("2", "tbsp", "olive oil");
//! assert_eq!(parsed.amount(), "2 tbsp");
//! assert_eq!(parsed.to_string(), "2 tbsp olive oil");
//! assert_eq!(Category::MeatSeafood.as_str(), "Meat & Seafood");
//! ```

use crate::errors::GroceryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ingredient line split into quantity, unit and description
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Leading quantity with fraction glyphs spelled as `n/d`, or empty
    pub quantity: String,
    /// Abbreviated unit, or empty when none was detected
    pub unit: String,
    /// Remaining description (e.g., "all-purpose flour")
    pub text: String,
}

/// One entry of a grocery list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Unique identifier (time + random)
    pub id: String,
    /// Display name as first entered
    pub name: String,
    /// Grocery-store section, assigned when the item is created or edited
    pub category: Category,
    /// Whether the item has been picked up
    pub completed: bool,
    /// Display amount; incompatible amounts are chained with " + "
    pub amount: String,
}

/// Grocery-store sections, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Produce,
    Dairy,
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    Pantry,
    Frozen,
    Bakery,
    Other,
}

impl ParsedIngredient {
    /// Create a parsed ingredient from its three parts
    pub fn new(quantity: &str, unit: &str, text: &str) -> Self {
        Self {
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            text: text.to_string(),
        }
    }

    /// A line with no leading quantity: the whole line is the description
    pub fn unquantified(line: &str) -> Self {
        Self {
            quantity: String::new(),
            unit: String::new(),
            text: line.to_string(),
        }
    }

    /// Check if a leading quantity was detected
    pub fn has_quantity(&self) -> bool {
        !self.quantity.is_empty()
    }

    /// Display amount for a grocery list: "quantity unit", or the quantity alone
    pub fn amount(&self) -> String {
        if self.unit.is_empty() {
            self.quantity.clone()
        } else {
            format!("{} {}", self.quantity, self.unit).trim().to_string()
        }
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [&self.quantity, &self.unit, &self.text];
        let mut first = true;
        for part in parts.iter().filter(|part| !part.is_empty()) {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{part}")?;
            first = false;
        }
        Ok(())
    }
}

impl GroceryItem {
    /// Check if this item carries an amount
    pub fn has_amount(&self) -> bool {
        !self.amount.trim().is_empty()
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        if self.has_amount() {
            write!(f, "[{mark}] {} ({})", self.name, self.amount)
        } else {
            write!(f, "[{mark}] {}", self.name)
        }
    }
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Produce,
        Category::Dairy,
        Category::MeatSeafood,
        Category::Pantry,
        Category::Frozen,
        Category::Bakery,
        Category::Other,
    ];

    /// Get the display name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::MeatSeafood => "Meat & Seafood",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Bakery => "Bakery",
            Category::Other => "Other",
        }
    }

    /// Position of the category in display order
    pub fn display_order(&self) -> usize {
        Category::ALL
            .iter()
            .position(|category| category == self)
            .unwrap_or(Category::ALL.len())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = GroceryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GroceryError::UnknownCategory(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_ingredient_amount() {
        assert_eq!(ParsedIngredient::new("2", "cup", "flour").amount(), "2 cup");
        assert_eq!(ParsedIngredient::new("3", "", "eggs").amount(), "3");
        assert_eq!(ParsedIngredient::unquantified("salt").amount(), "");
    }

    #[test]
    fn test_parsed_ingredient_display() {
        assert_eq!(
            ParsedIngredient::new("1/2", "tsp", "pepper").to_string(),
            "1/2 tsp pepper"
        );
        assert_eq!(ParsedIngredient::new("3", "", "eggs").to_string(), "3 eggs");
        assert_eq!(ParsedIngredient::new("2", "cup", "").to_string(), "2 cup");
        assert_eq!(ParsedIngredient::unquantified("salt").to_string(), "salt");
    }

    #[test]
    fn test_unquantified_has_no_quantity() {
        let parsed = ParsedIngredient::unquantified("  pinch of salt ");
        assert!(!parsed.has_quantity());
        assert_eq!(parsed.text, "  pinch of salt ");
        assert!(parsed.unit.is_empty());
    }

    #[test]
    fn test_category_display_order() {
        let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        assert_eq!(
            names,
            vec!["Produce", "Dairy", "Meat & Seafood", "Pantry", "Frozen", "Bakery", "Other"]
        );
        assert_eq!(Category::Produce.display_order(), 0);
        assert_eq!(Category::Other.display_order(), 6);
        assert!(Category::Dairy < Category::Bakery);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("meat & seafood".parse::<Category>(), Ok(Category::MeatSeafood));
        assert_eq!(" Pantry ".parse::<Category>(), Ok(Category::Pantry));
        assert_eq!(
            "Snacks".parse::<Category>(),
            Err(GroceryError::UnknownCategory("Snacks".to_string()))
        );
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::MeatSeafood).unwrap();
        assert_eq!(json, "\"Meat & Seafood\"");
        let back: Category = serde_json::from_str("\"Frozen\"").unwrap();
        assert_eq!(back, Category::Frozen);
    }

    #[test]
    fn test_grocery_item_display() {
        let item = GroceryItem {
            id: "abc".to_string(),
            name: "Flour".to_string(),
            category: Category::Pantry,
            completed: false,
            amount: "2 cup".to_string(),
        };
        assert_eq!(item.to_string(), "[ ] Flour (2 cup)");

        let done = GroceryItem {
            completed: true,
            amount: String::new(),
            ..item
        };
        assert_eq!(done.to_string(), "[x] Flour");
    }
}
