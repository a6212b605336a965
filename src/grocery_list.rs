//! # Grocery List Aggregation
//!
//! Builds a grocery list from one or more recipes' ingredient blocks. Each
//! line is parsed, matched against existing items by its normalized name,
//! and either merged into the existing item (adding compatible amounts) or
//! added as a new, categorized item.
//!
//! Merges are applied in the order lines are fed in; chained amounts such
//! as "1 cup + 2 tbsp" depend on that order.
//!
//! ## Usage
//!
//! ```rust
//! use groceries::grocery_list::GroceryList;
//! use groceries::ingredient_model::Category;
//!
//! let mut list = GroceryList::new();
//! list.add_ingredients("2 cups flour\n3 eggs");
//! list.add_ingredients("1 cup Flour\n1 tbsp butter");
//!
//! let flour = list.find("flour").unwrap();
//! assert_eq!(flour.amount, "3 cup");
//! assert_eq!(flour.category, Category::Pantry);
//! assert_eq!(list.len(), 3);
//! ```

use crate::categorizer::categorize_ingredient;
use crate::ingredient_model::{Category, GroceryItem, ParsedIngredient};
use crate::ingredient_parser::parse_ingredient;
use crate::quantity::combine_amounts;
use chrono::Utc;
use log::{debug, info};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_SUFFIX_LEN: usize = 9;

/// Matching key for grocery item names: lower-cased and trimmed
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Non-blank, trimmed lines of an ingredients block
pub fn ingredient_lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Generate a unique grocery item id: base-36 milliseconds plus a random suffix
pub fn generate_item_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect();
    format!("{}{}", to_base36(millis), suffix)
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// What happened to an ingredient fed into the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A new item was created with this id
    Added(String),
    /// The ingredient was merged into the existing item with this id
    Merged(String),
}

/// An ordered grocery list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

impl GroceryList {
    /// Create a new empty grocery list
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already stored items, keeping their order
    pub fn from_items(items: Vec<GroceryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<GroceryItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet completed
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// Find an item by name (case-insensitive, trimmed)
    pub fn find(&self, name: &str) -> Option<&GroceryItem> {
        let key = normalize_name(name);
        self.items.iter().find(|item| normalize_name(&item.name) == key)
    }

    /// Find an item by id
    pub fn get(&self, id: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Parse one ingredient line and merge it into the list
    pub fn add_ingredient_line(&mut self, line: &str) -> MergeOutcome {
        let parsed = parse_ingredient(line.trim());
        self.add_parsed(&parsed)
    }

    /// Merge an already parsed ingredient into the list
    pub fn add_parsed(&mut self, parsed: &ParsedIngredient) -> MergeOutcome {
        self.merge(&parsed.text, parsed.amount())
    }

    /// Merge every non-blank line of an ingredients block, in order.
    ///
    /// Returns one outcome per line.
    pub fn add_ingredients(&mut self, block: &str) -> Vec<MergeOutcome> {
        let outcomes: Vec<MergeOutcome> = ingredient_lines(block)
            .map(|line| self.add_ingredient_line(line))
            .collect();

        info!(
            "Merged {} ingredient lines into grocery list ({} items)",
            outcomes.len(),
            self.items.len()
        );
        outcomes
    }

    /// Add a manually entered item with a free-text amount
    pub fn add_item(&mut self, name: &str, amount: &str) -> MergeOutcome {
        self.merge(name, amount.trim().to_string())
    }

    fn merge(&mut self, name: &str, amount: String) -> MergeOutcome {
        let name = name.trim();
        let key = normalize_name(name);
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| normalize_name(&item.name) == key)
        {
            if !amount.is_empty() {
                let combined = combine_amounts(&existing.amount, &amount);
                debug!(
                    "Merged '{}' into existing item: '{}' -> '{}'",
                    name, existing.amount, combined
                );
                existing.amount = combined;
            }
            return MergeOutcome::Merged(existing.id.clone());
        }

        let item = GroceryItem {
            id: generate_item_id(),
            name: name.to_string(),
            category: categorize_ingredient(name),
            completed: false,
            amount,
        };
        debug!(
            "Added grocery item '{}' ({}) with amount '{}'",
            item.name, item.category, item.amount
        );
        let id = item.id.clone();
        self.items.push(item);
        MergeOutcome::Added(id)
    }

    /// Mark an item completed or not. Returns false for an unknown id.
    pub fn set_completed(&mut self, id: &str, completed: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Edit an item's name and amount; the category is recomputed.
    ///
    /// Returns false for an unknown id.
    pub fn edit_item(&mut self, id: &str, name: &str, amount: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };

        item.name = name.trim().to_string();
        item.amount = amount.trim().to_string();
        item.category = categorize_ingredient(&item.name);
        debug!("Edited item {} -> '{}' ({})", id, item.name, item.category);
        true
    }

    /// Items grouped by category in display order, empty categories omitted
    pub fn grouped(&self) -> Vec<(Category, Vec<&GroceryItem>)> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let items: Vec<&GroceryItem> = self
                    .items
                    .iter()
                    .filter(|item| item.category == category)
                    .collect();
                (category, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }
}
