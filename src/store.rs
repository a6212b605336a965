//! # Grocery List Storage
//!
//! The grocery list is owned by whoever calls into this crate; this module
//! only defines the seam they persist it through, plus a JSON file
//! implementation used by the command-line tool.

use crate::grocery_list::GroceryList;
use crate::ingredient_model::GroceryItem;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence for a grocery list
pub trait GroceryStore {
    /// Load the stored list; an empty list if nothing was stored yet
    fn load(&self) -> Result<GroceryList>;

    /// Replace the stored list
    fn save(&self, list: &GroceryList) -> Result<()>;
}

/// Stores the list as a pretty-printed JSON array of items
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GroceryStore for JsonFileStore {
    fn load(&self) -> Result<GroceryList> {
        if !self.path.exists() {
            info!(
                "No grocery list at {}, starting empty",
                self.path.display()
            );
            return Ok(GroceryList::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read grocery list {}", self.path.display()))?;
        let items: Vec<GroceryItem> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse grocery list {}", self.path.display()))?;

        info!(
            "Loaded {} grocery items from {}",
            items.len(),
            self.path.display()
        );
        Ok(GroceryList::from_items(items))
    }

    fn save(&self, list: &GroceryList) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(list.items()).context("Failed to serialize grocery list")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write grocery list {}", self.path.display()))?;

        info!(
            "Saved {} grocery items to {}",
            list.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let store = JsonFileStore::new(dir.path().join("list.json"));
        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let dir = TempDir::new()?;
        let store = JsonFileStore::new(dir.path().join("nested").join("list.json"));

        let mut list = GroceryList::new();
        list.add_ingredients("2 cups flour\n1 lb ground beef");
        store.save(&list)?;

        let loaded = store.load()?;
        assert_eq!(loaded, list);
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("list.json");
        fs::write(&path, "not json")?;

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse grocery list"));
        Ok(())
    }
}
