//! # Error Types Module
//!
//! Error types for the parts of the crate that can actually fail: loading
//! configuration, reading and writing the stored grocery list, and parsing
//! category names. The ingredient processing functions themselves never
//! fail; they degrade to a usable string instead.

/// Custom error types for grocery list operations
#[derive(Debug, Clone, PartialEq)]
pub enum GroceryError {
    /// Invalid or missing configuration values
    Config(String),
    /// A category name outside the fixed category set
    UnknownCategory(String),
    /// Grocery list storage errors
    Store(String),
}

impl std::fmt::Display for GroceryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroceryError::Config(msg) => write!(f, "Configuration error: {msg}"),
            GroceryError::UnknownCategory(name) => write!(f, "Unknown category: {name}"),
            GroceryError::Store(msg) => write!(f, "Store error: {msg}"),
        }
    }
}

impl std::error::Error for GroceryError {}

impl From<anyhow::Error> for GroceryError {
    fn from(err: anyhow::Error) -> Self {
        GroceryError::Store(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GroceryError::Config("bad format".to_string()).to_string(),
            "Configuration error: bad format"
        );
        assert_eq!(
            GroceryError::UnknownCategory("Snacks".to_string()).to_string(),
            "Unknown category: Snacks"
        );
    }

    #[test]
    fn test_from_anyhow() {
        let err: GroceryError = anyhow::anyhow!("disk full").into();
        assert_eq!(err, GroceryError::Store("disk full".to_string()));
    }
}
