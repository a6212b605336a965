//! # Configuration Module
//!
//! Application configuration for the command-line tool, read from
//! environment variables (a `.env` file is loaded first by the binary).

use crate::errors::GroceryError;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_LIST_PATH: &str = "grocery_list.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = GroceryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(GroceryError::Config(format!(
                "GROCERY_LOG_FORMAT must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

/// Configuration for the grocery command-line tool
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON file backing the stored grocery list
    pub list_path: PathBuf,
    /// Log line format
    pub log_format: LogFormat,
    /// `tracing` env-filter directive (e.g. "info", "groceries=debug")
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            list_path: PathBuf::from(DEFAULT_LIST_PATH),
            log_format: LogFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `GROCERY_LIST_PATH`: path of the stored list (default `grocery_list.json`)
    /// - `GROCERY_LOG_FORMAT`: `text` or `json` (default `text`)
    /// - `RUST_LOG`: log filter (default `info`)
    pub fn from_env() -> Result<Self, GroceryError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GroceryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let list_path = non_empty("GROCERY_LIST_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.list_path);
        let log_format = match non_empty("GROCERY_LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };
        let log_filter = non_empty("RUST_LOG").unwrap_or(defaults.log_filter);

        Ok(Self {
            list_path,
            log_format,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.list_path, PathBuf::from("grocery_list.json"));
    }

    #[test]
    fn test_values_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GROCERY_LIST_PATH", "/tmp/list.json"),
            ("GROCERY_LOG_FORMAT", "JSON"),
            ("RUST_LOG", "groceries=debug"),
        ]))
        .unwrap();

        assert_eq!(config.list_path, PathBuf::from("/tmp/list.json"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter, "groceries=debug");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("GROCERY_LIST_PATH", "  ")])).unwrap();
        assert_eq!(config.list_path, PathBuf::from(DEFAULT_LIST_PATH));
    }

    #[test]
    fn test_invalid_log_format() {
        let err = AppConfig::from_lookup(lookup_from(&[("GROCERY_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, GroceryError::Config(_)));
    }
}
