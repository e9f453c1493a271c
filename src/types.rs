//! Common types used throughout hal-pager
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Sorting
// ============================================================================

/// Direction of a sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Query string representation (`ASC` / `DESC`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            other => Err(Error::config(format!("Unknown sort order: {other}"))),
        }
    }
}

/// A single sort criterion: property path plus order.
///
/// Rendered as `sort=<path>,<ORDER>` when building collection URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Property path, e.g. `lastName` or `address.city`
    pub path: String,
    /// Sort order
    #[serde(default)]
    pub order: SortOrder,
}

impl Sort {
    /// Create a new sort criterion
    pub fn new(path: impl Into<String>, order: SortOrder) -> Self {
        Self {
            path: path.into(),
            order,
        }
    }

    /// Ascending sort on `path`
    pub fn asc(path: impl Into<String>) -> Self {
        Self::new(path, SortOrder::Asc)
    }

    /// Descending sort on `path`
    pub fn desc(path: impl Into<String>) -> Self {
        Self::new(path, SortOrder::Desc)
    }

    /// Value of the `sort` query parameter
    pub fn query_value(&self) -> String {
        format!("{},{}", self.path, self.order)
    }
}

impl FromStr for Sort {
    type Err = Error;

    /// Parses `path` or `path,ASC|DESC`
    fn from_str(s: &str) -> Result<Self> {
        let (path, order) = match s.rsplit_once(',') {
            Some((path, order)) => (path.trim(), order.parse()?),
            None => (s.trim(), SortOrder::Asc),
        };
        if path.is_empty() {
            return Err(Error::config(format!("Invalid sort expression: '{s}'")));
        }
        Ok(Self::new(path, order))
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Navigation link relations of a paged collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    SelfLink,
    Next,
    Prev,
    First,
    Last,
}

impl Direction {
    /// HAL link relation name
    pub fn rel(&self) -> &'static str {
        match self {
            Direction::SelfLink => "self",
            Direction::Next => "next",
            Direction::Prev => "prev",
            Direction::First => "first",
            Direction::Last => "last",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rel())
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("name", "name", SortOrder::Asc ; "path only")]
    #[test_case("name,DESC", "name", SortOrder::Desc ; "explicit desc")]
    #[test_case("address.city,asc", "address.city", SortOrder::Asc ; "nested lowercase")]
    fn test_sort_from_str(input: &str, path: &str, order: SortOrder) {
        let sort: Sort = input.parse().unwrap();
        assert_eq!(sort, Sort::new(path, order));
    }

    #[test]
    fn test_sort_from_str_rejects_garbage() {
        assert!("name,SIDEWAYS".parse::<Sort>().is_err());
        assert!(",DESC".parse::<Sort>().is_err());
    }

    #[test]
    fn test_sort_query_value() {
        assert_eq!(Sort::desc("createdAt").query_value(), "createdAt,DESC");
        assert_eq!(Sort::asc("name").query_value(), "name,ASC");
    }

    #[test]
    fn test_sort_serde() {
        let sort: Sort = serde_json::from_str(r#"{"path": "name", "order": "DESC"}"#).unwrap();
        assert_eq!(sort, Sort::desc("name"));

        let sort: Sort = serde_json::from_str(r#"{"path": "name"}"#).unwrap();
        assert_eq!(sort.order, SortOrder::Asc);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::SelfLink.to_string(), "self");
        assert_eq!(Direction::Next.to_string(), "next");
        assert_eq!(Direction::Last.rel(), "last");
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!(String::new().none_if_empty(), None);
    }
}
