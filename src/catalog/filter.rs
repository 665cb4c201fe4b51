//! Catalog filtering
//!
//! Pure functions producing the browsable view of the menu. Nothing here
//! mutates the loaded catalog; every call starts from the full item list.

use super::models::{Category, MenuItem};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Category selector: one fixed category or the `ALL` wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "ALL" {
            return Ok(CategoryFilter::All);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("ALL"),
            CategoryFilter::Only(category) => f.write_str(category.label()),
        }
    }
}

/// Returns the items matching `category` whose name contains `search`,
/// ignoring case. Relative order is preserved; an empty search matches all.
pub fn filter_items(items: &[MenuItem], category: CategoryFilter, search: &str) -> Vec<MenuItem> {
    let needle = search.to_lowercase();

    items
        .iter()
        .filter(|item| category.matches(item.category))
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
