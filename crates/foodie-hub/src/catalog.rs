//! Menu catalog
//!
//! The read-only list of dishes plus the filter/sort query used by the menu
//! screen. The built-in menu ships as TOML inside the binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;
use strum::{Display, EnumString};

use crate::domain_models::MenuItem;

/// Category name that matches every item
pub const ALL_CATEGORIES: &str = "All";

const BUILTIN_MENU: &str = include_str!("../data/menu.toml");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    /// Category tabs in display order; categories only found on items follow
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    items: Vec<MenuItem>,
}

/// Ordering options of the menu screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SortBy {
    /// Alphabetical, case-insensitive
    #[default]
    Name,
    /// Cheapest first
    Price,
    /// Best rated first
    Rating,
}

/// Filter and sort settings of the menu screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuQuery {
    pub category: String,
    pub search: String,
    pub sort: SortBy,
}

impl Default for MenuQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            sort: SortBy::default(),
        }
    }
}

impl MenuQuery {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    fn matches(&self, item: &MenuItem) -> bool {
        let matches_category = self.category == ALL_CATEGORIES || item.category == self.category;
        let needle = self.search.to_lowercase();
        let matches_search = item.name.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle);
        matches_category && matches_search
    }

    fn compare(&self, a: &MenuItem, b: &MenuItem) -> Ordering {
        match self.sort {
            SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortBy::Price => a.price.total_cmp(&b.price),
            SortBy::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

/// The menu, in display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<String>,
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            categories: Vec::new(),
            items,
        }
    }

    /// Fix the order of the category tabs
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// The menu compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_MENU).context("Failed to parse built-in menu")
    }

    /// Parse a menu from a TOML document with an `[[items]]` array
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).context("Invalid menu document")?;
        log::debug!("Loaded {} menu items", file.items.len());
        Ok(Self::new(file.items).with_categories(file.categories))
    }

    /// Load a menu from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu file: {:?}", path))?;
        Self::from_toml_str(&content).with_context(|| format!("Failed to parse menu file: {:?}", path))
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// "All", then the declared categories, then any other item category in
    /// first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        let declared = self.categories.iter();
        let seen = self.items.iter().map(|item| &item.category);
        for category in declared.chain(seen) {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
        categories
    }

    /// Items matching the query, sorted as requested
    pub fn query(&self, query: &MenuQuery) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.items.iter().filter(|item| query.matches(item)).collect();
        items.sort_by(|a, b| query.compare(a, b));
        items
    }
}
