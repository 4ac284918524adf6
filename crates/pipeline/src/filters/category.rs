//! Exact match on recipe category.

use crate::traits::Filter;
use data_loader::Recipe;

/// Keeps recipes whose category equals the selection, case included.
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        recipe.category == self.category
    }
}
