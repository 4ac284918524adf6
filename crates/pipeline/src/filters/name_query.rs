//! Free-text search over recipe names.

use crate::traits::Filter;
use data_loader::Recipe;

/// Keeps recipes whose name contains the query, ignoring case.
pub struct NameQueryFilter {
    query: String,
}

impl NameQueryFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }
}

impl Filter for NameQueryFilter {
    fn name(&self) -> &str {
        "NameQueryFilter"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        recipe.recipe_name.to_lowercase().contains(&self.query)
    }
}
