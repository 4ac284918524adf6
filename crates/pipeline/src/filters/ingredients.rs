//! Ingredient selection with AND semantics.

use crate::traits::Filter;
use data_loader::Recipe;

/// Keeps recipes that contain every selected ingredient.
///
/// ## Algorithm
/// For each selection (lowercased), at least one of the recipe's ingredient
/// names must contain it as a substring, ignoring case. A recipe therefore
/// passes only if all selections are satisfied.
pub struct IngredientsFilter {
    ingredients: Vec<String>,
}

impl IngredientsFilter {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            ingredients: ingredients
                .into_iter()
                .map(|i| i.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Filter for IngredientsFilter {
    fn name(&self) -> &str {
        "IngredientsFilter"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        let names: Vec<String> = recipe
            .ingredient_names()
            .map(str::to_lowercase)
            .collect();

        self.ingredients
            .iter()
            .all(|wanted| names.iter().any(|name| name.contains(wanted.as_str())))
    }
}
