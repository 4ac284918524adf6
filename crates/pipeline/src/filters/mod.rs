//! Filter implementations for the recipe pipeline.
//!
//! One filter per criterion of `FilterCriteria`. Each is only added to a
//! pipeline when its criterion is active.

pub mod category;
pub mod difficulty;
pub mod ingredients;
pub mod language;
pub mod name_query;
pub mod range;

// Re-export for convenience
pub use category::CategoryFilter;
pub use difficulty::DifficultyFilter;
pub use ingredients::IngredientsFilter;
pub use language::{normalize_language, LanguageFilter};
pub use name_query::NameQueryFilter;
pub use range::{PrepareTimeFilter, ServingsFilter};

#[cfg(test)]
pub(crate) mod fixtures {
    use data_loader::{Ingredient, Recipe};

    /// Recipe with the fields the filters look at
    #[allow(clippy::too_many_arguments)]
    pub fn recipe(
        id: u32,
        name: &str,
        category: &str,
        difficulty: u8,
        prepare_time: u32,
        servings: u32,
        language: Option<&str>,
        ingredients: &[&str],
    ) -> Recipe {
        let mut recipe = Recipe::new(id, name);
        recipe.category = category.to_string();
        recipe.difficulty = difficulty;
        recipe.prepare_time = prepare_time;
        recipe.servings = servings;
        recipe.language = language.map(str::to_string);
        recipe.ingredients = ingredients.iter().map(|&i| Ingredient::named(i)).collect();
        recipe
    }

    /// Pancakes (easy breakfast, english) and Pasta (hard lunch, polish)
    pub fn pancakes_and_pasta() -> Vec<Recipe> {
        vec![
            recipe(1, "Pancakes", "BREAKFAST", 1, 15, 2, Some("english"), &["Flour", "Milk", "Egg"]),
            recipe(2, "Pasta", "LUNCH", 3, 30, 4, Some("polish"), &["Pasta", "Tomato"]),
        ]
    }
}
