//! # Data Loader Crate
//!
//! This crate loads recipe collections shaped like the recipe API responses.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Recipe, Ingredient, Rating, RecipeIndex)
//! - **parser**: Parse JSON documents into Rust structs
//! - **index**: Build the RecipeIndex and per-recipe statistics
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::RecipeIndex;
//! use std::path::Path;
//!
//! let index = RecipeIndex::load_from_files(Path::new("data"))?;
//!
//! let recipe = index.get_recipe(1).unwrap();
//! let stats = index.get_recipe_stats(1);
//! println!("{} has {} ratings", recipe.recipe_name, stats.map_or(0, |s| s.rating_count));
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::{PROFILE_FILE, RECIPES_FILE};
pub use types::{
    // Type aliases
    RecipeId,
    // Core types
    Recipe,
    Ingredient,
    Step,
    RecipeImage,
    Rating,
    RecipeIndex,
    RecipeStats,
    // API envelopes
    RecipesResponse,
    ProfileRecipes,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_index_creation() {
        let index = RecipeIndex::new();
        assert_eq!(index.counts(), (0, 0, 0));
    }

    #[test]
    fn test_insert_recipe() {
        let mut index = RecipeIndex::new();

        let mut recipe = Recipe::new(1, "Tomato Soup");
        recipe.category = "SOUP".to_string();
        recipe.ingredients = vec![Ingredient::named("Tomato"), Ingredient::named("Basil")];

        index.insert_recipe(recipe);

        let retrieved = index.get_recipe(1).unwrap();
        assert_eq!(retrieved.category, "SOUP");
        let names: Vec<_> = retrieved.ingredient_names().collect();
        assert_eq!(names, vec!["Tomato", "Basil"]);
    }

    #[test]
    fn test_lookup_falls_back_to_profile_collections() {
        let mut index = RecipeIndex::new();
        index.insert_user_recipe(Recipe::new(10, "Mine"));
        index.insert_favourite(Recipe::new(11, "Liked"));

        assert_eq!(index.get_recipe(10).unwrap().recipe_name, "Mine");
        assert_eq!(index.get_recipe(11).unwrap().recipe_name, "Liked");
        assert_eq!(index.counts(), (0, 1, 1));
    }

    #[test]
    fn test_empty_queries() {
        let index = RecipeIndex::new();

        assert!(index.get_recipe(999).is_none());
        assert!(index.get_recipe_stats(999).is_none());
        assert!(index.recipes().is_empty());
    }
}
