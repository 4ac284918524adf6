//! Core domain types for recipe documents.
//!
//! The shapes mirror what the recipe API returns. Every field except the id
//! defaults when absent so that a partially filled document still loads; the
//! filter engine treats missing values permissively.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a recipe
pub type RecipeId = u32;

// =============================================================================
// Recipe-related Types
// =============================================================================

/// A recipe as served by the API.
///
/// Both the full recipe endpoint and the lighter profile endpoint decode into
/// this type. The profile endpoint calls the image list `imageUrl` and adds a
/// server-computed `avgRating`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub recipe_name: String,
    /// Enum-like category such as `BREAKFAST` or `SOUP`
    #[serde(default)]
    pub category: String,
    /// 1 (easy) to 3 (hard)
    #[serde(default)]
    pub difficulty: u8,
    /// Minutes
    #[serde(default)]
    pub prepare_time: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub is_public: bool,
    /// Free-form language tag, compared case-insensitively
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default, alias = "imageUrl")]
    pub images: Vec<RecipeImage>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f32>,
}

impl Recipe {
    /// Create a recipe with the given id and name and every other field empty.
    pub fn new(id: RecipeId, recipe_name: impl Into<String>) -> Self {
        Self {
            id,
            recipe_name: recipe_name.into(),
            category: String::new(),
            difficulty: 0,
            prepare_time: 0,
            servings: 0,
            is_public: false,
            language: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            images: Vec::new(),
            ratings: Vec::new(),
            avg_rating: None,
        }
    }

    /// Iterate over the names of this recipe's ingredients.
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.ingredient_name.as_str())
    }
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default)]
    pub ingredient_name: String,
    #[serde(default)]
    pub quantity: f32,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub is_optional: bool,
}

impl Ingredient {
    /// Ingredient with only a name, as used in most test fixtures.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            ingredient_name: name.into(),
            quantity: 0.0,
            unit: String::new(),
            is_optional: false,
        }
    }
}

/// A preparation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_number: Option<u32>,
    #[serde(default)]
    pub description: String,
}

/// Image reference held by the external image store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeImage {
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

// =============================================================================
// Rating Type
// =============================================================================

/// A single user rating of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_id: Option<u32>,
    /// 1 to 5 stars
    #[serde(default)]
    pub value: u8,
}

// =============================================================================
// API Envelopes
// =============================================================================

/// Paged list envelope returned by the recipe list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipesResponse {
    #[serde(default)]
    pub content: Vec<Recipe>,
    #[serde(default)]
    pub images: Vec<RecipeImage>,
    #[serde(default)]
    pub total_pages: u32,
}

/// The signed-in user's own recipes and favourites
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRecipes {
    #[serde(default, rename = "userRecipes", alias = "UserRecipes")]
    pub user_recipes: Vec<Recipe>,
    #[serde(default)]
    pub favourites: Vec<Recipe>,
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Rating statistics for a recipe, computed once at load time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeStats {
    /// Average of rating values, 0.0 when unrated
    pub avg_rating: f32,
    pub rating_count: u32,
}

// =============================================================================
// RecipeIndex - In-Memory Collections
// =============================================================================

/// Holds every loaded collection plus lookups by id.
///
/// Collections keep document order since the filter engine preserves input
/// order in its output.
#[derive(Debug)]
pub struct RecipeIndex {
    /// Main recipe collection (the list endpoint)
    pub(crate) recipes: Vec<Recipe>,
    /// Recipes authored by the signed-in user
    pub(crate) user_recipes: Vec<Recipe>,
    /// Recipes the signed-in user marked as favourite
    pub(crate) favourites: Vec<Recipe>,

    /// Position of each recipe in `recipes`
    pub(crate) positions: HashMap<RecipeId, usize>,
    /// Stats for every recipe seen in any collection
    pub(crate) recipe_stats: HashMap<RecipeId, RecipeStats>,
}

impl RecipeIndex {
    /// Creates a new, empty RecipeIndex
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
            user_recipes: Vec::new(),
            favourites: Vec::new(),
            positions: HashMap::new(),
            recipe_stats: HashMap::new(),
        }
    }

    /// Get a recipe by ID, looking in the main collection first and then in
    /// the profile collections.
    pub fn get_recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.positions
            .get(&id)
            .map(|&pos| &self.recipes[pos])
            .or_else(|| self.user_recipes.iter().find(|r| r.id == id))
            .or_else(|| self.favourites.iter().find(|r| r.id == id))
    }

    /// All recipes of the main collection in document order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The signed-in user's own recipes
    pub fn user_recipes(&self) -> &[Recipe] {
        &self.user_recipes
    }

    /// The signed-in user's favourites
    pub fn favourites(&self) -> &[Recipe] {
        &self.favourites
    }

    /// Get precomputed statistics for a recipe
    pub fn get_recipe_stats(&self, id: RecipeId) -> Option<&RecipeStats> {
        self.recipe_stats.get(&id)
    }

    /// Insert a recipe into the main collection.
    ///
    /// Lookups by id resolve to the first recipe inserted with that id;
    /// duplicates are kept in the collection and reported by `validate`.
    pub fn insert_recipe(&mut self, recipe: Recipe) {
        self.positions.entry(recipe.id).or_insert(self.recipes.len());
        self.recipes.push(recipe);
    }

    /// Insert a recipe into the user's own collection
    pub fn insert_user_recipe(&mut self, recipe: Recipe) {
        self.user_recipes.push(recipe);
    }

    /// Insert a recipe into the user's favourites
    pub fn insert_favourite(&mut self, recipe: Recipe) {
        self.favourites.push(recipe);
    }

    /// Get counts for debugging/validation: (recipes, user recipes, favourites)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.recipes.len(),
            self.user_recipes.len(),
            self.favourites.len(),
        )
    }
}

impl Default for RecipeIndex {
    fn default() -> Self {
        Self::new()
    }
}
