//! RecipeIndex building and indexing logic.
//!
//! This module builds the RecipeIndex from parsed documents:
//! - Insert the main collection and the profile collections
//! - Compute rating statistics per recipe
//! - Report data-quality findings

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{info, warn};

/// File holding the main recipe collection
pub const RECIPES_FILE: &str = "recipes.json";

/// Optional file holding the signed-in user's recipes and favourites
pub const PROFILE_FILE: &str = "profile.json";

impl RecipeIndex {
    /// Load all recipe documents from a directory
    ///
    /// Steps:
    /// 1. Parse `recipes.json` and `profile.json` in parallel
    /// 2. Insert every collection
    /// 3. Compute recipe statistics
    /// 4. Log data-quality findings without failing
    ///
    /// A missing `profile.json` yields empty profile collections.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading recipe documents from {:?}", data_dir);

        let recipes_path = data_dir.join(RECIPES_FILE);
        let profile_path = data_dir.join(PROFILE_FILE);

        let (recipes, profile) = rayon::join(
            || parser::parse_recipe_collection(&recipes_path),
            || {
                if profile_path.exists() {
                    parser::parse_profile(&profile_path)
                } else {
                    Ok(ProfileRecipes::default())
                }
            },
        );
        let recipes = recipes?;
        let profile = profile?;

        info!(
            "Loaded {} recipes, {} user recipes, {} favourites",
            recipes.len(),
            profile.user_recipes.len(),
            profile.favourites.len()
        );

        let mut index = RecipeIndex::new();
        for recipe in recipes {
            index.insert_recipe(recipe);
        }
        for recipe in profile.user_recipes {
            index.insert_user_recipe(recipe);
        }
        for recipe in profile.favourites {
            index.insert_favourite(recipe);
        }

        index.compute_recipe_stats();

        for finding in index.quality_findings() {
            warn!("{}", finding);
        }

        Ok(index)
    }

    /// Compute rating statistics for every recipe in every collection
    ///
    /// The main collection wins: profile copies only fill in ids it lacks,
    /// matching the recipe `get_recipe` resolves to.
    pub fn compute_recipe_stats(&mut self) {
        // Ordered collect: main collection first, then the profile copies
        let computed: Vec<(RecipeId, RecipeStats)> = self
            .recipes
            .par_iter()
            .chain(self.user_recipes.par_iter())
            .chain(self.favourites.par_iter())
            .map(|recipe| (recipe.id, compute_stats(&recipe.ratings)))
            .collect();

        let mut stats: HashMap<RecipeId, RecipeStats> = HashMap::with_capacity(computed.len());
        for (id, recipe_stats) in computed {
            stats.entry(id).or_insert(recipe_stats);
        }

        self.recipe_stats = stats;
    }

    /// Strict integrity check
    ///
    /// Check that:
    /// - No recipe id appears twice in the main collection
    /// - Difficulty is in 1..=3
    /// - Rating values are in 1..=5
    pub fn validate(&self) -> Result<()> {
        match self.quality_findings().into_iter().next() {
            Some(finding) => Err(finding),
            None => Ok(()),
        }
    }

    /// Every problem `validate` would reject, in collection order
    pub fn quality_findings(&self) -> Vec<DataLoadError> {
        let mut findings = Vec::new();

        let mut seen = HashSet::new();
        for recipe in &self.recipes {
            if !seen.insert(recipe.id) {
                findings.push(DataLoadError::DuplicateId {
                    collection: RECIPES_FILE.to_string(),
                    id: recipe.id,
                });
            }
        }

        let all = self
            .recipes
            .iter()
            .chain(&self.user_recipes)
            .chain(&self.favourites);
        for recipe in all {
            if !(1..=3).contains(&recipe.difficulty) {
                findings.push(DataLoadError::InvalidValue {
                    recipe_id: recipe.id,
                    field: "difficulty".to_string(),
                    value: recipe.difficulty.to_string(),
                });
            }
            if let Some(rating) = recipe.ratings.iter().find(|r| !(1..=5).contains(&r.value)) {
                findings.push(DataLoadError::InvalidValue {
                    recipe_id: recipe.id,
                    field: "rating".to_string(),
                    value: rating.value.to_string(),
                });
            }
        }

        findings
    }
}

/// Average and count of a recipe's ratings
fn compute_stats(ratings: &[Rating]) -> RecipeStats {
    let rating_count = ratings.len() as u32;
    let avg_rating = if rating_count > 0 {
        let total: u32 = ratings.iter().map(|r| r.value as u32).sum();
        total as f32 / rating_count as f32
    } else {
        0.0
    };
    RecipeStats {
        avg_rating,
        rating_count,
    }
}
