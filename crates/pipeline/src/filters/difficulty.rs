//! Exact match on recipe difficulty.

use crate::traits::Filter;
use data_loader::Recipe;

/// Keeps recipes whose difficulty equals the selected level.
pub struct DifficultyFilter {
    difficulty: u8,
}

impl DifficultyFilter {
    /// # Arguments
    /// * `difficulty` - Level to keep (1 easy, 2 medium, 3 hard)
    pub fn new(difficulty: u8) -> Self {
        Self { difficulty }
    }
}

impl Filter for DifficultyFilter {
    fn name(&self) -> &str {
        "DifficultyFilter"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        recipe.difficulty == self.difficulty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::fixtures::pancakes_and_pasta;

    #[test]
    fn test_difficulty_filter() {
        let recipes = pancakes_and_pasta();

        let easy = DifficultyFilter::new(1);
        assert!(easy.matches(&recipes[0]));
        assert!(!easy.matches(&recipes[1]));

        let medium = DifficultyFilter::new(2);
        assert!(recipes.iter().all(|r| !medium.matches(r)));
    }
}
