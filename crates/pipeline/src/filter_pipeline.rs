//! The FilterPipeline chains filters together.
//!
//! A pipeline built from `FilterCriteria` holds exactly the filters whose
//! criterion is active, so an empty criteria set yields an empty pipeline that
//! passes every recipe through unchanged.

use crate::filter_state::FilterCriteria;
use crate::filters::*;
use crate::traits::Filter;
use data_loader::Recipe;
use std::borrow::Borrow;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(DifficultyFilter::new(1))
///     .add_filter(LanguageFilter::new("polish"));
///
/// let filtered = pipeline.apply(recipes.iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a set of criteria, skipping inactive ones.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();

        if let Some(difficulty) = criteria.active_difficulty() {
            pipeline = pipeline.add_filter(DifficultyFilter::new(difficulty));
        }
        if criteria.prep_time.is_active() {
            pipeline = pipeline.add_filter(PrepareTimeFilter::new(criteria.prep_time));
        }
        if criteria.servings.is_active() {
            pipeline = pipeline.add_filter(ServingsFilter::new(criteria.servings));
        }
        if let Some(category) = criteria.active_category() {
            pipeline = pipeline.add_filter(CategoryFilter::new(category));
        }
        if let Some(language) = criteria.active_language() {
            pipeline = pipeline.add_filter(LanguageFilter::new(language));
        }
        if let Some(query) = criteria.active_query() {
            pipeline = pipeline.add_filter(NameQueryFilter::new(query));
        }
        let ingredients = criteria.active_ingredients();
        if !ingredients.is_empty() {
            pipeline = pipeline.add_filter(IngredientsFilter::new(ingredients));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether a single recipe passes every filter
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.filters.iter().all(|filter| filter.matches(recipe))
    }

    /// Apply all filters in sequence to the recipes.
    ///
    /// ## Algorithm
    /// 1. Start with the input recipes
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Retain the recipes the filter matches
    ///    c. Log output count
    /// 3. Return the survivors in their original order
    ///
    /// Works on anything that borrows as a `Recipe` (`&Recipe`,
    /// `Arc<Recipe>`, ...) so callers decide how shallow the copy is.
    pub fn apply<R: Borrow<Recipe>>(&self, recipes: Vec<R>) -> Vec<R> {
        let mut current = recipes;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|recipe| filter.matches(recipe.borrow()));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::fixtures::pancakes_and_pasta;

    #[test]
    fn test_empty_pipeline() {
        let recipes = pancakes_and_pasta();
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(recipes.iter().collect());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let recipes = pancakes_and_pasta();
        let pipeline = FilterPipeline::new().add_filter(DifficultyFilter::new(3));

        let filtered = pipeline.apply(recipes.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].recipe_name, "Pasta");
    }

    #[test]
    fn test_from_criteria_skips_inactive() {
        assert!(FilterPipeline::from_criteria(&FilterCriteria::default()).is_empty());

        let criteria = FilterCriteria::new()
            .with_difficulty(1)
            .with_category("")
            .with_language("english")
            .with_ingredient("  ");
        assert_eq!(FilterPipeline::from_criteria(&criteria).len(), 2);

        let everything = FilterCriteria::new()
            .with_difficulty(1)
            .with_prep_time(Some(0), None)
            .with_servings(None, Some(4))
            .with_category("BREAKFAST")
            .with_language("english")
            .with_query("pan")
            .with_ingredient("flour");
        assert_eq!(FilterPipeline::from_criteria(&everything).len(), 7);
    }

    #[test]
    fn test_apply_owned_recipes() {
        let pipeline = FilterPipeline::new().add_filter(LanguageFilter::new("english"));

        let filtered = pipeline.apply(pancakes_and_pasta());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }
}
