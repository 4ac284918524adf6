//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independent predicates to be applied to recipe collections.

use data_loader::Recipe;

/// A single recipe predicate.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters only decide membership; the pipeline owns the collection, so a
///   filter can never reorder or mutate recipes
/// - Filters are independent, so the order they run in does not change the
///   result
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `recipe` passes this filter
    fn matches(&self, recipe: &Recipe) -> bool;
}
