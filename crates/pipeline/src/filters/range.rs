//! Inclusive range filters over preparation time and servings.

use crate::filter_state::RangeFilter;
use crate::traits::Filter;
use data_loader::Recipe;

/// Keeps recipes whose preparation time (minutes) lies within the range.
pub struct PrepareTimeFilter {
    range: RangeFilter,
}

impl PrepareTimeFilter {
    pub fn new(range: RangeFilter) -> Self {
        Self { range }
    }
}

impl Filter for PrepareTimeFilter {
    fn name(&self) -> &str {
        "PrepareTimeFilter"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        self.range.contains(recipe.prepare_time)
    }
}

/// Keeps recipes whose servings count lies within the range.
pub struct ServingsFilter {
    range: RangeFilter,
}

impl ServingsFilter {
    pub fn new(range: RangeFilter) -> Self {
        Self { range }
    }
}

impl Filter for ServingsFilter {
    fn name(&self) -> &str {
        "ServingsFilter"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        self.range.contains(recipe.servings)
    }
}
