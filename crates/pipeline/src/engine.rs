//! Entry points used by the recipe views.
//!
//! All functions are pure: they borrow the source, never mutate it, and give
//! the same output for the same input.

use crate::filter_pipeline::FilterPipeline;
use crate::filter_state::{FilterCriteria, FilterState};
use crate::pagination::{paginate, total_pages};
use data_loader::Recipe;
use std::borrow::Borrow;

/// Recipes of `source` matching every active criterion, in source order.
///
/// With no active criterion the whole source is returned.
pub fn apply_filters<'a>(source: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    FilterPipeline::from_criteria(criteria).apply(source.iter().collect())
}

/// A filtered list together with its pagination cursor
#[derive(Debug, Clone)]
pub struct FilteredView<R> {
    pub filtered: Vec<R>,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
}

impl<R: Borrow<Recipe>> FilteredView<R> {
    /// Filter `recipes` and record the cursor from `state`
    pub fn build(recipes: Vec<R>, state: &FilterState) -> Self {
        let filtered = FilterPipeline::from_criteria(&state.criteria).apply(recipes);
        let total_pages = total_pages(filtered.len(), state.page_size);
        Self {
            filtered,
            total_pages,
            current_page: state.current_page,
            page_size: state.page_size,
        }
    }

    /// Items on the current page
    pub fn page_items(&self) -> &[R] {
        paginate(&self.filtered, self.current_page, self.page_size)
    }

    /// Move the cursor without re-filtering
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Filter `source` with `state.criteria` and paginate at `state.current_page`
pub fn filter_view<'a>(source: &'a [Recipe], state: &FilterState) -> FilteredView<&'a Recipe> {
    FilteredView::build(source.iter().collect(), state)
}
