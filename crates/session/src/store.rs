//! In-memory store for the last-applied filters of a session.

use pipeline::{FilterCriteria, FilterState, DEFAULT_PAGE_SIZE};
use tracing::debug;

/// Holds the session's current `FilterState`.
///
/// Changing the criteria always moves the cursor back to the first page, so a
/// narrower result never leaves the view on a page that no longer exists.
#[derive(Debug, Clone)]
pub struct FilterStore {
    state: FilterState,
}

impl FilterStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: FilterState::new(page_size),
        }
    }

    pub fn current(&self) -> &FilterState {
        &self.state
    }

    /// Replace the criteria and go back to page 1
    pub fn update_criteria(&mut self, criteria: FilterCriteria) {
        debug!("Updating filter criteria: {:?}", criteria);
        self.state.criteria = criteria;
        self.state.current_page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.current_page = page;
    }

    /// Clear every criterion and go back to page 1, keeping the page size
    pub fn reset(&mut self) {
        self.state = FilterState::new(self.state.page_size);
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
