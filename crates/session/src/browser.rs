//! RecipeBrowser - the state behind one recipe list view
//!
//! The browser owns the recipes of the active source and recomputes the
//! filtered view whenever the filters change. Filtering and pagination are
//! delegated to the `pipeline` crate; this module only decides *when* to
//! recompute and what to reset.
//!
//! ## Lifecycle
//! 1. `new` scopes the index to a source, with default filters
//! 2. `apply_criteria` re-filters and returns to page 1
//! 3. `go_to_page` moves the cursor without re-filtering
//! 4. `switch_source` starts over on another collection

use crate::source::{scope, RecipeSource};
use crate::store::FilterStore;
use anyhow::{Context, Result};
use data_loader::{Recipe, RecipeIndex};
use pipeline::filters::normalize_language;
use pipeline::{derive_facets, FilterCriteria, FilterState, FilteredView, Facets};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Browses one recipe source with filters and pagination
pub struct RecipeBrowser {
    /// Shared reference to the loaded recipes (read-only)
    index: Arc<RecipeIndex>,
    source: RecipeSource,
    /// Recipes of `source`; the view holds clones of these `Arc`s
    recipes: Vec<Arc<Recipe>>,
    store: FilterStore,
    facets: Facets,
    view: FilteredView<Arc<Recipe>>,
}

impl RecipeBrowser {
    /// Create a browser over `source` with default filters
    pub fn new(index: Arc<RecipeIndex>, source: RecipeSource, page_size: usize) -> Self {
        let store = FilterStore::new(page_size);
        let view = FilteredView::build(Vec::new(), store.current());
        let mut browser = Self {
            index,
            source,
            recipes: Vec::new(),
            store,
            facets: Facets::default(),
            view,
        };
        browser.load_source(source);
        browser
    }

    /// Load the recipe documents in `data_dir` and browse `source`
    pub fn open(data_dir: &Path, source: RecipeSource, page_size: usize) -> Result<Self> {
        let index = RecipeIndex::load_from_files(data_dir)
            .with_context(|| format!("Failed to load recipes from {}", data_dir.display()))?;
        Ok(Self::new(Arc::new(index), source, page_size))
    }

    /// Browse another source, starting from default filters on page 1
    pub fn switch_source(&mut self, source: RecipeSource) {
        self.load_source(source);
    }

    /// Apply new filter criteria and return to page 1.
    ///
    /// When the language changes, ingredients carried over from the previous
    /// selection are dropped and the ingredient options are recomputed for
    /// the new language. Ingredients first selected in this call are kept.
    pub fn apply_criteria(&mut self, mut criteria: FilterCriteria) {
        let previous = self.language_key();
        let next = criteria.active_language().map(normalize_language);

        if previous != next {
            debug!("Language changed from {:?} to {:?}", previous, next);
            let stale = &self.store.current().criteria.ingredients;
            criteria.ingredients.retain(|ingredient| !stale.contains(ingredient));
            self.facets.ingredients =
                derive_facets(self.recipes.iter().map(Arc::as_ref), criteria.active_language())
                    .ingredients;
        }

        self.store.update_criteria(criteria);
        self.refresh_view();
    }

    /// Clear every filter and return to page 1
    pub fn reset_filters(&mut self) {
        self.store.reset();
        self.refresh_facets();
        self.refresh_view();
    }

    /// Move to `page` without re-filtering
    pub fn go_to_page(&mut self, page: usize) {
        self.store.set_page(page);
        self.view.set_page(page);
    }

    /// Recipes on the current page
    pub fn page_items(&self) -> &[Arc<Recipe>] {
        self.view.page_items()
    }

    pub fn total_pages(&self) -> usize {
        self.view.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.view.current_page
    }

    /// Number of recipes passing the current filters
    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn state(&self) -> &FilterState {
        self.store.current()
    }

    pub fn source(&self) -> RecipeSource {
        self.source
    }

    pub fn index(&self) -> &RecipeIndex {
        &self.index
    }

    /// Number of recipes in the active source before filtering
    pub fn source_len(&self) -> usize {
        self.recipes.len()
    }

    fn load_source(&mut self, source: RecipeSource) {
        self.source = source;
        self.recipes = scope(&self.index, source).into_iter().map(Arc::new).collect();
        info!("Browsing {} ({} recipes)", source.label(), self.recipes.len());

        self.store.reset();
        self.refresh_facets();
        self.refresh_view();
    }

    fn language_key(&self) -> Option<String> {
        self.store
            .current()
            .criteria
            .active_language()
            .map(normalize_language)
    }

    fn refresh_facets(&mut self) {
        let language = self.store.current().criteria.active_language();
        self.facets = derive_facets(self.recipes.iter().map(Arc::as_ref), language);
    }

    fn refresh_view(&mut self) {
        self.view = FilteredView::build(self.recipes.clone(), self.store.current());
        debug!(
            "Filtered {} of {} recipes into {} pages",
            self.view.len(),
            self.recipes.len(),
            self.view.total_pages
        );
    }
}
