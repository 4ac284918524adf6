//! # Session Crate
//!
//! This crate holds the per-session state of the recipe views on top of the
//! filter engine in `pipeline`.
//!
//! ## Components
//!
//! - **source**: `RecipeSource` and scoping the index to one collection
//! - **store**: `FilterStore`, the last-applied filters of the session
//! - **browser**: `RecipeBrowser`, filters + facets + pagination for one view
//! - **debounce**: `SubmitGuard` for coalescing rapid filter submissions
//!
//! ## Example Usage
//!
//! ```ignore
//! use session::{RecipeBrowser, RecipeSource};
//! use pipeline::FilterCriteria;
//! use std::path::Path;
//!
//! let mut browser = RecipeBrowser::open(Path::new("data"), RecipeSource::Public, 12)?;
//! browser.apply_criteria(FilterCriteria::new().with_language("polish"));
//!
//! for recipe in browser.page_items() {
//!     println!("{}", recipe.recipe_name);
//! }
//! ```

pub mod source;
pub mod store;
pub mod browser;
pub mod debounce;

pub use browser::RecipeBrowser;
pub use debounce::{SubmitGuard, DEFAULT_SUBMIT_WINDOW};
pub use source::{scope, RecipeSource};
pub use store::FilterStore;
