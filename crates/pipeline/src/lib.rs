//! Filtering, pagination and facet derivation for recipe collections.
//!
//! This crate provides:
//! - Filter trait and one filter per criterion
//! - FilterPipeline for composing the active filters
//! - FilterState and its query-param encoding for the recipe list endpoint
//! - Pagination and facet helpers used by the recipe views
//!
//! ## Architecture
//! A view recomputes its page in three stages:
//! 1. `apply_filters` keeps the recipes matching every active criterion
//! 2. `paginate` slices the current page out of the filtered list
//! 3. `derive_facets` lists the options for the filter controls
//!
//! Everything here is synchronous and side-effect free apart from `debug`
//! logging.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{apply_filters, derive_facets, paginate, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .with_difficulty(1)
//!     .with_language("polish");
//!
//! let filtered = apply_filters(index.recipes(), &criteria);
//! let first_page = paginate(&filtered, 1, 12);
//! let facets = derive_facets(index.recipes(), criteria.active_language());
//! ```

pub mod error;
pub mod traits;
pub mod filter_state;
pub mod filters;
pub mod filter_pipeline;
pub mod pagination;
pub mod facets;
pub mod engine;

// Re-export main types
pub use engine::{apply_filters, filter_view, FilteredView};
pub use error::{FilterParseError, Result};
pub use facets::{derive_facets, Facets};
pub use filter_pipeline::FilterPipeline;
pub use filter_state::{FilterCriteria, FilterState, RangeFilter, DEFAULT_PAGE_SIZE, OPEN_RANGE_MAX};
pub use pagination::{paginate, total_pages};
pub use traits::Filter;
