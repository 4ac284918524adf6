//! Filter criteria and the pagination cursor.
//!
//! Every criterion is optional. An unset or blank criterion imposes no
//! constraint, so `FilterCriteria::default()` lets every recipe through.

use crate::error::{FilterParseError, Result};
use std::str::FromStr;

/// Page size used by the recipe views
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Upper bound written to query params when a range has no `to`
pub const OPEN_RANGE_MAX: u32 = 99999;

/// Inclusive range over a non-negative integer field.
///
/// A missing `from` means 0 and a missing `to` means unbounded. The range is
/// inactive only when both bounds are missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeFilter {
    pub from: Option<u32>,
    pub to: Option<u32>,
}

impl RangeFilter {
    pub fn new(from: Option<u32>, to: Option<u32>) -> Self {
        Self { from, to }
    }

    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Whether `value` lies within the range (inclusive on both ends)
    pub fn contains(&self, value: u32) -> bool {
        let from = self.from.unwrap_or(0);
        let to = self.to.unwrap_or(u32::MAX);
        from <= value && value <= to
    }

    /// `<from>-<to>` as the list endpoint expects it
    pub fn to_param(&self) -> String {
        format!(
            "{}-{}",
            self.from.unwrap_or(0),
            self.to.unwrap_or(OPEN_RANGE_MAX)
        )
    }
}

impl FromStr for RangeFilter {
    type Err = FilterParseError;

    /// Parse `<from>-<to>`, where either side may be left empty.
    ///
    /// Examples: `"10-30"`, `"10-"`, `"-30"`.
    fn from_str(s: &str) -> Result<Self> {
        let (from, to) = s
            .split_once('-')
            .ok_or_else(|| FilterParseError::MissingSeparator {
                input: s.to_string(),
            })?;

        let parse_bound = |bound: &str| -> Result<Option<u32>> {
            let bound = bound.trim();
            if bound.is_empty() {
                return Ok(None);
            }
            bound
                .parse()
                .map(Some)
                .map_err(|_| FilterParseError::InvalidBound {
                    input: s.to_string(),
                    value: bound.to_string(),
                })
        };

        Ok(Self {
            from: parse_bound(from)?,
            to: parse_bound(to)?,
        })
    }
}

/// The user's filter selections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Exact difficulty; 0 counts as unset
    pub difficulty: Option<u8>,
    /// Preparation time in minutes
    pub prep_time: RangeFilter,
    pub servings: RangeFilter,
    /// Exact category
    pub category: Option<String>,
    /// Language, compared trimmed and case-insensitively
    pub language: Option<String>,
    /// Case-insensitive substring of the recipe name
    pub query: Option<String>,
    /// Every entry must match some ingredient name of the recipe
    pub ingredients: Vec<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_prep_time(mut self, from: Option<u32>, to: Option<u32>) -> Self {
        self.prep_time = RangeFilter::new(from, to);
        self
    }

    pub fn with_servings(mut self, from: Option<u32>, to: Option<u32>) -> Self {
        self.servings = RangeFilter::new(from, to);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    pub fn active_difficulty(&self) -> Option<u8> {
        self.difficulty.filter(|&d| d != 0)
    }

    pub fn active_category(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    pub fn active_language(&self) -> Option<&str> {
        non_blank(&self.language)
    }

    pub fn active_query(&self) -> Option<&str> {
        non_blank(&self.query)
    }

    /// Non-blank ingredient selections
    pub fn active_ingredients(&self) -> Vec<&str> {
        self.ingredients
            .iter()
            .map(String::as_str)
            .filter(|i| !i.trim().is_empty())
            .collect()
    }

    /// True when no criterion would constrain the result
    pub fn is_empty(&self) -> bool {
        self.active_difficulty().is_none()
            && !self.prep_time.is_active()
            && !self.servings.is_active()
            && self.active_category().is_none()
            && self.active_language().is_none()
            && self.active_query().is_none()
            && self.active_ingredients().is_empty()
    }
}

/// Filter criteria plus the pagination cursor of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub criteria: FilterCriteria,
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    /// No criteria, first page
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            current_page: 1,
            page_size,
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Query params for the recipe list endpoint, inactive criteria omitted
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let criteria = &self.criteria;
        let mut params = vec![
            ("page".to_string(), self.current_page.to_string()),
            ("size".to_string(), self.page_size.to_string()),
        ];

        if let Some(difficulty) = criteria.active_difficulty() {
            params.push(("difficulty".to_string(), difficulty.to_string()));
        }
        if criteria.prep_time.is_active() {
            params.push(("prepareTime".to_string(), criteria.prep_time.to_param()));
        }
        if criteria.servings.is_active() {
            params.push(("servings".to_string(), criteria.servings.to_param()));
        }
        if let Some(category) = criteria.active_category() {
            params.push(("category".to_string(), category.to_string()));
        }
        if let Some(language) = criteria.active_language() {
            params.push(("language".to_string(), language.to_string()));
        }
        if let Some(query) = criteria.active_query() {
            params.push(("query".to_string(), query.to_string()));
        }
        for ingredient in criteria.active_ingredients() {
            params.push(("ingredients".to_string(), ingredient.to_string()));
        }

        params
    }

    /// URL-encoded form of `to_query_params`
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_params())
            .finish()
    }
}
