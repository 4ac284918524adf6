//! Language match, trimmed and case-insensitive.

use crate::traits::Filter;
use data_loader::Recipe;

/// Canonical form used whenever two language tags are compared
pub fn normalize_language(language: &str) -> String {
    language.trim().to_lowercase()
}

/// Keeps recipes written in the selected language.
///
/// Recipes without a language tag never match.
pub struct LanguageFilter {
    language: String,
}

impl LanguageFilter {
    pub fn new(language: &str) -> Self {
        Self {
            language: normalize_language(language),
        }
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        recipe
            .language
            .as_deref()
            .is_some_and(|language| normalize_language(language) == self.language)
    }
}
