//! Facet derivation: the option lists offered by the filter controls.
//!
//! Facets are computed from the active recipe source, not from the filtered
//! result, so narrowing one filter never hides the options of another. The
//! exception is the ingredient facet, which follows the selected language.

use crate::filters::normalize_language;
use data_loader::Recipe;
use std::collections::BTreeSet;

/// Distinct values present in a recipe source, each sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub ingredients: Vec<String>,
}

impl Facets {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.languages.is_empty() && self.ingredients.is_empty()
    }
}

/// Derive the category, language and ingredient facets of `source`.
///
/// ## Algorithm
/// Single pass over the source:
/// 1. Collect non-blank categories and languages
/// 2. If `language_filter` is non-blank, only recipes in that language
///    (trimmed, case-insensitive) contribute ingredient names
/// 3. Collect non-blank ingredient names
///
/// BTreeSets give deduplication and lexicographic order. Values are kept as
/// written; only blankness is checked.
pub fn derive_facets<'a, I>(source: I, language_filter: Option<&str>) -> Facets
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let language_filter = language_filter
        .filter(|l| !l.trim().is_empty())
        .map(normalize_language);

    let mut categories = BTreeSet::new();
    let mut languages = BTreeSet::new();
    let mut ingredients = BTreeSet::new();

    for recipe in source {
        if !recipe.category.trim().is_empty() {
            categories.insert(recipe.category.as_str());
        }

        let language = recipe.language.as_deref().filter(|l| !l.trim().is_empty());
        if let Some(language) = language {
            languages.insert(language);
        }

        let in_language = match &language_filter {
            Some(wanted) => language.is_some_and(|l| normalize_language(l) == *wanted),
            None => true,
        };
        if in_language {
            ingredients.extend(recipe.ingredient_names().filter(|name| !name.trim().is_empty()));
        }
    }

    Facets {
        categories: categories.into_iter().map(str::to_string).collect(),
        languages: languages.into_iter().map(str::to_string).collect(),
        ingredients: ingredients.into_iter().map(str::to_string).collect(),
    }
}
