//! Recipe sources: which collection a view browses.

use anyhow::{bail, Result};
use data_loader::{Recipe, RecipeIndex};
use std::fmt;
use std::str::FromStr;

/// The collection a recipe view is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecipeSource {
    /// Recipes the signed-in user authored
    #[default]
    UserRecipes,
    /// Recipes the user marked as favourite
    Favourites,
    /// Public recipes of the main collection
    Public,
}

impl RecipeSource {
    pub const ALL: [RecipeSource; 3] = [
        RecipeSource::UserRecipes,
        RecipeSource::Favourites,
        RecipeSource::Public,
    ];

    /// Identifier used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeSource::UserRecipes => "user",
            RecipeSource::Favourites => "favourites",
            RecipeSource::Public => "public",
        }
    }

    /// Heading shown above the recipe list
    pub fn label(&self) -> &'static str {
        match self {
            RecipeSource::UserRecipes => "My recipes",
            RecipeSource::Favourites => "Favourite recipes",
            RecipeSource::Public => "Public recipes",
        }
    }
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" | "mine" | "my" => Ok(RecipeSource::UserRecipes),
            "favourites" | "favorites" | "fav" => Ok(RecipeSource::Favourites),
            "public" | "all" => Ok(RecipeSource::Public),
            other => bail!(
                "Unknown recipe source '{}' (expected user, favourites or public)",
                other
            ),
        }
    }
}

/// The recipes of `source`, in document order
pub fn scope(index: &RecipeIndex, source: RecipeSource) -> Vec<Recipe> {
    match source {
        RecipeSource::UserRecipes => index.user_recipes().to_vec(),
        RecipeSource::Favourites => index.favourites().to_vec(),
        RecipeSource::Public => index
            .recipes()
            .iter()
            .filter(|recipe| recipe.is_public)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_index() -> RecipeIndex {
        let mut index = RecipeIndex::new();

        let mut public = Recipe::new(1, "Public Soup");
        public.is_public = true;
        index.insert_recipe(public);
        index.insert_recipe(Recipe::new(2, "Private Stew"));
        index.insert_user_recipe(Recipe::new(3, "Mine"));
        index.insert_favourite(Recipe::new(4, "Liked"));
        index.insert_favourite(Recipe::new(5, "Also Liked"));

        index
    }

    #[test]
    fn test_scope() {
        let index = create_test_index();

        let names = |source| -> Vec<String> {
            scope(&index, source)
                .into_iter()
                .map(|r| r.recipe_name)
                .collect()
        };
        assert_eq!(names(RecipeSource::Public), vec!["Public Soup"]);
        assert_eq!(names(RecipeSource::UserRecipes), vec!["Mine"]);
        assert_eq!(names(RecipeSource::Favourites), vec!["Liked", "Also Liked"]);
    }

    #[test]
    fn test_parse_source() {
        for source in RecipeSource::ALL {
            assert_eq!(source.as_str().parse::<RecipeSource>().unwrap(), source);
        }
        assert_eq!(
            " Favorites".parse::<RecipeSource>().unwrap(),
            RecipeSource::Favourites
        );
        assert!("everything".parse::<RecipeSource>().is_err());
    }
}
