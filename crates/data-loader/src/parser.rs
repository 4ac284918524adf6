//! Parser for recipe API documents.
//!
//! Two document kinds are read:
//! - recipe collections: either a bare JSON array of recipes (the search
//!   endpoint) or a `RecipesResponse` envelope (the paged list endpoint)
//! - profile documents: `{ "userRecipes": [...], "favourites": [...] }`

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// A collection document in either of its two accepted shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionDocument {
    Bare(Vec<Recipe>),
    Paged(RecipesResponse),
}

/// Read a file into a string, mapping a missing file to `FileNotFound`
fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse a recipe collection from JSON text.
///
/// `file` is only used to label errors.
pub fn parse_recipe_collection_str(json: &str, file: &str) -> Result<Vec<Recipe>> {
    let document: CollectionDocument =
        serde_json::from_str(json).map_err(|source| DataLoadError::JsonError {
            file: file.to_string(),
            source,
        })?;

    Ok(match document {
        CollectionDocument::Bare(recipes) => recipes,
        CollectionDocument::Paged(response) => response.content,
    })
}

/// Parse a recipe collection file (array or paged envelope)
pub fn parse_recipe_collection(path: &Path) -> Result<Vec<Recipe>> {
    let json = read_document(path)?;
    parse_recipe_collection_str(&json, &file_label(path))
}

/// Parse a profile document from JSON text
pub fn parse_profile_str(json: &str, file: &str) -> Result<ProfileRecipes> {
    serde_json::from_str(json).map_err(|source| DataLoadError::JsonError {
        file: file.to_string(),
        source,
    })
}

/// Parse the profile file holding the user's recipes and favourites
pub fn parse_profile(path: &Path) -> Result<ProfileRecipes> {
    let json = read_document(path)?;
    parse_profile_str(&json, &file_label(path))
}
