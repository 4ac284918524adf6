//! Integration tests for browsing recipe documents on disk.

use pipeline::FilterCriteria;
use session::{RecipeBrowser, RecipeSource, SubmitGuard};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

const RECIPES: &str = r#"{
    "content": [
        {"id": 1, "recipeName": "Pancakes", "category": "BREAKFAST", "difficulty": 1,
         "prepareTime": 15, "servings": 2, "isPublic": true, "language": "english",
         "ingredients": [{"ingredientName": "Flour"}, {"ingredientName": "Milk"}]},
        {"id": 2, "recipeName": "Pasta", "category": "LUNCH", "difficulty": 3,
         "prepareTime": 30, "servings": 4, "isPublic": true, "language": "polish",
         "ingredients": [{"ingredientName": "Pasta"}, {"ingredientName": "Tomato"}]},
        {"id": 3, "recipeName": "Secret Sauce", "category": "DINNER", "difficulty": 2,
         "prepareTime": 20, "servings": 4, "isPublic": false, "language": "english"}
    ],
    "totalPages": 1
}"#;

const PROFILE: &str = r#"{
    "userRecipes": [{"id": 3, "recipeName": "Secret Sauce", "difficulty": 2}],
    "favourites": [{"id": 2, "recipeName": "Pasta", "difficulty": 3, "language": "polish"}]
}"#;

fn write_documents(dir: &Path) {
    fs::write(dir.join("recipes.json"), RECIPES).unwrap();
    fs::write(dir.join("profile.json"), PROFILE).unwrap();
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_open_and_filter_public_recipes() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write_documents(dir.path());

    let mut browser = RecipeBrowser::open(dir.path(), RecipeSource::Public, 12).unwrap();
    assert_eq!(browser.source_len(), 2);
    assert_eq!(browser.facets().categories, vec!["BREAKFAST", "LUNCH"]);

    browser.apply_criteria(FilterCriteria::new().with_prep_time(Some(1), Some(15)));
    let names: Vec<_> = browser
        .page_items()
        .iter()
        .map(|r| r.recipe_name.as_str())
        .collect();
    assert_eq!(names, vec!["Pancakes"]);
}

#[test]
fn test_language_and_ingredient_from_one_submission() {
    let dir = tempfile::tempdir().unwrap();
    write_documents(dir.path());
    let mut browser = RecipeBrowser::open(dir.path(), RecipeSource::Public, 12).unwrap();

    browser.apply_criteria(
        FilterCriteria::new()
            .with_language("polish")
            .with_ingredient("flour"),
    );
    assert_eq!(browser.filtered_len(), 0);

    browser.apply_criteria(
        FilterCriteria::new()
            .with_language("english")
            .with_ingredient("milk"),
    );
    assert_eq!(browser.filtered_len(), 1);
    assert_eq!(browser.page_items()[0].recipe_name, "Pancakes");
}

#[test]
fn test_switch_between_sources() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write_documents(dir.path());

    let mut browser = RecipeBrowser::open(dir.path(), RecipeSource::UserRecipes, 12).unwrap();
    assert_eq!(browser.filtered_len(), 1);

    browser.switch_source(RecipeSource::Favourites);
    assert_eq!(browser.page_items()[0].recipe_name, "Pasta");
    assert_eq!(browser.index().get_recipe_stats(2).unwrap().rating_count, 0);
}

#[test]
fn test_open_missing_directory_fails_with_context() {
    let err = RecipeBrowser::open(Path::new("no/such/dir"), RecipeSource::Public, 12)
        .err()
        .unwrap();
    assert!(err.to_string().contains("Failed to load recipes"));
}

#[test]
fn test_guarded_submissions() {
    let dir = tempfile::tempdir().unwrap();
    write_documents(dir.path());
    let mut browser = RecipeBrowser::open(dir.path(), RecipeSource::Public, 12).unwrap();
    let mut guard = SubmitGuard::new(Duration::from_millis(300));

    let start = Instant::now();
    let typed = [("p", 0), ("pa", 50), ("pas", 120), ("past", 400)];
    let mut applied = Vec::new();
    for (query, offset) in typed {
        if guard.try_acquire_at(start + Duration::from_millis(offset)) {
            browser.apply_criteria(FilterCriteria::new().with_query(query));
            applied.push(query);
        }
    }

    assert_eq!(applied, vec!["p", "past"]);
    assert_eq!(browser.filtered_len(), 1);
}
