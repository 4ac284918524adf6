//! Integration tests for the recipe filter engine.
//!
//! These tests check the behaviour the recipe views rely on: filtering,
//! pagination and facets working together over a realistic collection.

use data_loader::{Ingredient, Recipe};
use pipeline::{
    apply_filters, derive_facets, filter_view, paginate, total_pages, FilterCriteria,
    FilterPipeline, FilterState,
};
use std::collections::HashSet;

#[allow(clippy::too_many_arguments)]
fn make_recipe(
    id: u32,
    name: &str,
    category: &str,
    difficulty: u8,
    prepare_time: u32,
    servings: u32,
    language: &str,
    ingredients: &[&str],
) -> Recipe {
    let mut recipe = Recipe::new(id, name);
    recipe.category = category.to_string();
    recipe.difficulty = difficulty;
    recipe.prepare_time = prepare_time;
    recipe.servings = servings;
    recipe.language = Some(language.to_string());
    recipe.ingredients = ingredients.iter().map(|&i| Ingredient::named(i)).collect();
    recipe
}

fn create_test_collection() -> Vec<Recipe> {
    vec![
        make_recipe(1, "Pancakes", "BREAKFAST", 1, 15, 2, "english", &["Flour", "Milk", "Egg"]),
        make_recipe(2, "Pasta", "LUNCH", 3, 30, 4, "polish", &["Pasta", "Tomato"]),
        make_recipe(3, "Pierogi", "DINNER", 3, 90, 6, "polish", &["Flour", "Potato", "Onion"]),
        make_recipe(4, "Omelette", "BREAKFAST", 1, 10, 1, "English", &["Egg", "Butter"]),
        make_recipe(5, "Tomato Soup", "SOUP", 2, 40, 4, "english", &["Tomato", "Cream"]),
        make_recipe(6, "Zurek", "SOUP", 2, 60, 4, " polish ", &["Sourdough starter", "Egg"]),
        make_recipe(7, "Apple Pie", "DESSERT", 2, 75, 8, "english", &["Apple", "Flour", "Butter"]),
        make_recipe(8, "Sandwich", "LUNCH", 1, 5, 1, "english", &["Bread", "Butter"]),
    ]
}

fn sample_criteria() -> Vec<FilterCriteria> {
    vec![
        FilterCriteria::new(),
        FilterCriteria::new().with_difficulty(1),
        FilterCriteria::new().with_prep_time(None, Some(30)),
        FilterCriteria::new().with_servings(Some(4), None),
        FilterCriteria::new().with_category("SOUP"),
        FilterCriteria::new().with_language("ENGLISH"),
        FilterCriteria::new().with_query("p"),
        FilterCriteria::new().with_ingredient("flour").with_ingredient("butter"),
        FilterCriteria::new()
            .with_difficulty(2)
            .with_language("polish")
            .with_ingredient("egg"),
    ]
}

fn ids(recipes: &[&Recipe]) -> Vec<u32> {
    recipes.iter().map(|r| r.id).collect()
}

#[test]
fn test_filtering_is_idempotent() {
    let recipes = create_test_collection();

    for criteria in sample_criteria() {
        let once = apply_filters(&recipes, &criteria);
        let twice = FilterPipeline::from_criteria(&criteria).apply(once.clone());
        assert_eq!(ids(&once), ids(&twice), "criteria: {criteria:?}");
    }
}

#[test]
fn test_no_active_filter_returns_source() {
    let recipes = create_test_collection();

    let blank = FilterCriteria {
        difficulty: Some(0),
        category: Some("  ".to_string()),
        query: Some(String::new()),
        ingredients: vec![String::new()],
        ..FilterCriteria::default()
    };
    for criteria in [FilterCriteria::new(), blank] {
        let filtered = apply_filters(&recipes, &criteria);
        assert_eq!(filtered.len(), recipes.len());
        assert!(filtered.iter().zip(&recipes).all(|(a, b)| std::ptr::eq(*a, b)));
    }
}

#[test]
fn test_filters_compose_as_intersection() {
    let recipes = create_test_collection();

    let combined = FilterCriteria::new()
        .with_difficulty(1)
        .with_language("english")
        .with_ingredient("butter");
    let singles = [
        FilterCriteria::new().with_difficulty(1),
        FilterCriteria::new().with_language("english"),
        FilterCriteria::new().with_ingredient("butter"),
    ];

    let expected: Vec<u32> = recipes
        .iter()
        .filter(|recipe| {
            singles.iter().all(|criteria| {
                apply_filters(&recipes, criteria)
                    .iter()
                    .any(|kept| std::ptr::eq(*kept, *recipe))
            })
        })
        .map(|r| r.id)
        .collect();

    assert_eq!(ids(&apply_filters(&recipes, &combined)), expected);
    assert_eq!(expected, vec![4, 8]);
}

#[test]
fn test_pages_reconstruct_filtered_list() {
    let recipes = create_test_collection();

    for criteria in sample_criteria() {
        let filtered = apply_filters(&recipes, &criteria);
        for page_size in 1..=5 {
            let pages = total_pages(filtered.len(), page_size);
            let rebuilt: Vec<&Recipe> = (1..=pages)
                .flat_map(|page| paginate(&filtered, page, page_size).iter().copied())
                .collect();
            assert_eq!(ids(&rebuilt), ids(&filtered));
            assert!(paginate(&filtered, pages + 1, page_size).is_empty());
        }
    }
}

#[test]
fn test_facets_describe_source() {
    let recipes = create_test_collection();
    let facets = derive_facets(&recipes, None);

    let unique: HashSet<_> = facets.categories.iter().collect();
    assert_eq!(unique.len(), facets.categories.len());
    for category in &facets.categories {
        assert!(recipes.iter().any(|r| &r.category == category));
    }
    assert_eq!(
        facets.categories,
        vec!["BREAKFAST", "DESSERT", "DINNER", "LUNCH", "SOUP"]
    );

    let mut sorted = facets.ingredients.clone();
    sorted.sort();
    assert_eq!(facets.ingredients, sorted);
}

#[test]
fn test_language_narrows_ingredient_facet_and_results() {
    let recipes = create_test_collection();

    let facets = derive_facets(&recipes, Some("Polish"));
    assert_eq!(
        facets.ingredients,
        vec!["Egg", "Flour", "Onion", "Pasta", "Potato", "Sourdough starter", "Tomato"]
    );

    let filtered = apply_filters(&recipes, &FilterCriteria::new().with_language("Polish"));
    assert_eq!(ids(&filtered), vec![2, 3, 6]);
}

#[test]
fn test_twenty_five_recipes_paginate_into_three_pages() {
    let recipes: Vec<Recipe> = (1..=25)
        .map(|id| make_recipe(id, "Bread", "BAKING", 2, 120, 10, "english", &["Flour"]))
        .collect();

    let state = FilterState::default().with_page(3);
    let view = filter_view(&recipes, &state);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.page_items().len(), 1);
    assert!(paginate(&view.filtered, 4, 12).is_empty());
}

#[test]
fn test_empty_source() {
    let recipes: Vec<Recipe> = Vec::new();

    assert!(derive_facets(&recipes, None).is_empty());
    for criteria in sample_criteria() {
        assert!(apply_filters(&recipes, &criteria).is_empty());
    }
    let view = filter_view(&recipes, &FilterState::default());
    assert_eq!(view.total_pages, 1);
    assert!(view.page_items().is_empty());
}
