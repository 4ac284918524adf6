use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::{Ingredient, Recipe, RecipeId, RecipeIndex};
use pipeline::{
    derive_facets, filter_view, FilterCriteria, FilterState, RangeFilter, DEFAULT_PAGE_SIZE,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use session::{RecipeBrowser, RecipeSource};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Cibaria - recipe browser
#[derive(Parser)]
#[command(name = "cibaria")]
#[command(about = "Filter, paginate and inspect recipe collections", long_about = None)]
struct Cli {
    /// Directory holding recipes.json and (optionally) profile.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of filtered recipes
    Browse {
        /// Recipe source: user, favourites or public
        #[arg(long, default_value = "public")]
        source: RecipeSource,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show the filter options available for a source
    Facets {
        /// Recipe source: user, favourites or public
        #[arg(long, default_value = "public")]
        source: RecipeSource,

        /// Only list ingredients of recipes in this language
        #[arg(long)]
        language: Option<String>,
    },

    /// Show one recipe in full
    Show {
        /// Recipe ID to display
        #[arg(long)]
        id: RecipeId,
    },

    /// Print the list endpoint query string for a set of filters
    Params {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Run the filter engine against synthetic recipes
    Benchmark {
        /// Number of synthetic recipes
        #[arg(long, default_value = "10000")]
        recipes: u32,

        /// Number of filter requests to time
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Exact difficulty (1-3)
    #[arg(long)]
    difficulty: Option<u8>,

    /// Preparation time in minutes, as from-to (either side may be empty)
    #[arg(long)]
    prep_time: Option<RangeFilter>,

    /// Number of servings, as from-to (either side may be empty)
    #[arg(long)]
    servings: Option<RangeFilter>,

    /// Exact category, e.g. BREAKFAST
    #[arg(long)]
    category: Option<String>,

    /// Recipe language (case-insensitive)
    #[arg(long)]
    language: Option<String>,

    /// Substring of the recipe name (case-insensitive)
    #[arg(long)]
    query: Option<String>,

    /// Required ingredient; repeat for several
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
}

impl FilterArgs {
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            difficulty: self.difficulty,
            prep_time: self.prep_time.unwrap_or_default(),
            servings: self.servings.unwrap_or_default(),
            category: self.category,
            language: self.language,
            query: self.query,
            ingredients: self.ingredients,
        }
    }
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Page to show (1-based)
    #[arg(long, default_value = "1")]
    page: usize,

    /// Recipes per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Browse {
            source,
            filters,
            paging,
        } => handle_browse(&cli.data_dir, source, filters, paging)?,
        Commands::Facets { source, language } => handle_facets(&cli.data_dir, source, language)?,
        Commands::Show { id } => handle_show(&cli.data_dir, id)?,
        Commands::Params { filters, paging } => handle_params(filters, paging),
        Commands::Benchmark {
            recipes,
            requests,
            seed,
        } => handle_benchmark(recipes, requests, seed)?,
    }

    Ok(())
}

/// Handle the 'browse' command
fn handle_browse(
    data_dir: &Path,
    source: RecipeSource,
    filters: FilterArgs,
    paging: PageArgs,
) -> Result<()> {
    let mut browser = RecipeBrowser::open(data_dir, source, paging.page_size)?;
    browser.apply_criteria(filters.into_criteria());
    browser.go_to_page(paging.page);

    println!("{}", source.label().bold().blue());
    if browser.page_items().is_empty() {
        println!("{}", "No recipes match the current filters.".yellow());
    }

    let offset = paging.page.saturating_sub(1) * paging.page_size;
    for (i, recipe) in browser.page_items().iter().enumerate() {
        let rating = recipe
            .avg_rating
            .or_else(|| {
                browser
                    .index()
                    .get_recipe_stats(recipe.id)
                    .filter(|s| s.rating_count > 0)
                    .map(|s| s.avg_rating)
            })
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{}. {} [{}] difficulty {} | {} min | {} servings | {} | rating {}",
            (offset + i + 1).to_string().green(),
            recipe.recipe_name.bold(),
            recipe.category,
            recipe.difficulty,
            recipe.prepare_time,
            recipe.servings,
            recipe.language.as_deref().unwrap_or("-"),
            rating
        );
    }

    println!(
        "Page {} of {} ({} matches)",
        browser.current_page(),
        browser.total_pages(),
        browser.filtered_len()
    );
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets(
    data_dir: &Path,
    source: RecipeSource,
    language: Option<String>,
) -> Result<()> {
    let mut browser = RecipeBrowser::open(data_dir, source, DEFAULT_PAGE_SIZE)?;
    if let Some(language) = language {
        browser.apply_criteria(FilterCriteria::new().with_language(language));
    }

    let facets = browser.facets();
    print_facet("Categories", &facets.categories);
    print_facet("Languages", &facets.languages);
    print_facet("Ingredients", &facets.ingredients);
    Ok(())
}

fn print_facet(title: &str, values: &[String]) {
    println!("{} ({})", title.bold().blue(), values.len());
    for value in values {
        println!("  {}{}", "• ".green(), value);
    }
}

/// Handle the 'show' command
fn handle_show(data_dir: &Path, id: RecipeId) -> Result<()> {
    let index = RecipeIndex::load_from_files(data_dir)
        .with_context(|| format!("Failed to load recipes from {}", data_dir.display()))?;
    let recipe = index
        .get_recipe(id)
        .with_context(|| format!("Recipe {} not found", id))?;

    println!("{}", format!("{} (#{})", recipe.recipe_name, recipe.id).bold().blue());
    println!("{}Category: {}", "• ".green(), recipe.category);
    println!("{}Difficulty: {}", "• ".green(), recipe.difficulty);
    println!("{}Preparation time: {} min", "• ".green(), recipe.prepare_time);
    println!("{}Servings: {}", "• ".green(), recipe.servings);
    println!(
        "{}Language: {}",
        "• ".green(),
        recipe.language.as_deref().unwrap_or("-")
    );
    println!(
        "{}Visibility: {}",
        "• ".green(),
        if recipe.is_public { "public" } else { "private" }
    );

    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", format_ingredient(ingredient));
    }

    println!("Steps:");
    for (i, step) in recipe.steps.iter().enumerate() {
        let number = step.step_number.unwrap_or(i as u32 + 1);
        println!("  {}. {}", number, step.description);
    }

    match index.get_recipe_stats(id) {
        Some(stats) if stats.rating_count > 0 => println!(
            "{}Average rating: {:.2} ({} ratings)",
            "• ".cyan(),
            stats.avg_rating,
            stats.rating_count
        ),
        _ => println!("{}No ratings yet", "• ".cyan()),
    }
    Ok(())
}

fn format_ingredient(ingredient: &Ingredient) -> String {
    let mut line = String::new();
    if ingredient.quantity > 0.0 {
        line.push_str(&format!("{} ", ingredient.quantity));
        if !ingredient.unit.is_empty() {
            line.push_str(&format!("{} ", ingredient.unit));
        }
    }
    line.push_str(&ingredient.ingredient_name);
    if ingredient.is_optional {
        line.push_str(" (optional)");
    }
    line
}

/// Handle the 'params' command
fn handle_params(filters: FilterArgs, paging: PageArgs) {
    let state = FilterState::new(paging.page_size)
        .with_page(paging.page)
        .with_criteria(filters.into_criteria());
    println!("{}", state.to_query_string());
}

const CATEGORIES: &[&str] = &["BREAKFAST", "LUNCH", "DINNER", "SOUP", "DESSERT", "SNACK"];
const LANGUAGES: &[&str] = &["english", "polish", "german"];
const INGREDIENTS: &[&str] = &[
    "Flour", "Milk", "Egg", "Butter", "Sugar", "Tomato", "Onion", "Garlic", "Potato", "Rice",
    "Cheese", "Chicken", "Beef", "Carrot", "Apple",
];

fn synthetic_recipes(rng: &mut StdRng, count: u32) -> Vec<Recipe> {
    (1..=count)
        .map(|id| {
            let mut recipe = Recipe::new(id, format!("Recipe {id}"));
            recipe.category = CATEGORIES.choose(rng).map(|c| c.to_string()).unwrap_or_default();
            recipe.language = LANGUAGES.choose(rng).map(|l| l.to_string());
            recipe.difficulty = rng.random_range(1..=3);
            recipe.prepare_time = rng.random_range(5..=180);
            recipe.servings = rng.random_range(1..=8);
            recipe.is_public = true;
            let ingredient_count = rng.random_range(2..=6);
            recipe.ingredients = INGREDIENTS
                .choose_multiple(rng, ingredient_count)
                .map(|&name| Ingredient::named(name))
                .collect();
            recipe
        })
        .collect()
}

/// A random mix of the filters a user would set
fn random_state(rng: &mut StdRng) -> FilterState {
    let mut criteria = FilterCriteria::new();
    if rng.random_bool(0.5) {
        criteria = criteria.with_difficulty(rng.random_range(1..=3));
    }
    if rng.random_bool(0.3) {
        let from = rng.random_range(0..=60);
        criteria = criteria.with_prep_time(Some(from), Some(from + rng.random_range(10..=120)));
    }
    if rng.random_bool(0.3) {
        if let Some(language) = LANGUAGES.choose(rng) {
            criteria = criteria.with_language(*language);
        }
    }
    if rng.random_bool(0.3) {
        if let Some(ingredient) = INGREDIENTS.choose(rng) {
            criteria = criteria.with_ingredient(ingredient.to_lowercase());
        }
    }
    if rng.random_bool(0.2) {
        criteria = criteria.with_query(format!("recipe {}", rng.random_range(1..=9)));
    }
    FilterState::default()
        .with_page(rng.random_range(1..=3))
        .with_criteria(criteria)
}

/// Handle the 'benchmark' command
fn handle_benchmark(recipe_count: u32, requests: usize, seed: Option<u64>) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let start = Instant::now();
    let recipes = synthetic_recipes(&mut rng, recipe_count);
    println!(
        "{} Generated {} recipes in {:?}",
        "✓".green(),
        recipes.len(),
        start.elapsed()
    );

    let states: Vec<FilterState> = (0..requests).map(|_| random_state(&mut rng)).collect();

    let mut timings = Vec::with_capacity(requests);
    let mut matched = 0usize;
    for state in &states {
        let start = Instant::now();
        let view = filter_view(&recipes, state);
        let facets = derive_facets(&recipes, state.criteria.active_language());
        let page_len = view.page_items().len();
        timings.push(start.elapsed());

        matched += view.len();
        tracing::debug!(
            "{} matches, {} on page, {} ingredient options",
            view.len(),
            page_len,
            facets.ingredients.len()
        );
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / timings.len() as u32;
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / total_time.as_secs_f64().max(f64::EPSILON);

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", requests);
    println!("Average matches: {:.1}", matched as f64 / requests as f64);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}
