use data_loader::RecipeIndex;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading recipe documents...\n");

    let start = Instant::now();
    let index = RecipeIndex::load_from_files(data_dir)
        .expect("Failed to load recipe documents");
    let elapsed = start.elapsed();

    let (recipes, user_recipes, favourites) = index.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Recipes: {}", recipes);
    println!("User recipes: {}", user_recipes);
    println!("Favourites: {}", favourites);
    println!("\nPerformance: {:.0} recipes/second",
             (recipes + user_recipes + favourites) as f64 / elapsed.as_secs_f64());
}
