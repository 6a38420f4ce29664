//! Prints view-model snapshots to stdout.

use std::sync::Arc;

use recipes_core::{RecipeItem, RecipeList, ViewState};
use tokio::sync::watch;

/// Render every snapshot the store publishes until it is dropped.
pub async fn follow<T, F>(mut rx: watch::Receiver<ViewState<T>>, render: F)
where
    T: Clone,
    F: Fn(&ViewState<T>),
{
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        render(&state);
    }
}

pub fn list(state: &ViewState<RecipeList>) {
    match state {
        ViewState::Loading => println!("Loading recipes..."),
        ViewState::Loaded(recipes) if recipes.is_empty() => println!("No recipes match the filters."),
        ViewState::Loaded(recipes) => {
            for recipe in recipes {
                println!(
                    "{:>4}  {:<40} {:<8} {:>4}  {}",
                    recipe.id,
                    recipe.name,
                    recipe.difficulty,
                    recipe.rating_string,
                    recipe.cuisine
                );
            }
            println!("{} recipe(s)", recipes.len());
        }
        // Reported by main once the renderer finishes.
        ViewState::Error(_) => {}
    }
}

pub fn detail(state: &ViewState<Arc<RecipeItem>>) {
    let recipe = match state {
        ViewState::Loading => {
            println!("Loading recipe...");
            return;
        }
        ViewState::Loaded(recipe) => recipe,
        ViewState::Error(_) => return,
    };

    println!("{}", recipe.name);
    println!(
        "{} | {} | rating {} ({} reviews)",
        recipe.cuisine, recipe.difficulty, recipe.rating_string, recipe.review_count
    );
    println!(
        "prep {} min, cook {} min, serves {}, {} kcal per serving",
        recipe.prep_time_minutes, recipe.cook_time_minutes, recipe.servings, recipe.calories_per_serving
    );
    if !recipe.meal_type.is_empty() {
        println!("meal: {}", recipe.meal_type.join(", "));
    }
    if !recipe.tags.is_empty() {
        println!("tags: {}", recipe.tags.join(", "));
    }

    println!("\nIngredients");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }

    println!("\nInstructions");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {instruction}", step + 1);
    }
}
