//! Local stand-in for the recipe endpoints of `dummyjson.com`.
//!
//! Serves a read-only catalogue with the same JSON shapes and error body as
//! the public API, so the client can be exercised without network access.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Page size used by the public API when `limit` is absent.
pub const DEFAULT_LIMIT: usize = 30;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    pub servings: i64,
    pub difficulty: String,
    pub cuisine: String,
    pub calories_per_serving: i64,
    pub tags: Vec<String>,
    pub user_id: i64,
    pub image: String,
    pub rating: f64,
    pub review_count: i64,
    pub meal_type: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecipePage {
    pub recipes: Vec<Recipe>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub limit: Option<usize>,
    pub skip: Option<usize>,
}

pub type Catalogue = Arc<Vec<Recipe>>;

pub fn app() -> Router {
    app_with(seed_recipes())
}

pub fn app_with(recipes: Vec<Recipe>) -> Router {
    let catalogue: Catalogue = Arc::new(recipes);
    Router::new()
        .route("/recipes", get(list_recipes))
        .route("/recipes/{id}", get(get_recipe))
        .with_state(catalogue)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_recipes(
    State(catalogue): State<Catalogue>,
    Query(params): Query<PageParams>,
) -> Json<RecipePage> {
    let skip = params.skip.unwrap_or(0);
    // `limit=0` means "everything", as on the public API.
    let limit = match params.limit.unwrap_or(DEFAULT_LIMIT) {
        0 => catalogue.len(),
        n => n,
    };
    let recipes: Vec<Recipe> = catalogue.iter().skip(skip).take(limit).cloned().collect();
    tracing::debug!(skip, returned = recipes.len(), "list recipes");

    Json(RecipePage {
        total: catalogue.len(),
        skip,
        limit: recipes.len(),
        recipes,
    })
}

async fn get_recipe(State(catalogue): State<Catalogue>, Path(id): Path<i64>) -> Response {
    match catalogue.iter().find(|r| r.id == id) {
        Some(recipe) => Json(recipe.clone()).into_response(),
        None => {
            tracing::debug!(id, "recipe not found");
            let body = serde_json::json!({ "message": format!("Recipe with id '{id}' not found") });
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A small catalogue covering every difficulty and a spread of ratings.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Classic Margherita Pizza".to_string(),
            ingredients: strings(&["Pizza dough", "Tomato sauce", "Fresh mozzarella", "Basil"]),
            instructions: strings(&["Preheat the oven to 475F.", "Top the dough.", "Bake for 12 minutes."]),
            prep_time_minutes: 20,
            cook_time_minutes: 15,
            servings: 4,
            difficulty: "Easy".to_string(),
            cuisine: "Italian".to_string(),
            calories_per_serving: 300,
            tags: strings(&["Pizza", "Italian"]),
            user_id: 166,
            image: "https://cdn.dummyjson.com/recipe-images/1.webp".to_string(),
            rating: 4.6,
            review_count: 98,
            meal_type: strings(&["Dinner"]),
        },
        Recipe {
            id: 2,
            name: "Vegetarian Stir-Fry".to_string(),
            ingredients: strings(&["Tofu", "Broccoli", "Soy sauce", "Ginger"]),
            instructions: strings(&["Press the tofu.", "Stir-fry the vegetables.", "Add sauce."]),
            prep_time_minutes: 15,
            cook_time_minutes: 20,
            servings: 3,
            difficulty: "Medium".to_string(),
            cuisine: "Asian".to_string(),
            calories_per_serving: 250,
            tags: strings(&["Vegetarian", "Stir-fry"]),
            user_id: 143,
            image: "https://cdn.dummyjson.com/recipe-images/2.webp".to_string(),
            rating: 4.7,
            review_count: 26,
            meal_type: strings(&["Lunch"]),
        },
        Recipe {
            id: 3,
            name: "Beef Wellington".to_string(),
            ingredients: strings(&["Beef tenderloin", "Puff pastry", "Mushrooms", "Prosciutto"]),
            instructions: strings(&["Sear the beef.", "Wrap in duxelles and pastry.", "Bake."]),
            prep_time_minutes: 60,
            cook_time_minutes: 45,
            servings: 6,
            difficulty: "Hard".to_string(),
            cuisine: "British".to_string(),
            calories_per_serving: 620,
            tags: strings(&["Beef", "Pastry"]),
            user_id: 52,
            image: "https://cdn.dummyjson.com/recipe-images/3.webp".to_string(),
            rating: 3.6,
            review_count: 14,
            meal_type: strings(&["Dinner"]),
        },
        Recipe {
            id: 4,
            name: "Plain Rice Porridge".to_string(),
            ingredients: strings(&["Rice", "Water", "Salt"]),
            instructions: strings(&["Simmer rice in water until soft."]),
            prep_time_minutes: 5,
            cook_time_minutes: 40,
            servings: 2,
            difficulty: "Easy".to_string(),
            cuisine: "Chinese".to_string(),
            calories_per_serving: 150,
            tags: strings(&["Breakfast"]),
            user_id: 9,
            image: "https://cdn.dummyjson.com/recipe-images/4.webp".to_string(),
            rating: 2.1,
            review_count: 3,
            meal_type: strings(&["Breakfast"]),
        },
        Recipe {
            id: 5,
            name: "Chocolate Souffle".to_string(),
            ingredients: strings(&["Dark chocolate", "Eggs", "Sugar", "Butter"]),
            instructions: strings(&["Melt chocolate.", "Fold in whipped whites.", "Bake immediately."]),
            prep_time_minutes: 25,
            cook_time_minutes: 14,
            servings: 4,
            difficulty: "Hard".to_string(),
            cuisine: "French".to_string(),
            calories_per_serving: 410,
            tags: strings(&["Dessert", "Chocolate"]),
            user_id: 71,
            image: "https://cdn.dummyjson.com/recipe-images/5.webp".to_string(),
            rating: 4.9,
            review_count: 61,
            meal_type: strings(&["Dessert"]),
        },
        Recipe {
            id: 6,
            name: "Mystery Stew".to_string(),
            ingredients: strings(&["Whatever is in the fridge"]),
            instructions: strings(&["Combine.", "Simmer."]),
            prep_time_minutes: 10,
            cook_time_minutes: 90,
            servings: 5,
            difficulty: "Expert".to_string(),
            cuisine: "Fusion".to_string(),
            calories_per_serving: 380,
            tags: strings(&["Stew"]),
            user_id: 12,
            image: "https://cdn.dummyjson.com/recipe-images/6.webp".to_string(),
            rating: 1.4,
            review_count: 2,
            meal_type: strings(&["Dinner"]),
        },
    ]
}
