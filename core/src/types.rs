//! Domain DTOs for the recipes API.
//!
//! # Design
//! These mirror the server's wire shape exactly (camelCase keys, every field
//! required) and are only ever produced by decoding a response. Display
//! concerns live in `presentation`.

use serde::{Deserialize, Serialize};

/// A single recipe as returned by `GET /recipes/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    pub servings: i64,
    /// Free-form on the wire; "Easy", "Medium" and "Hard" by convention.
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

/// Envelope returned by `GET /recipes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeResponse {
    pub recipes: Vec<Recipe>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}
