//! Display-ready projection of domain recipes.
//!
//! # Design
//! `RecipeItem` is built once per fetch from a `Recipe` and never mutated.
//! The wire difficulty string is closed into `Difficulty`, with `Unknown`
//! for anything unrecognised so it cannot collide with the `All` filter
//! option. The rating keeps its numeric value for filtering and gains a
//! formatted string for display.

use std::cmp::Ordering;
use std::fmt;

use crate::types::Recipe;

/// Difficulty of a recipe as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    /// Exact, case-sensitive match on the wire value.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Formats ratings with exactly one fractional digit, the way a platform
/// number formatter does.
///
/// The decimal separator is the only locale-dependent part of a value in
/// the 0.0-5.0 range, so that is all this carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingFormatter {
    decimal_separator: char,
}

impl RatingFormatter {
    pub fn new(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }

    /// Round to one fractional digit, ties to even, on the shortest decimal
    /// form of `rating`, so `4.45` counts as a tie.
    pub fn format(&self, rating: f64) -> String {
        if !rating.is_finite() {
            return rating.to_string();
        }

        let shortest = rating.abs().to_string();
        let (whole, fraction) = shortest.split_once('.').unwrap_or((&shortest, ""));
        let mut digits: Vec<u8> = whole.bytes().map(|b| b - b'0').collect();
        digits.push(fraction.bytes().next().map_or(0, |b| b - b'0'));

        let rest = fraction.as_bytes().get(1..).unwrap_or_default();
        let round_up = match rest.split_first() {
            None => false,
            Some((&first, tail)) => match first.cmp(&b'5') {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => {
                    tail.iter().any(|&d| d != b'0') || digits.last().is_some_and(|d| d % 2 == 1)
                }
            },
        };
        if round_up {
            increment(&mut digits);
        }

        let negative = rating < 0.0 && digits.iter().any(|&d| d != 0);
        let tenths = digits.pop().unwrap_or(0);
        let mut formatted = String::with_capacity(digits.len() + 3);
        if negative {
            formatted.push('-');
        }
        formatted.extend(digits.iter().map(|&d| char::from(b'0' + d)));
        formatted.push(self.decimal_separator);
        formatted.push(char::from(b'0' + tenths));
        formatted
    }
}

/// Add one to a big-endian decimal digit string.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

impl Default for RatingFormatter {
    fn default() -> Self {
        Self::new('.')
    }
}

/// A recipe projected for display. Identity is `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeItem {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    pub servings: i64,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub calories_per_serving: i64,
    pub tags: Vec<String>,
    pub user_id: i64,
    pub image: String,
    pub rating: f64,
    pub rating_string: String,
    pub review_count: i64,
    pub meal_type: Vec<String>,
}

impl RecipeItem {
    pub fn new(recipe: Recipe, formatter: &RatingFormatter) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            prep_time_minutes: recipe.prep_time_minutes,
            cook_time_minutes: recipe.cook_time_minutes,
            servings: recipe.servings,
            difficulty: Difficulty::from_wire(&recipe.difficulty),
            cuisine: recipe.cuisine,
            calories_per_serving: recipe.calories_per_serving,
            tags: recipe.tags,
            user_id: recipe.user_id,
            image: recipe.image,
            rating: recipe.rating,
            rating_string: formatter.format(recipe.rating),
            review_count: recipe.review_count,
            meal_type: recipe.meal_type,
        }
    }

    pub fn total_time_minutes(&self) -> i64 {
        self.prep_time_minutes + self.cook_time_minutes
    }
}

impl From<Recipe> for RecipeItem {
    fn from(recipe: Recipe) -> Self {
        Self::new(recipe, &RatingFormatter::default())
    }
}
