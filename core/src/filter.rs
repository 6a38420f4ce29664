//! Client-side filtering of the recipe list.
//!
//! Difficulty is an exact match, rating an inclusive lower bound, and the
//! two are combined with AND. Filtering is stable and shares the `Arc`s of
//! the source set rather than copying items.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ParseFilterError;
use crate::presentation::{Difficulty, RecipeItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DifficultyFilter {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
}

impl DifficultyFilter {
    pub const ALL: [DifficultyFilter; 4] = [
        DifficultyFilter::All,
        DifficultyFilter::Easy,
        DifficultyFilter::Medium,
        DifficultyFilter::Hard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyFilter::All => "All",
            DifficultyFilter::Easy => "Easy",
            DifficultyFilter::Medium => "Medium",
            DifficultyFilter::Hard => "Hard",
        }
    }

    /// `None` when every difficulty passes.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            DifficultyFilter::All => None,
            DifficultyFilter::Easy => Some(Difficulty::Easy),
            DifficultyFilter::Medium => Some(Difficulty::Medium),
            DifficultyFilter::Hard => Some(Difficulty::Hard),
        }
    }

    pub fn matches(&self, difficulty: Difficulty) -> bool {
        self.difficulty().is_none_or(|wanted| wanted == difficulty)
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for DifficultyFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFilterError {
                kind: "difficulty",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RatingFilter {
    #[default]
    All,
    OnePlus,
    TwoPlus,
    ThreePlus,
    FourPlus,
}

impl RatingFilter {
    pub const ALL: [RatingFilter; 5] = [
        RatingFilter::All,
        RatingFilter::OnePlus,
        RatingFilter::TwoPlus,
        RatingFilter::ThreePlus,
        RatingFilter::FourPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RatingFilter::All => "All",
            RatingFilter::OnePlus => "1+",
            RatingFilter::TwoPlus => "2+",
            RatingFilter::ThreePlus => "3+",
            RatingFilter::FourPlus => "4+",
        }
    }

    /// Inclusive minimum rating, `None` when every rating passes.
    pub fn threshold(&self) -> Option<f64> {
        match self {
            RatingFilter::All => None,
            RatingFilter::OnePlus => Some(1.0),
            RatingFilter::TwoPlus => Some(2.0),
            RatingFilter::ThreePlus => Some(3.0),
            RatingFilter::FourPlus => Some(4.0),
        }
    }

    pub fn matches(&self, rating: f64) -> bool {
        self.threshold().is_none_or(|min| rating >= min)
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for RatingFilter {
    type Err = ParseFilterError;

    /// Accepts the display label ("3+") or the bare digit ("3").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| {
                let label = f.label();
                label.eq_ignore_ascii_case(s) || label.strip_suffix('+') == Some(s)
            })
            .ok_or_else(|| ParseFilterError {
                kind: "rating",
                value: s.to_string(),
            })
    }
}

/// The pair of filter choices owned by the list screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub difficulty: DifficultyFilter,
    pub rating: RatingFilter,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, item: &RecipeItem) -> bool {
        self.difficulty.matches(item.difficulty) && self.rating.matches(item.rating)
    }

    pub fn apply(&self, source: &[Arc<RecipeItem>]) -> Vec<Arc<RecipeItem>> {
        source
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}
