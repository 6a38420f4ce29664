//! Client core for the recipes API.
//!
//! # Overview
//! Fetches recipes over HTTP, projects them into display-ready values and
//! exposes observable view-models for a list screen (with client-side
//! filtering) and a detail screen. Rendering and navigation belong to the
//! host; this crate only publishes state.
//!
//! # Design
//! - `ApiClient` is stateless apart from `base_url` and its `Transport`.
//! - View-models take any `ApiService`, so tests inject a mock and hosts
//!   share one client across screens.
//! - Each view-model publishes a single tagged `ViewState` through a watch
//!   channel; there are no side-channel fields.

pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod http;
pub mod list;
pub mod navigation;
pub mod presentation;
pub mod request;
pub mod state;
pub mod types;

#[cfg(test)]
mod mock;

pub use client::{ApiClient, ApiService};
pub use config::ClientConfig;
pub use detail::RecipeDetailViewModel;
pub use error::{ApiError, ParseFilterError, TransportError};
pub use filter::{DifficultyFilter, FilterSelection, RatingFilter};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use list::{RecipeList, RecipeListViewModel};
pub use navigation::NavigationStack;
pub use presentation::{Difficulty, RatingFormatter, RecipeItem};
pub use request::Request;
pub use state::{StateStore, ViewState};
pub use types::{Recipe, RecipeResponse};
