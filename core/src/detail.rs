//! View-model for the recipe detail screen.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::client::ApiService;
use crate::presentation::{RatingFormatter, RecipeItem};
use crate::state::{StateStore, ViewState};
use crate::types::Recipe;

pub struct RecipeDetailViewModel<S> {
    service: S,
    formatter: RatingFormatter,
    store: StateStore<Arc<RecipeItem>>,
}

impl<S: ApiService> RecipeDetailViewModel<S> {
    pub fn new(service: S) -> Self {
        Self::with_formatter(service, RatingFormatter::default())
    }

    pub fn with_formatter(service: S, formatter: RatingFormatter) -> Self {
        Self {
            service,
            formatter,
            store: StateStore::new(),
        }
    }

    /// Start already `Loaded` with an item taken from the list screen.
    pub fn with_recipe(service: S, recipe: Arc<RecipeItem>) -> Self {
        let vm = Self::new(service);
        vm.store.set(ViewState::Loaded(recipe));
        vm
    }

    pub async fn load_recipe(&self, id: i64) {
        self.store.set(ViewState::Loading);

        let request = Recipe::fetch(id);
        match self.service.perform_request(&request).await {
            Ok(recipe) => {
                let item = RecipeItem::new(recipe, &self.formatter);
                info!(id = item.id, name = %item.name, "recipe loaded");
                self.store.set(ViewState::Loaded(Arc::new(item)));
            }
            Err(err) => {
                warn!(id, error = %err, "failed to load recipe");
                self.store.set(ViewState::Error(err.to_string()));
            }
        }
    }
}

impl<S> RecipeDetailViewModel<S> {
    pub fn state(&self) -> ViewState<Arc<RecipeItem>> {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Arc<RecipeItem>>> {
        self.store.subscribe()
    }

    pub fn recipe(&self) -> Option<Arc<RecipeItem>> {
        self.store.with(|s| s.payload().cloned())
    }

    pub fn error(&self) -> Option<String> {
        self.store.with(|s| s.error().map(str::to_string))
    }
}
