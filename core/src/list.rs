//! View-model for the recipe list screen.
//!
//! # Design
//! The published state is the single source of truth for what is shown:
//! `Loaded` carries the displayed (filtered) set. The unfiltered source set
//! and the filter selection are private and only change through the methods
//! below. Picking a filter and applying it are separate steps, so the
//! selection setters never recompute anything.
//!
//! Methods take `&self`. Two overlapping `load_recipes` calls are not
//! de-duplicated; whichever response resolves last decides the final state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::ApiService;
use crate::filter::{DifficultyFilter, FilterSelection, RatingFilter};
use crate::presentation::{RatingFormatter, RecipeItem};
use crate::state::{StateStore, ViewState};
use crate::types::Recipe;

pub type RecipeList = Vec<Arc<RecipeItem>>;

#[derive(Debug, Default)]
struct ListData {
    all_recipes: RecipeList,
    selection: FilterSelection,
}

pub struct RecipeListViewModel<S> {
    service: S,
    formatter: RatingFormatter,
    store: StateStore<RecipeList>,
    data: Mutex<ListData>,
}

impl<S: ApiService> RecipeListViewModel<S> {
    pub fn new(service: S) -> Self {
        Self::with_formatter(service, RatingFormatter::default())
    }

    pub fn with_formatter(service: S, formatter: RatingFormatter) -> Self {
        Self {
            service,
            formatter,
            store: StateStore::new(),
            data: Mutex::new(ListData::default()),
        }
    }

    /// Fetch every recipe, replace the source set and publish the filtered
    /// view of it. `Loading` is published before the request is sent.
    pub async fn load_recipes(&self) {
        self.store.set(ViewState::Loading);

        let request = Recipe::fetch_all();
        match self.service.perform_request(&request).await {
            Ok(response) => {
                let recipes: RecipeList = response
                    .recipes
                    .into_iter()
                    .map(|recipe| Arc::new(RecipeItem::new(recipe, &self.formatter)))
                    .collect();

                let displayed = {
                    let mut data = self.data();
                    data.all_recipes = recipes;
                    data.selection.apply(&data.all_recipes)
                };

                info!(
                    total = response.total,
                    displayed = displayed.len(),
                    "recipes loaded"
                );
                self.store.set(ViewState::Loaded(displayed));
            }
            Err(err) => {
                warn!(error = %err, "failed to load recipes");
                self.store.set(ViewState::Error(err.to_string()));
            }
        }
    }

    /// Recompute the displayed set from the source set and the current
    /// selection. Does nothing when no recipes have been loaded. Outside
    /// `Loaded` the selection is kept for the next successful load.
    pub fn apply_filters(&self) {
        let displayed = {
            let data = self.data();
            if data.all_recipes.is_empty() {
                return;
            }
            data.selection.apply(&data.all_recipes)
        };

        let count = displayed.len();
        if self.publish_if_loaded(displayed) {
            debug!(displayed = count, "filters applied");
        }
    }

    /// Reset both selections to `All` and show the full source set.
    pub fn clear_filters(&self) {
        let all = {
            let mut data = self.data();
            data.selection = FilterSelection::default();
            data.all_recipes.clone()
        };

        self.publish_if_loaded(all);
    }

    /// Swap the displayed set only while `Loaded`, so a load that has just
    /// published `Loading` is never overwritten.
    fn publish_if_loaded(&self, displayed: RecipeList) -> bool {
        self.store.update(|state| match state {
            ViewState::Loaded(shown) => {
                *shown = displayed;
                true
            }
            _ => false,
        })
    }
}

impl<S> RecipeListViewModel<S> {
    pub fn set_selected_difficulty(&self, difficulty: DifficultyFilter) {
        self.data().selection.difficulty = difficulty;
    }

    pub fn set_selected_rating(&self, rating: RatingFilter) {
        self.data().selection.rating = rating;
    }

    pub fn selected_difficulty(&self) -> DifficultyFilter {
        self.data().selection.difficulty
    }

    pub fn selected_rating(&self) -> RatingFilter {
        self.data().selection.rating
    }

    pub fn selection(&self) -> FilterSelection {
        self.data().selection
    }

    pub fn all_difficulties(&self) -> &'static [DifficultyFilter] {
        &DifficultyFilter::ALL
    }

    pub fn all_ratings(&self) -> &'static [RatingFilter] {
        &RatingFilter::ALL
    }

    pub fn state(&self) -> ViewState<RecipeList> {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<RecipeList>> {
        self.store.subscribe()
    }

    /// The displayed set, present only while `Loaded`.
    pub fn recipes(&self) -> Option<RecipeList> {
        self.store.with(|s| s.payload().cloned())
    }

    pub fn error_message(&self) -> Option<String> {
        self.store.with(|s| s.error().map(str::to_string))
    }

    fn data(&self) -> MutexGuard<'_, ListData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::mock::MockApiService;
    use crate::presentation::fixtures::recipe;
    use crate::types::RecipeResponse;

    fn response(recipes: Vec<Recipe>) -> RecipeResponse {
        RecipeResponse {
            total: recipes.len() as i64,
            recipes,
            skip: 0,
            limit: 30,
        }
    }

    fn view_model_with(recipes: Vec<Recipe>) -> RecipeListViewModel<MockApiService> {
        let service = MockApiService::new();
        service.add_result(response(recipes));
        RecipeListViewModel::new(service)
    }

    fn displayed_ids<S: ApiService>(vm: &RecipeListViewModel<S>) -> Vec<i64> {
        vm.recipes().unwrap().iter().map(|r| r.id).collect()
    }

    #[test]
    fn initial_state_is_loading_without_recipes() {
        let vm = RecipeListViewModel::new(MockApiService::new());
        assert_eq!(vm.state(), ViewState::Loading);
        assert!(vm.recipes().is_none());
        assert!(vm.error_message().is_none());
        assert_eq!(vm.selection(), FilterSelection::default());
    }

    #[tokio::test]
    async fn load_calls_service_once() {
        let vm = view_model_with(vec![recipe(1, "Easy", 4.0)]);
        vm.load_recipes().await;
        assert_eq!(vm.service.received_requests(), vec!["/recipes"]);
    }

    #[tokio::test]
    async fn load_projects_recipes_in_order() {
        let recipes = vec![recipe(1, "Easy", 7.8), recipe(2, "Hard", 4.0)];
        let expected: Vec<RecipeItem> = recipes.iter().cloned().map(RecipeItem::from).collect();
        let vm = view_model_with(recipes);

        vm.load_recipes().await;

        let shown = vm.recipes().unwrap();
        assert_eq!(shown.len(), 2);
        assert_eq!(*shown[0], expected[0]);
        assert_eq!(*shown[1], expected[1]);
        assert_eq!(shown[0].rating_string, "7.8");
        assert_eq!(shown[1].rating_string, "4.0");
    }

    #[tokio::test]
    async fn error_sets_error_state_with_message() {
        let service = MockApiService::new();
        service.add_error(ApiError::InvalidUrl);
        let vm = RecipeListViewModel::new(service);

        vm.load_recipes().await;

        assert_eq!(vm.state(), ViewState::Error("Invalid URL".to_string()));
        assert_eq!(vm.error_message().as_deref(), Some("Invalid URL"));
        assert!(vm.recipes().is_none());
    }

    #[tokio::test]
    async fn loading_is_observable_before_fetch_resolves() {
        let service = MockApiService::new();
        let release = service.add_pending();
        let vm = RecipeListViewModel::new(service);
        vm.store.set(ViewState::Error("stale".to_string()));

        let check = async {
            tokio::task::yield_now().await;
            assert!(vm.state().is_loading());
            release
                .send(Ok(serde_json::to_value(response(vec![recipe(1, "Easy", 3.0)])).unwrap()))
                .unwrap();
        };
        tokio::join!(vm.load_recipes(), check);

        assert_eq!(displayed_ids(&vm), vec![1]);
    }

    #[tokio::test]
    async fn filters_during_reload_do_not_replace_loading() {
        let vm = view_model_with(vec![recipe(1, "Easy", 4.0), recipe(2, "Hard", 4.0)]);
        vm.load_recipes().await;
        let release = vm.service.add_pending();

        let check = async {
            tokio::task::yield_now().await;
            vm.set_selected_difficulty(DifficultyFilter::Hard);
            vm.apply_filters();
            assert!(vm.state().is_loading());
            vm.clear_filters();
            assert!(vm.state().is_loading());
            vm.set_selected_difficulty(DifficultyFilter::Easy);
            release
                .send(Ok(serde_json::to_value(response(vec![
                    recipe(3, "Easy", 3.0),
                    recipe(4, "Hard", 3.0),
                ]))
                .unwrap()))
                .unwrap();
        };
        tokio::join!(vm.load_recipes(), check);

        assert_eq!(displayed_ids(&vm), vec![3]);
    }

    #[tokio::test]
    async fn hard_filter_keeps_only_hard_recipe() {
        let vm = view_model_with(vec![recipe(1, "Easy", 4.0), recipe(2, "Hard", 4.0)]);
        vm.load_recipes().await;

        vm.set_selected_difficulty(DifficultyFilter::Hard);
        vm.apply_filters();

        assert_eq!(displayed_ids(&vm), vec![2]);
    }

    #[tokio::test]
    async fn rating_filter_keeps_order() {
        let vm = view_model_with(vec![
            recipe(1, "Easy", 2.1),
            recipe(2, "Easy", 4.7),
            recipe(3, "Easy", 3.6),
        ]);
        vm.load_recipes().await;

        vm.set_selected_rating(RatingFilter::ThreePlus);
        vm.apply_filters();

        assert_eq!(displayed_ids(&vm), vec![2, 3]);
    }

    #[tokio::test]
    async fn selection_does_not_apply_until_requested() {
        let vm = view_model_with(vec![recipe(1, "Easy", 4.0), recipe(2, "Hard", 4.0)]);
        vm.load_recipes().await;

        vm.set_selected_difficulty(DifficultyFilter::Hard);
        vm.set_selected_rating(RatingFilter::FourPlus);

        assert_eq!(vm.selected_difficulty(), DifficultyFilter::Hard);
        assert_eq!(vm.selected_rating(), RatingFilter::FourPlus);
        assert_eq!(displayed_ids(&vm), vec![1, 2]);
    }

    #[tokio::test]
    async fn clear_filters_restores_full_set() {
        let vm = view_model_with(vec![
            recipe(1, "Easy", 1.5),
            recipe(2, "Hard", 4.5),
            recipe(3, "Medium", 3.5),
        ]);
        vm.load_recipes().await;
        vm.set_selected_difficulty(DifficultyFilter::Medium);
        vm.set_selected_rating(RatingFilter::ThreePlus);
        vm.apply_filters();
        assert_eq!(displayed_ids(&vm), vec![3]);

        vm.clear_filters();

        assert_eq!(vm.selection(), FilterSelection::default());
        assert_eq!(displayed_ids(&vm), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn selection_made_before_load_is_applied_on_load() {
        let vm = view_model_with(vec![recipe(1, "Easy", 4.0), recipe(2, "Hard", 4.0)]);
        vm.set_selected_difficulty(DifficultyFilter::Easy);

        vm.load_recipes().await;

        assert_eq!(displayed_ids(&vm), vec![1]);
    }

    #[test]
    fn apply_filters_without_recipes_is_noop() {
        let vm = RecipeListViewModel::new(MockApiService::new());
        vm.set_selected_rating(RatingFilter::TwoPlus);
        vm.apply_filters();
        assert_eq!(vm.state(), ViewState::Loading);
    }

    #[tokio::test]
    async fn failed_reload_keeps_source_set() {
        let service = MockApiService::new();
        service.add_result(response(vec![recipe(1, "Easy", 2.0), recipe(2, "Hard", 4.0)]));
        service.add_error(ApiError::NetworkError("offline".to_string()));
        service.add_result(response(vec![recipe(9, "Easy", 5.0)]));
        let vm = RecipeListViewModel::new(service);

        vm.load_recipes().await;
        vm.load_recipes().await;
        assert_eq!(vm.error_message().as_deref(), Some("offline"));

        // Filters picked while in error are stored but not published.
        vm.set_selected_rating(RatingFilter::FourPlus);
        vm.apply_filters();
        assert!(vm.recipes().is_none());
        assert_eq!(vm.data().all_recipes.len(), 2);

        vm.load_recipes().await;
        assert_eq!(displayed_ids(&vm), vec![9]);
    }

    #[tokio::test]
    async fn decoding_failure_surfaces_decoder_message() {
        let service = MockApiService::new();
        service.add_result(serde_json::json!({ "recipes": [], "total": 0, "skip": 0 }));
        let vm = RecipeListViewModel::new(service);

        vm.load_recipes().await;

        let message = vm.error_message().unwrap();
        assert!(message.contains("missing field `limit`"), "{message}");
    }

    #[tokio::test]
    async fn subscriber_observes_loaded_state() {
        let vm = view_model_with(vec![recipe(1, "Easy", 4.0)]);
        let mut rx = vm.subscribe();

        vm.load_recipes().await;

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_loaded());
    }

    #[tokio::test]
    async fn last_resolved_load_wins() {
        let service = MockApiService::new();
        let first = service.add_pending();
        let second = service.add_pending();
        let vm = RecipeListViewModel::new(service);
        let mut rx = vm.subscribe();

        let drive = async {
            // Resolve the second call first, wait for it to land, then the first.
            second
                .send(Ok(serde_json::to_value(response(vec![recipe(2, "Hard", 4.0)])).unwrap()))
                .unwrap();
            rx.wait_for(|s| s.payload().is_some_and(|r| r[0].id == 2))
                .await
                .unwrap();
            first
                .send(Ok(serde_json::to_value(response(vec![recipe(1, "Easy", 4.0)])).unwrap()))
                .unwrap();
        };
        tokio::join!(vm.load_recipes(), vm.load_recipes(), drive);

        assert_eq!(displayed_ids(&vm), vec![1]);
        assert_eq!(vm.service.received_requests().len(), 2);
    }

    #[test]
    fn filter_options_are_listed_in_display_order() {
        let vm = RecipeListViewModel::new(MockApiService::new());
        let labels: Vec<_> = vm.all_ratings().iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["All", "1+", "2+", "3+", "4+"]);
        assert_eq!(vm.all_difficulties().len(), 4);
    }
}
