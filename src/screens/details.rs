//! Details screen: single-recipe state keyed by a recipe id.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::client::RecipeClient;
use crate::model::Recipe;

/// Error text for a detail fetch a host chooses to report as failed.
pub const DETAILS_FAILED: &str = "Failed to load recipe details";

/// Observable state of the details screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsState {
    pub recipe: Option<Recipe>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum DetailsEvent {
    /// A detail fetch resolved to a displayable recipe.
    LoadSucceeded(Recipe),
    /// A detail fetch was reported as failed rather than degraded.
    LoadFailed,
}

/// Pure state transition for the details screen.
pub fn reduce(state: DetailsState, event: DetailsEvent) -> DetailsState {
    match event {
        DetailsEvent::LoadSucceeded(recipe) => DetailsState {
            recipe: Some(recipe),
            loading: false,
            ..state
        },
        DetailsEvent::LoadFailed => DetailsState {
            loading: false,
            error: Some(DETAILS_FAILED.to_string()),
            ..state
        },
    }
}

/// Controller for the details screen.
///
/// Construction starts the fetch for the given id; it is re-triggered only
/// when [`show`](DetailsScreen::show) is called with a different id. A failed
/// fetch resolves to [`Recipe::fallback`] for the known id instead of a
/// blocking error state, so the screen always ends up with something to
/// render.
pub struct DetailsScreen {
    recipe_id: i32,
    state: DetailsState,
    client: Arc<RecipeClient>,
    events_tx: mpsc::UnboundedSender<(u64, DetailsEvent)>,
    events_rx: mpsc::UnboundedReceiver<(u64, DetailsEvent)>,
    epoch: u64,
    inflight: Option<CancellationToken>,
}

impl DetailsScreen {
    pub fn new(recipe_id: i32, client: Arc<RecipeClient>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut screen = Self {
            recipe_id,
            state: DetailsState::default(),
            client,
            events_tx,
            events_rx,
            epoch: 0,
            inflight: None,
        };
        screen.trigger_fetch();
        screen
    }

    pub fn recipe_id(&self) -> i32 {
        self.recipe_id
    }

    pub fn state(&self) -> &DetailsState {
        &self.state
    }

    /// Points the screen at `recipe_id`, fetching only when the id changed.
    pub fn show(&mut self, recipe_id: i32) {
        if recipe_id == self.recipe_id {
            return;
        }
        self.recipe_id = recipe_id;
        self.trigger_fetch();
    }

    fn trigger_fetch(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
        self.epoch += 1;
        let epoch = self.epoch;
        let token = CancellationToken::new();
        self.inflight = Some(token.clone());
        self.state = DetailsState {
            recipe: None,
            loading: true,
            error: None,
        };

        let client = Arc::clone(&self.client);
        let recipe_id = self.recipe_id;
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => return,
                outcome = client.get_recipe_information(recipe_id) => outcome,
            };
            let recipe = match outcome {
                Ok(raw) => Recipe::from_information(&raw),
                Err(e) => {
                    tracing::warn!("Failed to load details for recipe {}: {:#}", recipe_id, e);
                    Recipe::fallback(recipe_id)
                }
            };
            let _ = events_tx.send((epoch, DetailsEvent::LoadSucceeded(recipe)));
        });
    }

    /// Waits for the current fetch to complete and applies its result.
    ///
    /// Completions for superseded ids are skipped. Returns immediately when
    /// no fetch is in flight.
    pub async fn tick(&mut self) {
        if self.inflight.is_none() {
            return;
        }
        while let Some((epoch, event)) = self.events_rx.recv().await {
            if epoch != self.epoch {
                continue;
            }
            self.inflight = None;
            self.apply(event);
            break;
        }
    }

    fn apply(&mut self, event: DetailsEvent) {
        self.state = reduce(std::mem::take(&mut self.state), event);
    }
}

impl Drop for DetailsScreen {
    fn drop(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
    }
}
