//! List screen: search query, results, and loading/error state.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::client::RecipeClient;
use crate::model::Recipe;

/// Error text shown when a search attempt fails.
pub const SEARCH_FAILED: &str = "Failed to fetch recipes. Please try again.";

/// Observable state of the list screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub query: String,
    pub results: Vec<Recipe>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Everything that can change the list screen's state.
#[derive(Debug)]
pub enum ListEvent {
    /// The user edited the query text; never triggers a network call.
    QueryChanged(String),
    /// A search was explicitly triggered.
    SearchStarted,
    /// The in-flight search returned mapped recipes.
    SearchSucceeded(Vec<Recipe>),
    /// The in-flight search failed (network, timeout, or non-2xx).
    SearchFailed,
}

/// Pure state transition for the list screen.
pub fn reduce(state: ListState, event: ListEvent) -> ListState {
    match event {
        ListEvent::QueryChanged(query) => ListState { query, ..state },
        ListEvent::SearchStarted => ListState {
            loading: true,
            error: None,
            ..state
        },
        ListEvent::SearchSucceeded(results) => ListState {
            results,
            loading: false,
            ..state
        },
        ListEvent::SearchFailed => ListState {
            results: Vec::new(),
            loading: false,
            error: Some(SEARCH_FAILED.to_string()),
            ..state
        },
    }
}

/// Controller for the list screen.
///
/// Owns the state and the in-flight search task. Searches run only on an
/// explicit [`trigger_search`](ListScreen::trigger_search); editing the query
/// is a pure state update.
pub struct ListScreen {
    state: ListState,
    client: Arc<RecipeClient>,
    events_tx: mpsc::UnboundedSender<(u64, ListEvent)>,
    events_rx: mpsc::UnboundedReceiver<(u64, ListEvent)>,
    epoch: u64,
    inflight: Option<CancellationToken>,
}

impl ListScreen {
    pub fn new(client: Arc<RecipeClient>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: ListState::default(),
            client,
            events_tx,
            events_rx,
            epoch: 0,
            inflight: None,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Updates the query text. No network call is made.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.apply(ListEvent::QueryChanged(query.into()));
    }

    /// Id of the result at `index`, for routing to the details screen.
    /// Does not mutate state.
    pub fn selected_id(&self, index: usize) -> Option<i32> {
        self.state.results.get(index).map(|recipe| recipe.id)
    }

    /// Starts a search for the current query.
    ///
    /// A trigger while a search is in flight supersedes it: the older task is
    /// cancelled and its completion, should it still arrive, is discarded, so
    /// the most recent trigger always wins.
    pub fn trigger_search(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
        self.epoch += 1;
        let epoch = self.epoch;
        let token = CancellationToken::new();
        self.inflight = Some(token.clone());
        self.apply(ListEvent::SearchStarted);

        let client = Arc::clone(&self.client);
        let query = self.state.query.clone();
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => return,
                outcome = client.search_recipes(&query) => outcome,
            };
            let event = match outcome {
                Ok(raw) => {
                    ListEvent::SearchSucceeded(raw.iter().map(Recipe::from_search_result).collect())
                }
                Err(e) => {
                    tracing::warn!("Recipe search failed: {:#}", e);
                    ListEvent::SearchFailed
                }
            };
            // Send fails only when the screen is already gone.
            let _ = events_tx.send((epoch, event));
        });
    }

    /// Waits for the current search to complete and applies its result.
    ///
    /// Completions from superseded triggers are skipped. Returns immediately
    /// when no search is in flight.
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

    fn apply(&mut self, event: ListEvent) {
        self.state = reduce(std::mem::take(&mut self.state), event);
    }
}

impl Drop for ListScreen {
    fn drop(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
    }
}
