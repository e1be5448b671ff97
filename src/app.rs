//! Navigation shell wiring the list screen to the details screen.

use std::sync::Arc;

use crate::client::RecipeClient;
use crate::screens::{DetailsScreen, ListScreen};

/// The two routes of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Details { id: i32 },
}

/// Hosts the screens and routes between them.
///
/// The list screen lives for the whole application lifetime, so its query
/// and results survive back-navigation. A details screen exists only while
/// its route is active; leaving it drops the screen, which cancels any
/// fetch still in flight.
pub struct RecipeApp {
    client: Arc<RecipeClient>,
    route: Route,
    list: ListScreen,
    details: Option<DetailsScreen>,
}

impl RecipeApp {
    pub fn new(client: Arc<RecipeClient>) -> Self {
        Self {
            list: ListScreen::new(Arc::clone(&client)),
            client,
            route: Route::List,
            details: None,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn list(&self) -> &ListScreen {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListScreen {
        &mut self.list
    }

    pub fn details(&self) -> Option<&DetailsScreen> {
        self.details.as_ref()
    }

    pub fn details_mut(&mut self) -> Option<&mut DetailsScreen> {
        self.details.as_mut()
    }

    /// Opens the details route for the list result at `index`.
    ///
    /// Returns `false` when the index resolves to no result, in which case
    /// the route is unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        match self.list.selected_id(index) {
            Some(id) => {
                self.open_recipe(id);
                true
            }
            None => false,
        }
    }

    /// Navigates to `details/{id}`, starting the detail fetch.
    pub fn open_recipe(&mut self, id: i32) {
        self.details = Some(DetailsScreen::new(id, Arc::clone(&self.client)));
        self.route = Route::Details { id };
    }

    /// Returns to the list route. List state is preserved.
    pub fn go_back(&mut self) {
        self.details = None;
        self.route = Route::List;
    }
}
