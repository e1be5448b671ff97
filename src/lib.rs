//! # Recipe Book
//!
//! A thin client for a Spoonacular-style recipe-search API. It consists of
//! three layers:
//!
//! ## Client Module
//!
//! The [`client`] module issues the two remote operations (search and
//! get-information) and returns the raw API shapes, with the API key handled
//! as an injected credential.
//!
//! ## Model Module
//!
//! The [`model`] module defines the domain [`Recipe`] and the mapping from
//! raw API responses into it. Every field of a mapped `Recipe` is guaranteed
//! populated; missing remote data is replaced by fixed placeholder text.
//!
//! ## Screens and Navigation
//!
//! The [`screens`] module models the list and details screens as explicit
//! state machines driven by events, and [`app`] wires them together under
//! two routes (`list` and `details/{id}`).
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use recipe_book::{ApiCredentials, RecipeApp, RecipeClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let credentials = ApiCredentials::new("my-api-key".to_string());
//! let client = Arc::new(RecipeClient::new(
//!     "https://api.spoonacular.com".to_string(),
//!     credentials,
//! ));
//!
//! let mut app = RecipeApp::new(client);
//! app.list_mut().set_query("pasta");
//! app.list_mut().trigger_search();
//! app.list_mut().tick().await;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod client;
pub mod model;
pub mod screens;

pub use app::{RecipeApp, Route};
pub use client::{ApiCredentials, RecipeClient};
pub use model::Recipe;
