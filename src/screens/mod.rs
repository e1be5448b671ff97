//! # Screen Controllers
//!
//! Each screen is modeled as an explicit state struct plus a reducer-style
//! transition function `(State, Event) -> State`, owned by a controller that
//! spawns the screen's network call and applies its completion.
//!
//! ## Modules
//!
//! - [`list`] - Search query, results, and loading/error state
//! - [`details`] - Single-recipe detail state keyed by recipe id
//!
//! ## Concurrency discipline
//!
//! A controller allows a new trigger while a call is in flight, but only the
//! most recent trigger's completion may write state. Every trigger bumps an
//! epoch counter and cancels the previous task; completion events are tagged
//! with their epoch and discarded when stale. Dropping a controller cancels
//! its in-flight call, so a torn-down screen never applies a late result.

pub mod details;
pub mod list;

pub use details::{DetailsScreen, DetailsState};
pub use list::{ListScreen, ListState};
