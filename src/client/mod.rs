//! # Recipe API HTTP Client
//!
//! This module provides the HTTP client for the remote recipe-search API,
//! covering the two operations the application needs: full-text recipe
//! search and single-recipe information lookup.
//!
//! ## Modules
//!
//! - [`auth`] - API-key credential handling
//! - [`client`] - HTTP client implementation for the two endpoints
//! - [`types`] - Raw wire shapes for API responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_book::client::{ApiCredentials, RecipeClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let credentials = ApiCredentials::from_env()?;
//! let client = RecipeClient::new("https://api.spoonacular.com".to_string(), credentials);
//!
//! // Search for recipes
//! let results = client.search_recipes("pasta").await?;
//! println!("Found {} recipes", results.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use auth::ApiCredentials;
pub use client::RecipeClient;
pub use types::*;
