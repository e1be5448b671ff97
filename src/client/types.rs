//! Raw wire shapes for the remote recipe API.
//!
//! These structs mirror the third-party JSON payloads and are never shown to
//! the UI directly; they exist only as input to the mapping layer in
//! [`crate::model`]. Fields beyond `id` and `title` are optional on the wire
//! and may be absent, so they deserialize with defaults.
//!
//! ## Key Types
//!
//! - [`SearchResponse`] - Wrapper around the search endpoint's `results` list
//! - [`SearchResult`] - One search hit with optional summary/instructions/ingredients
//! - [`RecipeInformation`] - Full detail payload for a single recipe
//! - [`ExtendedIngredient`] - One detail-endpoint ingredient with its full
//!   `original` description text (e.g. "2 cups of flour")

use serde::{Deserialize, Serialize};

/// Response envelope of `GET /recipes/complexSearch`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching recipes for the current query
    pub results: Vec<SearchResult>,
}

/// A single recipe hit from the search endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    /// Unique recipe identifier, stable across search and detail lookup
    pub id: i32,
    /// Recipe title
    pub title: String,
    /// Recipe image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Short description text
    #[serde(default)]
    pub summary: Option<String>,
    /// Cooking instructions
    #[serde(default)]
    pub instructions: Option<String>,
    /// Ingredient descriptions, when the endpoint includes them
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
}

/// Response of `GET /recipes/{id}/information`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeInformation {
    /// Unique recipe identifier
    pub id: i32,
    /// Recipe title
    pub title: String,
    /// Recipe image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Short description text
    #[serde(default)]
    pub summary: Option<String>,
    /// Cooking instructions
    #[serde(default)]
    pub instructions: Option<String>,
    /// Full ingredient list; each entry carries the complete description text
    #[serde(rename = "extendedIngredients", default)]
    pub extended_ingredients: Option<Vec<ExtendedIngredient>>,
}

/// One ingredient from the detail endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtendedIngredient {
    pub id: i32,
    /// The full ingredient description (e.g. "2 cups of flour")
    pub original: String,
}
