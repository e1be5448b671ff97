//! Domain model and the mapping from raw API responses into it.
//!
//! [`Recipe`] is the only shape the UI layer ever sees. The constructors in
//! this module are the single place that turns optional remote fields into
//! guaranteed-present display text: every `Recipe` they produce has all five
//! string fields populated, substituting fixed placeholders where the source
//! lacks data. Mapping is pure and total; there is no error path.

use crate::client::types::{RecipeInformation, SearchResult};

/// Placeholder title, used only by the fallback recipe.
pub const NO_TITLE: &str = "No title available";
/// Placeholder shown when a recipe has no summary.
pub const NO_DESCRIPTION: &str = "No description available";
/// Placeholder shown when a recipe has no ingredient list.
pub const NO_INGREDIENTS: &str = "No ingredients available";
/// Placeholder shown when a recipe has no instructions.
pub const NO_STEPS: &str = "No steps available";

/// Separator used to join ingredient descriptions into one display string.
pub const INGREDIENT_SEPARATOR: &str = ", ";

/// A recipe as presented to the UI.
///
/// Immutable value, constructed fresh from every search response item and
/// every successful detail fetch. All string fields are always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Ingredient descriptions joined with `", "`.
    pub ingredients: String,
    pub steps: String,
    /// Image URL, or empty string when the source has none.
    pub image: String,
}

impl Recipe {
    /// Maps one search hit into a displayable recipe.
    pub fn from_search_result(raw: &SearchResult) -> Self {
        Self {
            id: raw.id,
            title: raw.title.clone(),
            description: or_placeholder(raw.summary.as_deref(), NO_DESCRIPTION),
            ingredients: join_or_placeholder(raw.ingredients.clone()),
            steps: or_placeholder(raw.instructions.as_deref(), NO_STEPS),
            image: raw.image.clone().unwrap_or_default(),
        }
    }

    /// Maps a detail response into a displayable recipe.
    ///
    /// Ingredients come from the `original` full-text description of each
    /// extended ingredient.
    pub fn from_information(raw: &RecipeInformation) -> Self {
        let originals = raw
            .extended_ingredients
            .as_ref()
            .map(|list| list.iter().map(|i| i.original.clone()).collect::<Vec<_>>());
        Self {
            id: raw.id,
            title: raw.title.clone(),
            description: or_placeholder(raw.summary.as_deref(), NO_DESCRIPTION),
            ingredients: join_or_placeholder(originals),
            steps: or_placeholder(raw.instructions.as_deref(), NO_STEPS),
            image: raw.image.clone().unwrap_or_default(),
        }
    }

    /// Placeholder-only recipe for an id whose detail fetch failed.
    pub fn fallback(id: i32) -> Self {
        Self {
            id,
            title: NO_TITLE.to_string(),
            description: NO_DESCRIPTION.to_string(),
            ingredients: NO_INGREDIENTS.to_string(),
            steps: NO_STEPS.to_string(),
            image: String::new(),
        }
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(text) => text.to_string(),
        None => placeholder.to_string(),
    }
}

// An empty list would join to "", which reads as missing data to the UI,
// so it takes the same placeholder as an absent list.
fn join_or_placeholder(items: Option<Vec<String>>) -> String {
    match items {
        Some(list) if !list.is_empty() => list.join(INGREDIENT_SEPARATOR),
        _ => NO_INGREDIENTS.to_string(),
    }
}
