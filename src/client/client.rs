use crate::client::{
    auth::ApiCredentials,
    types::*,
};
use anyhow::Result;
use reqwest::Client;

pub struct RecipeClient {
    base_url: String,
    client: Client,
    credentials: ApiCredentials,
}

impl RecipeClient {
    pub fn new(base_url: String, credentials: ApiCredentials) -> Self {
        Self {
            client: Client::new(),
            base_url,
            credentials,
        }
    }

    // Recipe operations
    pub async fn search_recipes(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = format!(
            "{}/recipes/complexSearch?query={}&apiKey={}",
            self.base_url,
            urlencoding::encode(query),
            self.credentials.key()
        );

        tracing::debug!("Searching recipes for query: {:?}", query);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error searching recipes: {}", e);
                anyhow::anyhow!("Failed to connect to recipe API: {}", e)
            })?;

        let status = response.status();
        tracing::debug!("Search response status: {}", status);

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("Recipe search failed with status {}: {}", status, error_body);

            match status.as_u16() {
                401 => anyhow::bail!("API key rejected. Check your recipe API credentials."),
                402 => anyhow::bail!("Daily API quota exhausted. Try again tomorrow or upgrade the plan."),
                404 => anyhow::bail!("Search endpoint not found. Check the API base URL."),
                500..=599 => anyhow::bail!("Recipe API server error ({}): {}", status, error_body),
                _ => anyhow::bail!("Failed to search recipes with status {}: {}", status, error_body),
            }
        }

        let search: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse search response: {}", e);
            anyhow::anyhow!("Invalid response format from recipe API: {}", e)
        })?;

        tracing::debug!("Search returned {} results", search.results.len());
        Ok(search.results)
    }

    pub async fn get_recipe_information(&self, id: i32) -> Result<RecipeInformation> {
        let url = format!(
            "{}/recipes/{}/information?apiKey={}",
            self.base_url,
            id,
            self.credentials.key()
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to get recipe information: {}", response.status());
        }

        let information = response.json().await?;
        Ok(information)
    }
}
