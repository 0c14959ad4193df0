use anyhow::Result;
use reqwest::Client;

use crate::client::types::*;

/// HTTP client for the proxy's `/api/search` surface.
pub struct RecipeApi {
    base_url: String,
    client: Client,
}

impl RecipeApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Name search (`complexSearch`). Zero results is a successful response
    /// with an empty `results` array, not an error.
    pub async fn search_by_name(&self, query: &str) -> Result<SearchResponse> {
        let url = format!(
            "{}/api/search?endpoint=complexSearch&query={}",
            self.base_url,
            urlencoding::encode(query)
        );

        tracing::debug!("searching recipes by name: {}", query);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to search recipes: {}", response.status());
        }

        let results = response.json().await?;
        Ok(results)
    }

    /// Ingredient search (`findByIngredients`). Takes a comma-separated list
    /// of ingredient names; the upstream returns a bare array of summaries.
    pub async fn search_by_ingredients(&self, ingredients: &str) -> Result<Vec<RecipeSummary>> {
        let url = format!(
            "{}/api/search?endpoint=findByIngredients&ingredients={}",
            self.base_url,
            urlencoding::encode(ingredients)
        );

        tracing::debug!("searching recipes by ingredients: {}", ingredients);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to search recipes by ingredients: {}", response.status());
        }

        let results = response.json().await?;
        Ok(results)
    }

    /// Fetches the full detail for one recipe (`information`).
    pub async fn get_recipe(&self, id: i64) -> Result<RecipeDetail> {
        let url = format!("{}/api/search?endpoint=information&query={}", self.base_url, id);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to get recipe {}: {}", id, response.status());
        }

        let recipe = response.json().await?;
        Ok(recipe)
    }
}
