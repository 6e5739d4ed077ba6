//! Recipe resource operations.
//!
//! Wraps the generic resource client with the recipe-specific pieces: typed
//! create/update commands, the author and subscription filter endpoints, and
//! keyword search.

use tracing::debug;

use crate::client::error::ClientResult;
use crate::client::resource::ResourceClient;
use crate::client::types::{NewRecipe, Recipe, RecipeUpdate};

/// Client for the `/Recipe` resource.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    inner: ResourceClient<Recipe>,
}

impl RecipeClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String, max_get_retries: u32) -> Self {
        Self {
            inner: ResourceClient::new(http, base_url, "Recipe", max_get_retries),
        }
    }

    /// Fetches every recipe.
    pub async fn list_all(&self) -> ClientResult<Vec<Recipe>> {
        self.inner.list_all().await
    }

    /// Fetches a single recipe by id, including its nested author,
    /// subscription, and ingredient rows.
    pub async fn get(&self, id: i32) -> ClientResult<Recipe> {
        self.inner.get_by_id(id).await
    }

    /// Creates a recipe and returns the server's copy with its assigned id.
    pub async fn create(&self, recipe: &NewRecipe) -> ClientResult<Recipe> {
        recipe.validate()?;
        debug!(name = %recipe.recipe_name, "creating recipe");
        self.inner.create(recipe).await
    }

    /// Updates a recipe. The command is validated, then denormalized into
    /// the full nested payload the server requires for PUTs.
    pub async fn update(&self, id: i32, update: RecipeUpdate) -> ClientResult<Recipe> {
        update.validate()?;
        let payload = update.into_payload(id);
        debug!(id, "updating recipe");
        self.inner.update(id, &payload).await
    }

    /// Deletes a recipe by id.
    pub async fn delete(&self, id: i32) -> ClientResult<()> {
        self.inner.delete_by_id(id).await
    }

    /// Fetches the recipes belonging to one author.
    pub async fn by_author(&self, author_id: i32) -> ClientResult<Vec<Recipe>> {
        self.inner.list_filtered("author", author_id).await
    }

    /// Fetches the recipes available under a subscription tier.
    pub async fn by_subscription(&self, subscription_id: i32) -> ClientResult<Vec<Recipe>> {
        self.inner.list_filtered("subscription", subscription_id).await
    }

    /// Searches recipes by name. The term is percent-encoded, so spaces and
    /// punctuation are safe to pass through.
    pub async fn search(&self, term: &str) -> ClientResult<Vec<Recipe>> {
        let path = format!("search?searchTerm={}", urlencoding::encode(term));
        self.inner.get_json(&path).await
    }
}
