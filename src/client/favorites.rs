//! Favorite operations.
//!
//! Favorites are keyed by the (user, recipe) pair rather than by their row
//! id, and the resource can live on a different host than the rest of the
//! API (see [`ClientConfig::favorites_base_url`]).
//!
//! [`ClientConfig::favorites_base_url`]: crate::config::ClientConfig::favorites_base_url

use tracing::debug;

use crate::client::error::ClientResult;
use crate::client::resource::ResourceClient;
use crate::client::types::{Favorite, NewFavorite};

/// Client for the `/favorites` resource.
#[derive(Debug, Clone)]
pub struct FavoriteClient {
    inner: ResourceClient<Favorite>,
}

impl FavoriteClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String, max_get_retries: u32) -> Self {
        Self {
            inner: ResourceClient::new(http, base_url, "favorites", max_get_retries),
        }
    }

    /// Fetches a user's favorites.
    pub async fn for_user(&self, user_id: i32) -> ClientResult<Vec<Favorite>> {
        self.inner.list_filtered("user", user_id).await
    }

    /// Marks a recipe as a favorite for a user and returns the stored row.
    pub async fn add(&self, user_id: i32, recipe_id: i32) -> ClientResult<Favorite> {
        debug!(user_id, recipe_id, "adding favorite");
        self.inner.create(&NewFavorite { user_id, recipe_id }).await
    }

    /// Removes a favorite by its (user, recipe) pair.
    pub async fn remove(&self, user_id: i32, recipe_id: i32) -> ClientResult<()> {
        debug!(user_id, recipe_id, "removing favorite");
        self.inner.delete_path(&format!("{user_id}/{recipe_id}")).await
    }
}
