//! # RecipeHub HTTP Client
//!
//! This module provides a typed HTTP client for the RecipeHub API, covering
//! recipes, the ingredient catalog, favorites, users, subscriptions, and
//! dietary preferences.
//!
//! ## Modules
//!
//! - [`resource`] - Generic CRUD plumbing shared by every resource
//! - [`types`] - Type definitions for API requests and responses
//! - [`recipes`] / [`ingredients`] / [`favorites`] / [`users`] /
//!   [`subscriptions`] - Per-resource clients
//! - [`error`] - The error taxonomy all operations report through
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipehub_client::{ClientConfig, RecipeHubClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RecipeHubClient::new(ClientConfig::default())?;
//!
//! // Fetch a recipe with its nested records
//! let recipe = client.recipes.get(7).await?;
//! println!("{} takes {} minutes", recipe.recipe_name, recipe.prep_time + recipe.cook_time);
//!
//! // Mark it as a favorite
//! client.favorites.add(3, recipe.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod favorites;
pub mod ingredients;
pub mod recipes;
pub mod resource;
pub mod subscriptions;
pub mod types;
pub mod users;

pub use error::{ClientError, ClientResult};
pub use favorites::FavoriteClient;
pub use ingredients::IngredientClient;
pub use recipes::RecipeClient;
pub use subscriptions::{DietaryPreferenceClient, SubscriptionClient};
pub use types::*;
pub use users::UserClient;

use crate::config::ClientConfig;
use crate::session::{SessionManager, SessionStore};

/// One client per resource, sharing a single connection pool and the
/// settings from a [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct RecipeHubClient {
    pub recipes: RecipeClient,
    pub ingredients: IngredientClient,
    pub favorites: FavoriteClient,
    pub users: UserClient,
    pub subscriptions: SubscriptionClient,
    pub dietary_preferences: DietaryPreferenceClient,
    pub session: SessionManager,
}

impl RecipeHubClient {
    /// Builds the client set from a validated configuration. Fails with a
    /// validation error on a bad config and a network error if the HTTP
    /// client cannot be constructed.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("recipehub-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Network)?;

        let api_root = config.api_root();
        let favorites_root = config.favorites_root();
        let retries = config.max_get_retries;

        Ok(Self {
            recipes: RecipeClient::new(http.clone(), api_root.clone(), retries),
            ingredients: IngredientClient::new(http.clone(), api_root.clone(), retries),
            favorites: FavoriteClient::new(http.clone(), favorites_root, retries),
            users: UserClient::new(http.clone(), api_root.clone(), retries),
            subscriptions: SubscriptionClient::new(http.clone(), api_root.clone(), retries),
            dietary_preferences: DietaryPreferenceClient::new(http.clone(), api_root.clone(), retries),
            session: SessionManager::new(
                http,
                api_root,
                retries,
                SessionStore::new(config.session_file),
            ),
        })
    }
}
