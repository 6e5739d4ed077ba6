#![allow(dead_code)]

use std::time::Duration;

use anyhow::Result;
use recipehub_client::{ClientConfig, RecipeHubClient};
use tempfile::TempDir;
use wiremock::MockServer;

/// A client wired to a fresh mock server, with the session file redirected
/// into a per-test temp directory so tests never touch each other's state.
pub struct TestEnvironment {
    pub server: MockServer,
    pub client: RecipeHubClient,
    pub session_dir: TempDir,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        Self::with_config(|_| {}).await
    }

    /// Like [`TestEnvironment::new`], but lets the test adjust the config
    /// after the mock server address has been filled in.
    pub async fn with_config<F>(tweak: F) -> Result<Self>
    where
        F: FnOnce(&mut ClientConfig),
    {
        let server = MockServer::start().await;
        let session_dir = TempDir::new()?;

        let mut config = ClientConfig {
            base_url: server.uri(),
            favorites_base_url: None,
            timeout: Duration::from_secs(5),
            max_get_retries: 0,
            session_file: session_dir.path().join("session.json"),
        };
        tweak(&mut config);

        let client = RecipeHubClient::new(config)?;
        Ok(Self {
            server,
            client,
            session_dir,
        })
    }
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

// JSON fixtures in the server's camelCase wire shape. Tests mutate the
// returned values where they need a specific field.

pub fn recipe_json(id: i32, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "recipeName": name,
        "description": "A test recipe",
        "prepTime": 15,
        "cookTime": 20,
        "servings": 4,
        "instructions": "Combine and cook.",
        "authorId": 3,
        "subscriptionId": 2,
        "author": user_json(3, "dana"),
        "subscription": subscription_json(2, "Premium", 9.99),
        "recipeIngredients": [
            {
                "recipeId": id,
                "ingredientId": 4,
                "quantity": 2.0,
                "unitId": 6,
                "ingredient": null
            }
        ],
        "favorites": null,
        "dietaryPreferences": null
    })
}

pub fn user_json(id: i32, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "username": username,
        "email": format!("{username}@example.com"),
        "password": null,
        "subscriptionId": 2,
        "joinDate": "2024-01-15T10:30:00",
        "alias": null,
        "totalRecipes": 12,
        "isDeleted": false,
        "deletedAt": null,
        "subscription": null,
        "favorites": null,
        "dietaryPreferences": null,
        "recipes": null
    })
}

pub fn subscription_json(id: i32, plan: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "subscriptionType": plan,
        "price": price,
        "users": null,
        "recipes": null
    })
}

pub fn ingredient_json(id: i32, name: &str, unit_id: i32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "ingredientName": name,
        "unitId": unit_id,
        "unit": null
    })
}

pub fn unit_json(id: i32, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "unitName": name,
        "ingredients": []
    })
}

pub fn favorite_json(id: i32, user_id: i32, recipe_id: i32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "userId": user_id,
        "recipeId": recipe_id,
        "user": null,
        "recipe": null
    })
}

pub fn session_json(user_id: i32, username: &str, subscription_id: Option<i32>) -> serde_json::Value {
    serde_json::json!({
        "userId": user_id,
        "username": username,
        "email": format!("{username}@example.com"),
        "subscriptionId": subscription_id
    })
}
