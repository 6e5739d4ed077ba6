use std::env;

use anyhow::Context;
use recipehub_client::client::LoginRequest;
use recipehub_client::{ClientConfig, RecipeHubClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment variables
    let config = ClientConfig::from_env().context("invalid RECIPEHUB_* configuration")?;
    tracing::info!("Connecting to RecipeHub at {}", config.base_url);
    let client = RecipeHubClient::new(config)?;

    // Sign in when credentials are provided, otherwise fall back to any
    // stored session
    let username = env::var("RECIPEHUB_USERNAME").ok();
    let password = env::var("RECIPEHUB_PASSWORD").ok();

    if let (Some(username), Some(password)) = (username, password) {
        tracing::info!("Validating RecipeHub credentials...");
        if let Err(e) = client.session.login(&LoginRequest { username, password }).await {
            tracing::error!("Login failed: {}", e);
            tracing::error!("Please verify:");
            tracing::error!("  - RECIPEHUB_BASE_URL is correct");
            tracing::error!("  - RECIPEHUB_USERNAME and RECIPEHUB_PASSWORD are correct");
            tracing::error!("  - RecipeHub server is running and accessible");
            std::process::exit(1);
        }
    } else if let Some(session) = client.session.current()? {
        tracing::info!("Resuming stored session for user: {}", session.username);
    } else {
        tracing::info!("No credentials provided; browsing anonymously");
    }

    // Fetch the recipe list and unit catalog concurrently as a smoke check
    let (recipes, units) = tokio::join!(client.recipes.list_all(), client.ingredients.units());
    let recipes = recipes?;
    let units = units?;

    tracing::info!(
        "Fetched {} recipes and {} measurement units",
        recipes.len(),
        units.len()
    );
    for recipe in recipes.iter().take(5) {
        tracing::info!(
            "  #{} {} ({} min total)",
            recipe.id,
            recipe.recipe_name,
            recipe.prep_time + recipe.cook_time
        );
    }

    Ok(())
}
