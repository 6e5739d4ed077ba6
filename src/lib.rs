//! # RecipeHub Client Library
//!
//! This library provides a typed client for the RecipeHub recipe management
//! API. It consists of three main components:
//!
//! ## Client Module
//!
//! The [`client`] module maps each server resource (recipes, ingredients,
//! favorites, users, subscriptions, dietary preferences) onto a typed
//! client, all sharing one generic CRUD core and one connection pool.
//!
//! ## Session Module
//!
//! The [`session`] module exchanges credentials for a session against the
//! authentication endpoints and persists the signed-in identity across
//! process restarts.
//!
//! ## Config Module
//!
//! The [`config`] module collects every knob (base addresses, timeout,
//! retry budget, session file location) into one [`ClientConfig`] that can
//! also be read from the environment.
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipehub_client::client::LoginRequest;
//! use recipehub_client::{ClientConfig, RecipeHubClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RecipeHubClient::new(ClientConfig::from_env()?)?;
//!
//! let session = client.session.login(&LoginRequest {
//!     username: "dana".to_string(),
//!     password: "secret".to_string(),
//! }).await?;
//!
//! let mine = client.recipes.by_author(session.user_id).await?;
//! println!("you have {} recipes", mine.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod session;

pub use client::{ClientError, ClientResult, RecipeHubClient};
pub use config::ClientConfig;
pub use session::{Session, SessionManager, SessionStore};
