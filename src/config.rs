//! Client configuration.
//!
//! All resource clients used to be pointed at their own hard-coded base
//! addresses; this module replaces that with a single [`ClientConfig`] built
//! once at startup and handed to [`RecipeHubClient::new`](crate::RecipeHubClient::new).

use std::path::PathBuf;
use std::time::Duration;

use crate::client::error::{ClientError, ClientResult};

/// Default API base address, matching the backend's development profile.
pub const DEFAULT_BASE_URL: &str = "https://localhost:7062";

/// Connection timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address for every resource.
    pub base_url: String,

    /// Optional separate address for the favorites service. Some
    /// deployments host it apart from the main API; when unset, favorites
    /// use `base_url` like everything else.
    pub favorites_base_url: Option<String>,

    /// Per-request timeout; a hung connection surfaces as a network error.
    pub timeout: Duration,

    /// Bounded retry budget for GET requests. Zero disables retrying, which
    /// is the default; non-idempotent verbs are never retried.
    pub max_get_retries: u32,

    /// Where the session file lives.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from `RECIPEHUB_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> ClientResult<Self> {
        let config = Self {
            base_url: std::env::var("RECIPEHUB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),

            favorites_base_url: std::env::var("RECIPEHUB_FAVORITES_BASE_URL").ok(),

            timeout: std::env::var("RECIPEHUB_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| {
                    ClientError::Validation(
                        "RECIPEHUB_TIMEOUT_SECS must be a whole number of seconds".to_string(),
                    )
                })?,

            max_get_retries: std::env::var("RECIPEHUB_MAX_GET_RETRIES")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .map_err(|_| {
                    ClientError::Validation(
                        "RECIPEHUB_MAX_GET_RETRIES must be a whole number".to_string(),
                    )
                })?,

            session_file: std::env::var("RECIPEHUB_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that could never make a successful request.
    pub fn validate(&self) -> ClientResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::Validation("base URL cannot be empty".to_string()));
        }
        if let Some(favorites) = &self.favorites_base_url {
            if favorites.trim().is_empty() {
                return Err(ClientError::Validation(
                    "favorites base URL cannot be empty when set".to_string(),
                ));
            }
        }
        if self.timeout.is_zero() {
            return Err(ClientError::Validation("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// `base_url` with any trailing slash removed, ready for path joining.
    pub(crate) fn api_root(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }

    /// Address the favorites client should use: the override if present,
    /// otherwise the shared base.
    pub(crate) fn favorites_root(&self) -> String {
        self.favorites_base_url
            .as_deref()
            .unwrap_or(&self.base_url)
            .trim_end_matches('/')
            .to_string()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            favorites_base_url: None,
            timeout: DEFAULT_TIMEOUT,
            max_get_retries: 0,
            session_file: default_session_file(),
        }
    }
}

fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("recipehub")
        .join("session.json")
}
