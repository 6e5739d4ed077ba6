//! Session handling for the RecipeHub API.
//!
//! Authentication is identity-based rather than token-based: the login and
//! register endpoints return the user's identity fields, and this module
//! persists them as a small JSON file so the signed-in state survives
//! process restarts. Requests carry no Authorization header; ownership is
//! expressed through ids in request paths and bodies.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::error::{ClientError, ClientResult};
use crate::client::resource::ResourceClient;
use crate::client::types::{LoginRequest, RegisterRequest, SessionInfo, UserProfile};

/// The signed-in user's identity, as returned by the server and persisted
/// between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub subscription_id: Option<i32>,
}

/// # Session File Store
///
/// Reads and writes the persisted session. The file holds only identity
/// fields (never a password or token) in the same camelCase shape the
/// server uses, pretty-printed for hand inspection.
///
/// ## Location
///
/// Defaults to `<platform data dir>/recipehub/session.json`; override it
/// through [`ClientConfig::session_file`](crate::config::ClientConfig::session_file).
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored session, if one exists. A missing file is the
    /// normal signed-out state, not an error.
    pub fn load(&self) -> ClientResult<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(ClientError::Storage(format!(
                    "failed to read session file {}: {err}",
                    self.path.display()
                )))
            }
        };
        let session = serde_json::from_str(&raw).map_err(|err| {
            ClientError::Storage(format!(
                "session file {} is corrupt: {err}",
                self.path.display()
            ))
        })?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                ClientError::Storage(format!(
                    "failed to create session directory {}: {err}",
                    parent.display()
                ))
            })?;
        }
        let raw = serde_json::to_string_pretty(session).map_err(|err| {
            ClientError::Storage(format!("failed to serialize session: {err}"))
        })?;
        fs::write(&self.path, raw).map_err(|err| {
            ClientError::Storage(format!(
                "failed to write session file {}: {err}",
                self.path.display()
            ))
        })?;
        debug!("session saved to {}", self.path.display());
        Ok(())
    }

    /// Removes the session file. Clearing an already signed-out store is a
    /// no-op.
    pub fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ClientError::Storage(format!(
                "failed to remove session file {}: {err}",
                self.path.display()
            ))),
        }
    }
}

/// # RecipeHub Session Manager
///
/// Exchanges credentials for a session against the `/Auth` endpoints and
/// keeps the result in a [`SessionStore`].
///
/// ## Failure handling
///
/// A failed login leaves any previously stored session untouched; only a
/// successful response replaces it. Credentials are validated before the
/// request goes out, so empty fields never reach the server.
#[derive(Debug, Clone)]
pub struct SessionManager {
    auth: ResourceClient<SessionInfo>,
    store: SessionStore,
}

impl SessionManager {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: String,
        max_get_retries: u32,
        store: SessionStore,
    ) -> Self {
        Self {
            auth: ResourceClient::new(http, base_url, "Auth", max_get_retries),
            store,
        }
    }

    /// Signs in and persists the returned identity.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<Session> {
        request.validate()?;
        info!("attempting login for user: {}", request.username);

        let identity: SessionInfo = self.post_auth("login", request).await?;
        let session = Session {
            user_id: identity.user_id,
            username: identity.username,
            email: identity.email,
            subscription_id: identity.subscription_id,
        };
        self.store.save(&session)?;
        info!("login successful for user: {}", session.username);
        Ok(session)
    }

    /// Creates an account and persists the returned identity. The register
    /// response carries no subscription yet, so the stored session has none
    /// until the next login.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<Session> {
        request.validate()?;
        info!("registering user: {}", request.username);

        let identity: SessionInfo = self.post_auth("register", request).await?;
        let session = Session {
            user_id: identity.user_id,
            username: identity.username,
            email: identity.email,
            subscription_id: None,
        };
        self.store.save(&session)?;
        info!("registration successful for user: {}", session.username);
        Ok(session)
    }

    /// Signs out by removing the persisted session.
    pub fn logout(&self) -> ClientResult<()> {
        self.store.clear()?;
        info!("session cleared");
        Ok(())
    }

    /// The persisted session, if any.
    pub fn current(&self) -> ClientResult<Option<Session>> {
        self.store.load()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.load(), Ok(Some(_)))
    }

    /// Fetches a user's public profile from `/Auth/profile/{id}`.
    pub async fn profile(&self, user_id: i32) -> ClientResult<UserProfile> {
        self.auth.get_json(&format!("profile/{user_id}")).await
    }

    async fn post_auth<B: Serialize>(&self, endpoint: &str, body: &B) -> ClientResult<SessionInfo> {
        let result = self.auth.post_json(endpoint, body).await;
        if let Err(ClientError::Network(err)) = &result {
            tracing::error!("network error during authentication: {}", err);
        }
        result
    }
}
