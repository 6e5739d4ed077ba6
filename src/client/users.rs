//! User account operations.

use crate::client::error::ClientResult;
use crate::client::resource::ResourceClient;
use crate::client::types::{NewUser, User, UserUpdate};

/// Client for the `/User` resource.
#[derive(Debug, Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String, max_get_retries: u32) -> Self {
        Self {
            inner: ResourceClient::new(http, base_url, "User", max_get_retries),
        }
    }

    /// Fetches every user.
    pub async fn list_all(&self) -> ClientResult<Vec<User>> {
        self.inner.list_all().await
    }

    /// Fetches a single user by id.
    pub async fn get(&self, id: i32) -> ClientResult<User> {
        self.inner.get_by_id(id).await
    }

    /// Creates a user account and returns the stored record.
    pub async fn create(&self, user: &NewUser) -> ClientResult<User> {
        self.inner.create(user).await
    }

    /// Applies a partial update to a user.
    pub async fn update(&self, id: i32, update: &UserUpdate) -> ClientResult<User> {
        self.inner.update(id, update).await
    }

    /// Deletes a user by id.
    pub async fn delete(&self, id: i32) -> ClientResult<()> {
        self.inner.delete_by_id(id).await
    }
}
