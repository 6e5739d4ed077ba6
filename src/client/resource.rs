//! Generic CRUD access to one server-side resource.
//!
//! Every specialized client in this crate is a thin wrapper around
//! [`ResourceClient`], which maps the abstract operations (list, get,
//! create, update, delete) onto HTTP verbs against
//! `{base_address}/{resource_name}`. The wrapper adds resource-specific
//! query shapes; the translation to the wire lives here and nowhere else.

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::error::{ClientError, ClientResult};

/// CRUD client bound to a single resource name.
///
/// `T` is the entity type the resource serves. Operations that exchange a
/// different payload type (sub-resources, association endpoints) go through
/// the untyped helpers [`get_json`](ResourceClient::get_json),
/// [`post_json`](ResourceClient::post_json) and
/// [`delete_path`](ResourceClient::delete_path).
///
/// GET requests honor a bounded retry budget; it defaults to zero and only
/// ever re-sends idempotent reads, never writes.
#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    http: reqwest::Client,
    base_url: String,
    resource: &'static str,
    max_get_retries: u32,
    _entity: PhantomData<fn() -> T>,
}

impl<T> ResourceClient<T> {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: String,
        resource: &'static str,
        max_get_retries: u32,
    ) -> Self {
        Self {
            http,
            base_url,
            resource,
            max_get_retries,
            _entity: PhantomData,
        }
    }

    /// Resource root, e.g. `https://host/Recipe`.
    fn root(&self) -> String {
        format!("{}/{}", self.base_url, self.resource)
    }

    /// Path below the resource root, e.g. `https://host/Recipe/author/3`.
    fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.resource, path)
    }

    /// GET an arbitrary path below the resource root and parse the body.
    pub(crate) async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        let response = self.send_get(&self.url(path)).await?;
        read_json(response).await
    }

    /// POST a JSON body to a path below the resource root.
    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ClientError::Network)?;
        read_json(response).await
    }

    /// DELETE a path below the resource root; no response body expected.
    pub(crate) async fn delete_path(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!("DELETE {}", url);
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(ClientError::Network)?;
        expect_success(response).await
    }

    /// Send a GET, re-sending within the retry budget on transport errors
    /// and gateway-style server errors (502/503/504).
    async fn send_get(&self, url: &str) -> ClientResult<reqwest::Response> {
        let mut attempt: u32 = 0;
        loop {
            tracing::debug!("GET {}", url);
            match self.http.get(url).send().await {
                Ok(response) => {
                    if attempt < self.max_get_retries && is_retryable(response.status()) {
                        tracing::warn!(
                            "GET {} returned {}, retry {}/{}",
                            url,
                            response.status(),
                            attempt + 1,
                            self.max_get_retries
                        );
                    } else {
                        return Ok(response);
                    }
                }
                Err(err) => {
                    if attempt < self.max_get_retries {
                        tracing::warn!(
                            "GET {} failed ({}), retry {}/{}",
                            url,
                            err,
                            attempt + 1,
                            self.max_get_retries
                        );
                    } else {
                        return Err(ClientError::Network(err));
                    }
                }
            }
            tokio::time::sleep(retry_delay(attempt)).await;
            attempt += 1;
        }
    }
}

impl<T: DeserializeOwned> ResourceClient<T> {
    /// GET the resource root and parse the array of entities.
    pub(crate) async fn list_all(&self) -> ClientResult<Vec<T>> {
        let response = self.send_get(&self.root()).await?;
        read_json(response).await
    }

    /// GET `{resource}/{id}`. A missing entity surfaces as an API error
    /// with status 404.
    pub(crate) async fn get_by_id(&self, id: i32) -> ClientResult<T> {
        let response = self.send_get(&self.url(&id.to_string())).await?;
        read_json(response).await
    }

    /// GET the parameterized path `{resource}/{segment}/{id}` used by the
    /// filtered listings (recipes by author, ingredients by unit, ...).
    pub(crate) async fn list_filtered(&self, segment: &str, id: i32) -> ClientResult<Vec<T>> {
        let response = self.send_get(&self.url(&format!("{segment}/{id}"))).await?;
        read_json(response).await
    }

    /// POST a new entity; the server assigns the identifier and returns the
    /// stored record.
    pub(crate) async fn create<B: Serialize + ?Sized>(&self, body: &B) -> ClientResult<T> {
        let url = self.root();
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ClientError::Network)?;
        read_json(response).await
    }

    /// PUT `{resource}/{id}` and return the updated entity.
    pub(crate) async fn update<B: Serialize + ?Sized>(&self, id: i32, body: &B) -> ClientResult<T> {
        let url = self.url(&id.to_string());
        tracing::debug!("PUT {}", url);
        let response = self
            .http
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(ClientError::Network)?;
        read_json(response).await
    }

    /// DELETE `{resource}/{id}`; fails with an API error if the entity does
    /// not exist.
    pub(crate) async fn delete_by_id(&self, id: i32) -> ClientResult<()> {
        self.delete_path(&id.to_string()).await
    }
}

/// Check the status and parse a JSON body, keeping the failure classes
/// apart: non-success statuses carry the body text as the error message,
/// unparseable success bodies are decode errors.
async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> ClientResult<R> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error response".to_string());
        tracing::error!("request failed with status {}: {}", status, message);
        return Err(ClientError::Api { status, message });
    }
    response.json().await.map_err(ClientError::from_read)
}

/// Like [`read_json`] for operations without a response body.
async fn expect_success(response: reqwest::Response) -> ClientResult<()> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error response".to_string());
        tracing::error!("request failed with status {}: {}", status, message);
        return Err(ClientError::Api { status, message });
    }
    Ok(())
}

fn is_retryable(status: StatusCode) -> bool {
    matches!(status.as_u16(), 502 | 503 | 504)
}

fn retry_delay(attempt: u32) -> Duration {
    // 200ms, 400ms, 800ms, ... capped at ~3s
    Duration::from_millis(200u64 << attempt.min(4))
}
