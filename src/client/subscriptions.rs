//! Subscription tier management and dietary preference lookups. Both are
//! small catalogs; only subscriptions are writable.

use crate::client::error::ClientResult;
use crate::client::resource::ResourceClient;
use crate::client::types::{DietaryPreference, NewSubscription, Subscription};

/// Client for the `/Subscription` resource.
#[derive(Debug, Clone)]
pub struct SubscriptionClient {
    inner: ResourceClient<Subscription>,
}

impl SubscriptionClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String, max_get_retries: u32) -> Self {
        Self {
            inner: ResourceClient::new(http, base_url, "Subscription", max_get_retries),
        }
    }

    /// Fetches every subscription tier.
    pub async fn list_all(&self) -> ClientResult<Vec<Subscription>> {
        self.inner.list_all().await
    }

    /// Fetches a single subscription by id.
    pub async fn get(&self, id: i32) -> ClientResult<Subscription> {
        self.inner.get_by_id(id).await
    }

    /// Creates a subscription tier and returns the stored record.
    pub async fn create(&self, subscription: &NewSubscription) -> ClientResult<Subscription> {
        subscription.validate()?;
        self.inner.create(subscription).await
    }

    /// Updates a tier's plan name or price.
    pub async fn update(
        &self,
        id: i32,
        subscription: &NewSubscription,
    ) -> ClientResult<Subscription> {
        subscription.validate()?;
        self.inner.update(id, subscription).await
    }

    /// Deletes a subscription tier.
    pub async fn delete(&self, id: i32) -> ClientResult<()> {
        self.inner.delete_by_id(id).await
    }

    /// Finds a tier by its plan name, matched case-insensitively. The
    /// server has no filter endpoint for this, so the catalog is fetched
    /// and scanned here.
    pub async fn by_type(&self, plan: &str) -> ClientResult<Option<Subscription>> {
        let subscriptions = self.list_all().await?;
        Ok(subscriptions.into_iter().find(|s| {
            s.subscription_type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(plan))
        }))
    }
}

/// Client for the `/DietaryPreference` resource.
#[derive(Debug, Clone)]
pub struct DietaryPreferenceClient {
    inner: ResourceClient<DietaryPreference>,
}

impl DietaryPreferenceClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String, max_get_retries: u32) -> Self {
        Self {
            inner: ResourceClient::new(http, base_url, "DietaryPreference", max_get_retries),
        }
    }

    /// Fetches the dietary preference catalog.
    pub async fn list_all(&self) -> ClientResult<Vec<DietaryPreference>> {
        self.inner.list_all().await
    }

    /// Fetches a single dietary preference by id.
    pub async fn get(&self, id: i32) -> ClientResult<DietaryPreference> {
        self.inner.get_by_id(id).await
    }
}
