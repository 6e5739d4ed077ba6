//! Ingredient catalog operations, including the unit-of-measurement
//! sub-resource served under `/Ingredient/units`.

use tracing::debug;

use crate::client::error::ClientResult;
use crate::client::resource::ResourceClient;
use crate::client::types::{Ingredient, NewIngredient, UnitOfMeasurement};

/// Client for the `/Ingredient` resource.
#[derive(Debug, Clone)]
pub struct IngredientClient {
    inner: ResourceClient<Ingredient>,
}

impl IngredientClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String, max_get_retries: u32) -> Self {
        Self {
            inner: ResourceClient::new(http, base_url, "Ingredient", max_get_retries),
        }
    }

    /// Fetches the full ingredient catalog.
    pub async fn list_all(&self) -> ClientResult<Vec<Ingredient>> {
        self.inner.list_all().await
    }

    /// Fetches a single ingredient by id.
    pub async fn get(&self, id: i32) -> ClientResult<Ingredient> {
        self.inner.get_by_id(id).await
    }

    /// Creates an ingredient and returns the stored record.
    pub async fn create(&self, ingredient: &NewIngredient) -> ClientResult<Ingredient> {
        ingredient.validate()?;
        debug!(name = %ingredient.ingredient_name, "creating ingredient");
        self.inner.create(ingredient).await
    }

    /// Updates an ingredient's name or unit.
    pub async fn update(&self, id: i32, ingredient: &NewIngredient) -> ClientResult<Ingredient> {
        ingredient.validate()?;
        self.inner.update(id, ingredient).await
    }

    /// Deletes an ingredient by id.
    pub async fn delete(&self, id: i32) -> ClientResult<()> {
        self.inner.delete_by_id(id).await
    }

    /// Fetches the ingredients measured in one unit.
    pub async fn by_unit(&self, unit_id: i32) -> ClientResult<Vec<Ingredient>> {
        self.inner.list_filtered("unit", unit_id).await
    }

    /// Fetches the unit-of-measurement catalog.
    pub async fn units(&self) -> ClientResult<Vec<UnitOfMeasurement>> {
        self.inner.get_json("units").await
    }

    /// Fetches a single unit by id.
    pub async fn unit(&self, id: i32) -> ClientResult<UnitOfMeasurement> {
        self.inner.get_json(&format!("units/{id}")).await
    }
}

/// Looks up the unit an ingredient is measured in from an already fetched
/// unit catalog, saving a round trip when rendering many rows.
pub fn unit_for_ingredient(
    units: &[UnitOfMeasurement],
    ingredient_id: i32,
) -> Option<&UnitOfMeasurement> {
    units.iter().find(|unit| {
        unit.ingredients
            .as_deref()
            .is_some_and(|ingredients| ingredients.iter().any(|i| i.id == ingredient_id))
    })
}
