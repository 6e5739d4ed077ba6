//! Type definitions for the RecipeHub API.
//!
//! This module contains the data structures exchanged with the RecipeHub
//! backend: domain records, authentication payloads, and the typed commands
//! used to create and update entities.
//!
//! ## Key Types
//!
//! - [`Recipe`] - Core recipe data with ingredient rows and author/subscription references
//! - [`Ingredient`] / [`UnitOfMeasurement`] - The ingredient catalog and its unit sub-resource
//! - [`User`] / [`Subscription`] / [`Favorite`] - Account-side records
//! - [`NewRecipe`] / [`RecipeUpdate`] - Validated commands for recipe writes
//! - [`SessionInfo`] / [`UserProfile`] - Authentication endpoint payloads
//!
//! ## Wire format
//!
//! The server speaks camelCase JSON, so every type carries
//! `#[serde(rename_all = "camelCase")]`. Updates are full-object PUTs: the
//! server rejects partial nested payloads, which is why [`RecipeUpdate`]
//! re-serializes the complete author and subscription records with their
//! nullable collections filled in.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::client::error::{ClientError, ClientResult};

/// A recipe as returned by the server.
///
/// List endpoints may omit the nested `author` and `subscription` records;
/// both are required when building a [`RecipeUpdate`], so fetch the entity
/// by id before editing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Server-assigned identifier.
    pub id: i32,
    pub recipe_name: String,
    #[serde(default)]
    pub description: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub instructions: String,
    /// Owning user reference; resolved by the server, never by this client.
    pub author_id: i32,
    /// Subscription tier this recipe belongs to.
    pub subscription_id: i32,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
    #[serde(default)]
    pub recipe_ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub favorites: Option<Vec<Favorite>>,
    #[serde(default)]
    pub dietary_preferences: Option<Vec<RecipeDietaryPreference>>,
}

/// Association row between a recipe and an ingredient, carrying the
/// quantity and the unit it is measured in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    #[serde(default)]
    pub recipe_id: i32,
    pub ingredient_id: i32,
    /// Non-negative amount, in units of `unit_id`.
    pub quantity: f64,
    #[serde(default)]
    pub unit_id: i32,
    #[serde(default)]
    pub ingredient: Option<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i32,
    pub ingredient_name: String,
    pub unit_id: i32,
    #[serde(default)]
    pub unit: Option<UnitOfMeasurement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitOfMeasurement {
    pub id: i32,
    pub unit_name: String,
    /// Ingredients measured in this unit; populated by the unit catalog
    /// endpoint only.
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
}

/// A user account. Collection fields are nullable on the wire and omitted
/// by most endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Only meaningful on outbound payloads; the server blanks it in
    /// responses.
    #[serde(default)]
    pub password: Option<String>,
    pub subscription_id: i32,
    #[serde(default)]
    pub join_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub alias: Option<String>,
    /// Derived counter maintained by the server.
    #[serde(default)]
    pub total_recipes: i32,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
    #[serde(default)]
    pub favorites: Option<Vec<Favorite>>,
    #[serde(default)]
    pub dietary_preferences: Option<Vec<UserDietaryPreference>>,
    #[serde(default)]
    pub recipes: Option<Vec<Recipe>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i32,
    /// Plan name, e.g. "Basic" or "Premium".
    #[serde(default)]
    pub subscription_type: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub users: Option<Vec<User>>,
    #[serde(default)]
    pub recipes: Option<Vec<Recipe>>,
}

/// Association between a user and a recipe they marked as a favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: i32,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub recipe: Option<Recipe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPreference {
    pub id: i32,
    #[serde(default)]
    pub preference_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDietaryPreference {
    #[serde(default)]
    pub id: i32,
    pub user_id: i32,
    pub dietary_preference_id: i32,
    #[serde(default)]
    pub dietary_preference: Option<DietaryPreference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDietaryPreference {
    #[serde(default)]
    pub id: i32,
    pub recipe_id: i32,
    pub dietary_preference_id: i32,
    #[serde(default)]
    pub dietary_preference: Option<DietaryPreference>,
}

// Authentication payloads.

/// Credentials for `/Auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> ClientResult<()> {
        if self.username.trim().is_empty() {
            return Err(ClientError::Validation("username is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(ClientError::Validation("password is required".to_string()));
        }
        Ok(())
    }
}

/// Payload for `/Auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> ClientResult<()> {
        if self.username.trim().is_empty() {
            return Err(ClientError::Validation("username is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(ClientError::Validation("email is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(ClientError::Validation("password is required".to_string()));
        }
        Ok(())
    }
}

/// Identity fields returned by the login and register endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub subscription_id: Option<i32>,
}

/// Profile record from `/Auth/profile/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub join_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub total_recipes: i32,
}

// Typed commands for creating and updating resources. Each command
// validates itself before the client serializes it, so a bad payload never
// reaches the wire.

/// Command for creating a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub recipe_name: String,
    #[serde(default)]
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub instructions: String,
    pub author_id: i32,
    pub subscription_id: i32,
    #[serde(default)]
    pub recipe_ingredients: Vec<NewRecipeIngredient>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipeIngredient {
    pub ingredient_id: i32,
    pub quantity: f64,
    pub unit_id: i32,
}

impl NewRecipe {
    pub fn validate(&self) -> ClientResult<()> {
        if self.recipe_name.trim().is_empty() {
            return Err(ClientError::Validation("recipe name is required".to_string()));
        }
        for row in &self.recipe_ingredients {
            validate_quantity(row.quantity)?;
        }
        Ok(())
    }
}

/// Command for updating a recipe.
///
/// Distinct from [`Recipe`] on purpose: the caller edits these fields and
/// the client takes care of the full-object shape the server expects. Build
/// one from a fetched entity with [`RecipeUpdate::from_recipe`], change what
/// you need, and pass it to
/// [`RecipeClient::update`](crate::client::recipes::RecipeClient::update).
#[derive(Debug, Clone)]
pub struct RecipeUpdate {
    pub recipe_name: String,
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub instructions: String,
    /// Full author record, re-serialized whole on update.
    pub author: User,
    /// Full subscription record, re-serialized whole on update.
    pub subscription: Subscription,
    pub ingredients: Vec<RecipeIngredient>,
}

impl RecipeUpdate {
    /// Start an update from a fetched entity. Fails with a validation error
    /// when the entity was loaded without its nested author or subscription,
    /// since the server requires both in the update payload.
    pub fn from_recipe(recipe: &Recipe) -> ClientResult<Self> {
        let author = recipe.author.clone().ok_or_else(|| {
            ClientError::Validation(
                "recipe has no nested author; fetch it by id before updating".to_string(),
            )
        })?;
        let subscription = recipe.subscription.clone().ok_or_else(|| {
            ClientError::Validation(
                "recipe has no nested subscription; fetch it by id before updating".to_string(),
            )
        })?;

        Ok(Self {
            recipe_name: recipe.recipe_name.clone(),
            description: recipe.description.clone(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            instructions: recipe.instructions.clone(),
            author,
            subscription,
            ingredients: recipe.recipe_ingredients.clone(),
        })
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.recipe_name.trim().is_empty() {
            return Err(ClientError::Validation("recipe name is required".to_string()));
        }
        for row in &self.ingredients {
            validate_quantity(row.quantity)?;
        }
        Ok(())
    }

    /// Denormalize into the full nested payload the server expects: ids
    /// copied out of the nested records, nullable collections filled with
    /// empty defaults, every ingredient row stamped with the recipe id.
    pub(crate) fn into_payload(self, id: i32) -> RecipePayload {
        let RecipeUpdate {
            recipe_name,
            description,
            prep_time,
            cook_time,
            servings,
            instructions,
            mut author,
            mut subscription,
            ingredients,
        } = self;

        let author_id = author.id;
        let subscription_id = subscription.id;

        author.password.get_or_insert_with(String::new);
        author.recipes.get_or_insert_with(Vec::new);
        author.favorites.get_or_insert_with(Vec::new);
        author.dietary_preferences.get_or_insert_with(Vec::new);
        if author.subscription.is_none() {
            author.subscription = Some(Subscription {
                users: Some(Vec::new()),
                recipes: Some(Vec::new()),
                ..subscription.clone()
            });
        }

        subscription.users.get_or_insert_with(Vec::new);
        subscription.recipes.get_or_insert_with(Vec::new);

        let recipe_ingredients = ingredients
            .into_iter()
            .map(|row| RecipeIngredient { recipe_id: id, ..row })
            .collect();

        RecipePayload {
            id,
            recipe_name,
            description,
            prep_time,
            cook_time,
            servings,
            instructions,
            author_id,
            subscription_id,
            author,
            subscription,
            recipe_ingredients,
        }
    }
}

/// Wire shape of a recipe update. Built by [`RecipeUpdate::into_payload`],
/// never constructed by hand.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecipePayload {
    pub id: i32,
    pub recipe_name: String,
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub instructions: String,
    pub author_id: i32,
    pub subscription_id: i32,
    pub author: User,
    pub subscription: Subscription,
    pub recipe_ingredients: Vec<RecipeIngredient>,
}

/// Command for creating or updating an ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIngredient {
    pub ingredient_name: String,
    pub unit_id: i32,
}

impl NewIngredient {
    pub fn validate(&self) -> ClientResult<()> {
        if self.ingredient_name.trim().is_empty() {
            return Err(ClientError::Validation("ingredient name is required".to_string()));
        }
        Ok(())
    }
}

/// Command for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub subscription_id: i32,
}

/// Partial update for a user; unset fields are left out of the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<i32>,
}

/// Command for creating or updating a subscription tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    pub subscription_type: String,
    pub price: f64,
}

impl NewSubscription {
    pub fn validate(&self) -> ClientResult<()> {
        if self.subscription_type.trim().is_empty() {
            return Err(ClientError::Validation("subscription type is required".to_string()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ClientError::Validation(format!(
                "subscription price must be a non-negative number, got {}",
                self.price
            )));
        }
        Ok(())
    }
}

/// Body for adding a favorite, keyed by the (user, recipe) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewFavorite {
    pub user_id: i32,
    pub recipe_id: i32,
}

fn validate_quantity(quantity: f64) -> ClientResult<()> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(ClientError::Validation(format!(
            "ingredient quantity must be a non-negative number, got {quantity}"
        )));
    }
    Ok(())
}
