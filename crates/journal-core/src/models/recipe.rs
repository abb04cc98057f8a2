// ABOUTME: Recipe entity with ordered ingredients and directions
// ABOUTME: Defines Recipe, Ingredient, the list projection, and create/update payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::Event;

/// Single ingredient line in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Identifier assigned when the ingredient was stored
    pub id: Uuid,
    /// Human-readable ingredient name
    pub name: String,
    /// Quantity in `measurement` units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Unit the amount is expressed in (cup, tbsp, grams, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement: Option<String>,
}

/// Ingredient as submitted by a client, before it has an identifier
///
/// Only `name` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewIngredient {
    /// Human-readable ingredient name
    pub name: String,
    /// Quantity in `measurement` units
    #[serde(default)]
    pub amount: Option<f64>,
    /// Unit the amount is expressed in
    #[serde(default)]
    pub measurement: Option<String>,
}

impl NewIngredient {
    /// Create a fully specified ingredient payload
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, measurement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: Some(amount),
            measurement: Some(measurement.into()),
        }
    }

    /// Assign a fresh identifier, producing the stored form
    #[must_use]
    pub fn into_ingredient(self) -> Ingredient {
        Ingredient {
            id: Uuid::new_v4(),
            name: self.name,
            amount: self.amount,
            measurement: self.measurement,
        }
    }
}

/// A named dish with ordered ingredients and directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Recipe name
    pub name: String,
    /// Ingredients in authored order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Cooking directions in authored order
    #[serde(default)]
    pub directions: Vec<String>,
}

impl Recipe {
    /// Build a new recipe from a create payload, generating all identifiers
    #[must_use]
    pub fn from_request(request: CreateRecipeRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            ingredients: request
                .ingredients
                .into_iter()
                .map(NewIngredient::into_ingredient)
                .collect(),
            directions: request.directions,
        }
    }
}

/// Index view of a recipe: identifier and name only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Recipe name
    pub name: String,
}

/// Recipe joined with every event that references it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeWithEvents {
    /// The recipe itself, flattened into the top-level object
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Events whose `recipeId` is this recipe
    pub events: Vec<Event>,
}

/// Request to create a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRecipeRequest {
    /// Recipe name
    pub name: String,
    /// Ingredients in authored order
    #[serde(default)]
    pub ingredients: Vec<NewIngredient>,
    /// Directions in authored order
    #[serde(default)]
    pub directions: Vec<String>,
}

/// Partial update of a recipe; `None` leaves the stored value untouched
///
/// Supplying `ingredients` replaces the whole list, and each supplied
/// ingredient receives a new identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRecipeRequest {
    /// New name
    pub name: Option<String>,
    /// Replacement ingredient list
    pub ingredients: Option<Vec<NewIngredient>>,
    /// Replacement direction list
    pub directions: Option<Vec<String>>,
}
