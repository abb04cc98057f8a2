// ABOUTME: Database operations for recipes
// ABOUTME: Stores ingredients and directions as JSON text columns alongside the recipe name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

use super::parse_uuid;
use chrono::Utc;
use journal_core::errors::{AppError, AppResult};
use journal_core::models::{
    CreateRecipeRequest, Ingredient, NewIngredient, Recipe, RecipeSummary, UpdateRecipeRequest,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// Recipe database operations manager
pub struct RecipesManager {
    pool: SqlitePool,
}

impl RecipesManager {
    /// Create a new recipes manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a recipe, generating its id and one id per ingredient
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn create(&self, request: CreateRecipeRequest) -> AppResult<Recipe> {
        let recipe = Recipe::from_request(request);
        let now = Utc::now().to_rfc3339();
        let ingredients_json = serde_json::to_string(&recipe.ingredients)?;
        let directions_json = serde_json::to_string(&recipe.directions)?;

        sqlx::query(
            r"
            INSERT INTO recipes (id, name, ingredients, directions, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ",
        )
        .bind(recipe.id.to_string())
        .bind(&recipe.name)
        .bind(&ingredients_json)
        .bind(&directions_json)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipe: {e}")))?;

        Ok(recipe)
    }

    /// Every recipe projected to id and name, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_summaries(&self) -> AppResult<Vec<RecipeSummary>> {
        let rows = sqlx::query("SELECT id, name FROM recipes ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        rows.iter()
            .map(|row| -> AppResult<RecipeSummary> {
                let id: String = row.get("id");
                Ok(RecipeSummary {
                    id: parse_uuid(&id)?,
                    name: row.get("name"),
                })
            })
            .collect()
    }

    /// Fetch a recipe by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is corrupt
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, name, ingredients, directions
            FROM recipes
            WHERE id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    /// Merge the supplied fields into a stored recipe and return the result
    ///
    /// Omitted fields keep their stored value. A supplied ingredient list
    /// replaces the old one and every ingredient receives a fresh id.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the update fails
    pub async fn find_by_id_and_update(
        &self,
        id: Uuid,
        request: UpdateRecipeRequest,
    ) -> AppResult<Option<Recipe>> {
        let ingredients_json = request
            .ingredients
            .map(|list| {
                let ingredients: Vec<Ingredient> = list
                    .into_iter()
                    .map(NewIngredient::into_ingredient)
                    .collect();
                serde_json::to_string(&ingredients)
            })
            .transpose()?;
        let directions_json = request
            .directions
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let row = sqlx::query(
            r"
            UPDATE recipes SET
                name = COALESCE($1, name),
                ingredients = COALESCE($2, ingredients),
                directions = COALESCE($3, directions),
                updated_at = $4
            WHERE id = $5
            RETURNING id, name, ingredients, directions
            ",
        )
        .bind(request.name)
        .bind(ingredients_json)
        .bind(directions_json)
        .bind(Utc::now().to_rfc3339())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update recipe: {e}")))?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    /// Remove a recipe and return it as it was stored
    ///
    /// Events referencing the recipe are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn find_by_id_and_delete(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            DELETE FROM recipes
            WHERE id = $1
            RETURNING id, name, ingredients, directions
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete recipe: {e}")))?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }
}

fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let id_str: String = row.get("id");
    let ingredients_json: String = row.get("ingredients");
    let directions_json: String = row.get("directions");

    Ok(Recipe {
        id: parse_uuid(&id_str)?,
        name: row.get("name"),
        ingredients: serde_json::from_str(&ingredients_json)?,
        directions: serde_json::from_str(&directions_json)?,
    })
}
