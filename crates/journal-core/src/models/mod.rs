// ABOUTME: Domain models for recipes and cooking events
// ABOUTME: Re-exports the stored entities and their request/response shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

/// Cooking events, their timestamps, and the derived calendar breakdown
pub mod event;
/// Recipes and their ingredients
pub mod recipe;

pub use event::{
    CalendarDate, CreateEventRequest, Event, EventDate, EventDetail, UpdateEventRequest,
};
pub use recipe::{
    CreateRecipeRequest, Ingredient, NewIngredient, Recipe, RecipeSummary, RecipeWithEvents,
    UpdateRecipeRequest,
};
