// ABOUTME: Domain service layer for logic that spans both recipes and events
// ABOUTME: Joins, population, and cascade delete live here so handlers stay thin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

//! Domain service layer
//!
//! Single-table operations go straight from a route handler to its manager.
//! Anything that touches both tables is coordinated here.

/// Event population with its recipe and calendar breakdown
pub mod events;

/// Recipe aggregation with its events and cascade delete
pub mod recipes;
