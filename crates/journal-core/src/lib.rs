// ABOUTME: Core types for the Recipe Journal API
// ABOUTME: Foundation crate with unified error handling and the recipe/event domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

#![deny(unsafe_code)]

//! # Journal Core
//!
//! Foundation crate shared by the Recipe Journal server. It changes rarely,
//! which keeps incremental builds of the server crate fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: `Recipe`, `Ingredient`, `Event` and their request/response shapes

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Recipe and event domain models
pub mod models;
