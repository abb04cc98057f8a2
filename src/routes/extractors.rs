// ABOUTME: Request extractors that report failures through the unified error body
// ABOUTME: JSON bodies and path identifiers both reject with 400 and an AppError payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

use axum::extract::FromRequest;
use journal_core::errors::{AppError, AppResult};
use uuid::Uuid;

/// `Json` extractor whose rejection is an [`AppError`]
///
/// Malformed JSON, a wrong field type, a missing required field, or an
/// unknown field all become `400` with the standard error body instead of
/// axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Parse a path segment as an entity identifier
///
/// # Errors
///
/// Returns `InvalidInput` when the segment is not a UUID
pub fn parse_id(raw: &str, entity: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::invalid_input(format!("Invalid {entity} id '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::errors::ErrorCode;

    #[test]
    fn test_parse_id_accepts_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "recipe").unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let error = parse_id("not-an-id", "event").unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.http_status(), 400);
        assert!(error.message.contains("event"));
    }
}
