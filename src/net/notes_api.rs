//! Notes API client.
//!
//! All endpoints require the bearer token; the gateway attaches it. The
//! server scopes every operation to the caller's tenant. Deletion is
//! rejected server-side for non-admin callers; the UI only hides the
//! control.

use crate::net::http::{self, ApiError};
use crate::net::types::{Note, NoteDraft};

/// `GET /api/notes`: all notes for the current tenant.
pub async fn list() -> Result<Vec<Note>, ApiError> {
    http::request_json("GET", "/api/notes", None).await
}

/// `GET /api/notes/{id}`.
pub async fn get(id: i64) -> Result<Note, ApiError> {
    http::request_json("GET", &format!("/api/notes/{id}"), None).await
}

/// `POST /api/notes`. May fail with 403 when the tenant's plan limit is
/// reached.
pub async fn create(draft: &NoteDraft) -> Result<Note, ApiError> {
    let body = serde_json::to_value(draft)
        .map_err(|e| ApiError::Network { message: e.to_string() })?;
    http::request_json("POST", "/api/notes", Some(&body)).await
}

/// `PUT /api/notes/{id}`.
pub async fn update(id: i64, draft: &NoteDraft) -> Result<Note, ApiError> {
    let body = serde_json::to_value(draft)
        .map_err(|e| ApiError::Network { message: e.to_string() })?;
    http::request_json("PUT", &format!("/api/notes/{id}"), Some(&body)).await
}

/// `DELETE /api/notes/{id}`: admin only, 204 on success.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::request_empty("DELETE", &format!("/api/notes/{id}")).await
}
