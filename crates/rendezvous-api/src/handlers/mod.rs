//! HTTP API handlers: registration and lookup over JSON.

pub mod peers;
pub mod register;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use rendezvous_core::ErrorResponse;
use rendezvous_services::{PeerRegistry, RegistryError};

#[derive(Clone)]
pub struct ApiState {
    pub registry: PeerRegistry,
}

impl ApiState {
    pub fn new(registry: PeerRegistry) -> Self {
        Self { registry }
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// A rejected request, rendered as `{"status":"error","message":...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::AlreadyExists(_) => ApiError::conflict("Username already exists"),
            RegistryError::NotFound(_) => ApiError::not_found("User not found"),
            RegistryError::Empty => ApiError::not_found("No users registered yet"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(status = self.status.as_u16(), message = %self.message, "request rejected");
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

pub async fn handle_not_found() -> ApiError {
    ApiError::not_found("Not found")
}

pub async fn handle_method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

// Re-export handler functions for use in router setup.
pub use peers::{handle_peer_info, handle_peers};
pub use register::handle_register;
