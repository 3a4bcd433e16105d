//! POST /register

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use rendezvous_core::{Port, RegisterRequest, RegisterResponse};

use super::{ApiError, ApiState};

/// A registration that passed validation and may be handed to the registry.
#[derive(Debug, PartialEq, Eq)]
struct Registration {
    user_id: String,
    ip: String,
    port: Port,
}

/// Presence check only: each field must be given and not an empty string.
/// Addresses and ports are otherwise accepted as sent.
fn validate(req: RegisterRequest) -> Result<Registration, ApiError> {
    let missing = || ApiError::bad_request("Missing required fields");

    let user_id = req.user_id.filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let ip = req.ip.filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let port = req.port.filter(|p| !p.is_blank()).ok_or_else(missing)?;

    Ok(Registration { user_id, ip, port })
}

/// The body is decoded as JSON whatever the `Content-Type` says.
pub async fn handle_register(
    State(state): State<ApiState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let body = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable register body");
        let status = rejection.status();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::new(status, "Request body too large")
        } else {
            ApiError::new(status, "Invalid request body")
        }
    })?;
    let req: RegisterRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "undecodable register body");
        ApiError::bad_request("Invalid request body")
    })?;
    let reg = validate(req)?;

    state
        .registry
        .register(&reg.user_id, &reg.ip, reg.port.clone())
        .await?;

    tracing::info!(user_id = %reg.user_id, ip = %reg.ip, port = %reg.port, "peer registered");
    Ok((StatusCode::CREATED, Json(RegisterResponse::registered())))
}
