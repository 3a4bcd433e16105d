//! GET /peers and GET /peerinfo

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use rendezvous_core::{PeerInfoResponse, PeersResponse};

use super::{ApiError, ApiState};

// ── /peers ────────────────────────────────────────────────────────────────────

pub async fn handle_peers(State(state): State<ApiState>) -> Result<Json<PeersResponse>, ApiError> {
    let peers = state.registry.list_peers().await?;
    tracing::debug!(count = peers.len(), "listing peers");
    Ok(Json(PeersResponse { peers }))
}

// ── /peerinfo ─────────────────────────────────────────────────────────────────

/// The last non-empty `username` wins when the parameter is repeated.
fn username_param(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .filter(|(key, value)| key == "username" && !value.is_empty())
        .map(|(_, value)| value)
        .last()
}

pub async fn handle_peer_info(
    State(state): State<ApiState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<PeerInfoResponse>, ApiError> {
    let username = query
        .ok()
        .and_then(|Query(pairs)| username_param(pairs))
        .ok_or_else(|| ApiError::bad_request("Missing username parameter"))?;

    let record = state.registry.lookup(&username).await?;
    tracing::debug!(username = %username, "peer looked up");

    Ok(Json(PeerInfoResponse {
        user_info: record.address(),
    }))
}
