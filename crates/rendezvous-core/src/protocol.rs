//! JSON bodies exchanged between the rendezvous daemon and its clients.
//!
//! Both sides of the wire use these types: the API crate serializes them
//! into responses and the client library deserializes them back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A peer's port exactly as the registering client sent it.
///
/// The registry does not interpret ports, so a JSON number stays a number
/// and a JSON string stays a string when it is echoed back by `/peerinfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Port {
    Number(serde_json::Number),
    Text(String),
}

impl Port {
    /// An empty string counts as "not provided".
    pub fn is_blank(&self) -> bool {
        matches!(self, Port::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Number(n) => write!(f, "{}", n),
            Port::Text(s) => f.write_str(s),
        }
    }
}

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Port::Number(port.into())
    }
}

impl From<&str> for Port {
    fn from(port: &str) -> Self {
        Port::Text(port.to_string())
    }
}

impl From<String> for Port {
    fn from(port: String) -> Self {
        Port::Text(port)
    }
}

// ── POST /register ────────────────────────────────────────────────────────────

/// Registration body. Every field is optional at the type level so that a
/// missing field is reported as a validation failure rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<Port>,
}

impl RegisterRequest {
    pub fn new(user_id: impl Into<String>, ip: impl Into<String>, port: impl Into<Port>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ip: Some(ip.into()),
            port: Some(port.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub status: String,
}

impl RegisterResponse {
    pub fn registered() -> Self {
        Self {
            status: "registered".to_string(),
        }
    }
}

// ── GET /peers ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeersResponse {
    pub peers: Vec<String>,
}

// ── GET /peerinfo ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerInfoResponse {
    pub user_info: PeerAddress,
}

/// Connection details handed out to peers looking someone up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerAddress {
    pub ip: String,
    pub port: Port,
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Body of every non-2xx response: `{"status":"error","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
