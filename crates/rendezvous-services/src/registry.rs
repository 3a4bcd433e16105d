//! Peer registry: who is reachable, and where.
//!
//! A single `tokio::sync::Mutex` guards the whole map together with the
//! registration order. Every operation takes the lock once, so a
//! check-and-insert can never interleave with another registration and a
//! listing is always one consistent snapshot. Nothing inside the critical
//! section awaits or does I/O.
//!
//! Records are insert-only: there is no update, removal or expiry.

use std::collections::HashMap;
use std::sync::Arc;

use rendezvous_core::{PeerAddress, Port};
use tokio::sync::Mutex;

/// One registered peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerRecord {
    pub user_id: String,
    pub ip: String,
    pub port: Port,
}

impl PeerRecord {
    /// Connection details as served by `/peerinfo`.
    pub fn address(&self) -> PeerAddress {
        PeerAddress {
            ip: self.ip.clone(),
            port: self.port.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("peer {0:?} is already registered")]
    AlreadyExists(String),
    #[error("peer {0:?} is not registered")]
    NotFound(String),
    #[error("no peers registered")]
    Empty,
}

#[derive(Default)]
struct Entries {
    records: HashMap<String, PeerRecord>,
    /// Identifiers in registration order.
    order: Vec<String>,
}

/// The peer registry. Cloning yields another handle to the same map.
#[derive(Clone, Default)]
pub struct PeerRegistry {
    entries: Arc<Mutex<Entries>>,
}

impl PeerRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a peer unless its identifier is already taken.
    ///
    /// An existing record is never overwritten.
    pub async fn register(
        &self,
        user_id: impl Into<String>,
        ip: impl Into<String>,
        port: Port,
    ) -> Result<(), RegistryError> {
        let record = PeerRecord {
            user_id: user_id.into(),
            ip: ip.into(),
            port,
        };

        let mut entries = self.entries.lock().await;
        if entries.records.contains_key(&record.user_id) {
            return Err(RegistryError::AlreadyExists(record.user_id));
        }
        entries.order.push(record.user_id.clone());
        entries.records.insert(record.user_id.clone(), record);
        let total = entries.records.len();
        drop(entries);

        tracing::debug!(total, "peer registry grew");
        Ok(())
    }

    /// All registered identifiers, oldest first.
    pub async fn list_peers(&self) -> Result<Vec<String>, RegistryError> {
        let entries = self.entries.lock().await;
        if entries.order.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(entries.order.clone())
    }

    /// Fetch the record registered under `user_id`.
    pub async fn lookup(&self, user_id: &str) -> Result<PeerRecord, RegistryError> {
        self.entries
            .lock()
            .await
            .records
            .get(user_id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(user_id.to_string()))
    }

    /// Number of registered peers.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
