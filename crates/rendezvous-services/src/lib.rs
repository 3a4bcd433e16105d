//! rendezvous-services: the peer registry shared by every request handler.

pub mod registry;

pub use registry::{PeerRecord, PeerRegistry, RegistryError};
