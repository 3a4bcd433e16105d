//! rendezvous-core — shared protocol types and configuration.
//! All other rendezvous crates depend on this one.

pub mod config;
pub mod protocol;

pub use protocol::{
    ErrorResponse, PeerAddress, PeerInfoResponse, PeersResponse, Port, RegisterRequest,
    RegisterResponse,
};

/// Port the daemon listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 5000;

/// The daemon only binds to loopback by default.
pub const DEFAULT_HOST: &str = "127.0.0.1";
