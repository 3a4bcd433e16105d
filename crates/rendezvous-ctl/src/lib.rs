//! rendezvous-ctl: protocol client and command-line front-end for the
//! rendezvous daemon.
//!
//! [`RendezvousClient`] speaks the HTTP protocol to any reachable daemon and
//! knows nothing about how it is hosted. The [`cmd`] module turns client
//! results into the human-readable output of the CLI.

pub mod client;
pub mod cmd;

pub use client::{ClientError, RendezvousClient};
