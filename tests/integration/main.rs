//! Rendezvous integration test harness.
//!
//! Each test starts its own daemon on an ephemeral loopback port, talks to
//! it over real TCP, and shuts it down when the `TestDaemon` is dropped.
//!
//!   cargo test --test integration

mod cli;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use rendezvous_api::ApiState;
use rendezvous_ctl::RendezvousClient;
use rendezvous_services::PeerRegistry;

// ── Harness ───────────────────────────────────────────────────────────────────

/// A daemon serving a fresh, empty registry.
pub struct TestDaemon {
    pub addr: SocketAddr,
    pub registry: PeerRegistry,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Result<()>>>,
}

impl TestDaemon {
    pub async fn start() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind ephemeral port")?;
        let addr = listener.local_addr()?;
        let registry = PeerRegistry::new();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let state = ApiState::new(registry.clone());
        let task = tokio::spawn(rendezvous_api::serve_on(listener, state, async move {
            shutdown_rx.await.ok();
        }));

        Ok(Self {
            addr,
            registry,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        })
    }

    pub fn client(&self) -> RendezvousClient {
        RendezvousClient::new(self.url(""))
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stop serving and wait for the server task to finish.
    pub async fn stop(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        match self.task.take() {
            Some(task) => task.await.context("server task panicked")?,
            None => Ok(()),
        }
    }
}

impl Drop for TestDaemon {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// GET a path and return (status, parsed JSON body).
pub async fn api_get(daemon: &TestDaemon, path: &str) -> Result<(u16, serde_json::Value)> {
    let resp = reqwest::get(daemon.url(path)).await?;
    let status = resp.status().as_u16();
    Ok((status, resp.json().await?))
}

/// POST a raw body to a path and return (status, parsed JSON body).
pub async fn api_post(
    daemon: &TestDaemon,
    path: &str,
    body: &str,
) -> Result<(u16, serde_json::Value)> {
    let resp = reqwest::Client::new()
        .post(daemon.url(path))
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .send()
        .await?;
    let status = resp.status().as_u16();
    Ok((status, resp.json().await?))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_daemon_starts_and_stops() {
    let daemon = TestDaemon::start().await.unwrap();
    let (status, _) = api_get(&daemon, "/peers").await.unwrap();
    assert_eq!(status, 404);
    daemon.stop().await.unwrap();
}

#[tokio::test]
async fn test_stopped_daemon_refuses_connections() {
    let daemon = TestDaemon::start().await.unwrap();
    let client = daemon.client();
    daemon.stop().await.unwrap();

    let err = client.peers().await.unwrap_err();
    assert_eq!(err.status(), None, "expected a transport error, got {err:?}");
}
