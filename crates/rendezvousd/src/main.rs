//! rendezvousd — peer-discovery rendezvous daemon.

use std::future::Future;

use anyhow::{Context, Result};

use rendezvous_api::ApiState;
use rendezvous_core::config::RendezvousConfig;
use rendezvous_services::PeerRegistry;

fn print_usage() {
    println!("Usage: rendezvousd [--port <port>]");
    println!();
    println!("Options:");
    println!("  --port <port>   Override the configured API port");
    println!();
    println!("Config file: {}", RendezvousConfig::file_path().display());
}

/// Resolves once `signal` reports a shutdown request. If the signal handler
/// cannot be installed the error is logged and this never resolves, leaving
/// the daemon serving until it is killed.
async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "failed to install shutdown signal handler");
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut port_override: Option<u16> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                i += 1;
                port_override = Some(
                    args.get(i)
                        .context("--port requires a value")?
                        .parse()
                        .context("--port must be a number")?,
                );
            }
            "help" | "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => anyhow::bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    // Load config
    if let Err(e) = RendezvousConfig::write_default_if_missing() {
        tracing::warn!(error = %e, "failed to write default config");
    }
    let mut config = match RendezvousConfig::load() {
        Ok((config, rejected)) => {
            for r in rejected {
                tracing::warn!(key = r.key, value = %r.value, "ignoring invalid config override");
            }
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            RendezvousConfig::default()
        }
    };
    if let Some(port) = port_override {
        config.server.port = port;
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rendezvousd starting");

    // The registry lives exactly as long as this process.
    let registry = PeerRegistry::new();
    let state = ApiState::new(registry.clone());

    let shutdown = wait_for_shutdown(tokio::signal::ctrl_c());

    rendezvous_api::serve(state, &config.server.bind_addr(), shutdown).await?;

    tracing::info!(peers = registry.len().await, "registry discarded");
    Ok(())
}
