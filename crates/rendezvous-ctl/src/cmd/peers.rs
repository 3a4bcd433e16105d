//! `peers` and `peerinfo <user_id>`

use std::io::Write;

use anyhow::Result;

use super::Outcome;
use crate::RendezvousClient;

pub async fn cmd_peers(client: &RendezvousClient, out: &mut impl Write) -> Result<Outcome> {
    match client.peers().await {
        Ok(peers) => {
            for user_id in &peers {
                writeln!(out, "{}", user_id)?;
            }
            Ok(Outcome::Done)
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(Outcome::Failed)
        }
    }
}

pub async fn cmd_peer_info(
    client: &RendezvousClient,
    args: &[&str],
    out: &mut impl Write,
) -> Result<Outcome> {
    let Some(user_id) = args.first() else {
        writeln!(out, "Missing username parameter")?;
        return Ok(Outcome::Failed);
    };

    match client.peer_info(user_id).await {
        Ok(info) => {
            writeln!(out, "IP: {}", info.ip)?;
            writeln!(out, "Port: {}", info.port)?;
            Ok(Outcome::Done)
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(Outcome::Failed)
        }
    }
}
