//! `register <user_id> <ip> <port>`

use std::io::Write;

use anyhow::Result;

use rendezvous_core::RegisterRequest;

use super::Outcome;
use crate::RendezvousClient;

pub async fn cmd_register(
    client: &RendezvousClient,
    args: &[&str],
    out: &mut impl Write,
) -> Result<Outcome> {
    let [user_id, ip, port] = args else {
        writeln!(out, "Invalid arguments. Usage: register user_id ip port")?;
        return Ok(Outcome::Failed);
    };

    // The port goes out as typed; the daemon does not interpret it.
    let req = RegisterRequest::new(*user_id, *ip, *port);

    match client.register(&req).await {
        Ok(_) => {
            writeln!(out, "User registered successfully")?;
            Ok(Outcome::Done)
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(Outcome::Failed)
        }
    }
}
