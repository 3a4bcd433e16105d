//! CLI commands.
//!
//! Every command writes its human-readable result to `out`. Failures reported
//! by the daemon are printed, not returned, so an interactive session keeps
//! going after a rejected request; only I/O errors on `out` propagate.

pub mod peers;
pub mod register;

use std::io::Write;

use anyhow::Result;

use crate::RendezvousClient;

/// What the caller should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command succeeded.
    Done,
    /// The command printed an error.
    Failed,
    /// The user asked to leave the interactive prompt.
    Exit,
}

pub const MENU: &str = "
Main Menu:
1. Register a new user by command : (register user_id ip port)
2. List all registered peers by command : (peers)
3. Get information about a peer by command : (peerinfo user_id)
4. Exit by command : (exit)
";

pub fn print_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", MENU)?;
    Ok(())
}

pub fn print_help(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  register <user_id> <ip> <port>   Register a new user")?;
    writeln!(out, "  peers                            List all registered peers")?;
    writeln!(out, "  peerinfo <user_id>               Get information about a peer")?;
    writeln!(out, "  menu                             Show the main menu")?;
    writeln!(out, "  exit                             Exit the CLI")?;
    Ok(())
}

/// Run one command given as whitespace-separated words.
pub async fn dispatch(
    client: &RendezvousClient,
    words: &[&str],
    out: &mut impl Write,
) -> Result<Outcome> {
    match words {
        [] => Ok(Outcome::Done),
        ["register", args @ ..] => register::cmd_register(client, args, out).await,
        ["peers", ..] => peers::cmd_peers(client, out).await,
        ["peerinfo", args @ ..] => peers::cmd_peer_info(client, args, out).await,
        ["menu", ..] => {
            print_menu(out)?;
            Ok(Outcome::Done)
        }
        ["help", ..] | ["?", ..] => {
            print_help(out)?;
            Ok(Outcome::Done)
        }
        ["exit", ..] => {
            writeln!(out, "Goodbye!")?;
            Ok(Outcome::Exit)
        }
        [other, ..] => {
            writeln!(out, "Unknown command: {}", other)?;
            writeln!(out, "Type 'help' to list commands.")?;
            Ok(Outcome::Failed)
        }
    }
}
