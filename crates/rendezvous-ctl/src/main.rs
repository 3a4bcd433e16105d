//! rendezvous-ctl — command-line interface for the rendezvous daemon.

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use rendezvous_core::{DEFAULT_HOST, DEFAULT_PORT};
use rendezvous_ctl::cmd::{self, Outcome};
use rendezvous_ctl::RendezvousClient;

fn print_usage() {
    println!("Usage: rendezvous-ctl [--host <host>] [--port <port>] [command]");
    println!();
    println!("Commands:");
    println!("  register <user_id> <ip> <port>   Register a peer");
    println!("  peers                            List registered peers");
    println!("  peerinfo <user_id>               Show a peer's address");
    println!();
    println!("Without a command, starts an interactive prompt.");
    println!();
    println!("Options:");
    println!("  --host <host>   Daemon host (default: {})", DEFAULT_HOST);
    println!("  --port <port>   Daemon port (default: {})", DEFAULT_PORT);
}

/// Read commands from stdin until `exit` or end of input.
async fn interactive(client: &RendezvousClient) -> Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "Welcome to the rendezvous CLI. Type help or ? to list commands.")?;
    cmd::print_menu(&mut stdout)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            writeln!(stdout)?;
            return Ok(());
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        if cmd::dispatch(client, &words, &mut stdout).await? == Outcome::Exit {
            return Ok(());
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut host = DEFAULT_HOST.to_string();
    let mut port = DEFAULT_PORT;
    let mut remaining: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                i += 1;
                port = args
                    .get(i)
                    .context("--port requires a value")?
                    .parse()
                    .context("--port must be a number")?;
            }
            "--host" => {
                i += 1;
                host = args.get(i).context("--host requires a value")?.clone();
            }
            _ => remaining.push(&args[i]),
        }
        i += 1;
    }

    let client = RendezvousClient::for_host(&host, port);

    match remaining.as_slice() {
        [] => interactive(&client).await,
        ["--help"] | ["-h"] => {
            print_usage();
            Ok(())
        }
        words => {
            let outcome = cmd::dispatch(&client, words, &mut std::io::stdout()).await?;
            if outcome == Outcome::Failed {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
