use crate::*;

use rendezvous_ctl::cmd::{dispatch, Outcome};

async fn ctl(daemon: &TestDaemon, words: &[&str]) -> Result<(Outcome, String)> {
    let mut out = Vec::new();
    let outcome = dispatch(&daemon.client(), words, &mut out).await?;
    Ok((outcome, String::from_utf8(out)?))
}

/// Full CLI session: peers (empty) -> register -> duplicate -> peers -> peerinfo.
#[tokio::test]
async fn test_ctl_session() {
    let daemon = TestDaemon::start().await.unwrap();

    let (outcome, out) = ctl(&daemon, &["peers"]).await.unwrap();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(out, "Error: No users registered yet\n");

    let (outcome, out) = ctl(&daemon, &["register", "alice", "10.0.0.1", "5001"])
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Done);
    assert_eq!(out, "User registered successfully\n");

    let (outcome, out) = ctl(&daemon, &["register", "alice", "10.0.0.9", "9"])
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(out, "Error: Username already exists\n");

    ctl(&daemon, &["register", "bob", "10.0.0.2", "5002"])
        .await
        .unwrap();

    let (outcome, out) = ctl(&daemon, &["peers"]).await.unwrap();
    assert_eq!(outcome, Outcome::Done);
    assert_eq!(out, "alice\nbob\n");

    let (outcome, out) = ctl(&daemon, &["peerinfo", "alice"]).await.unwrap();
    assert_eq!(outcome, Outcome::Done);
    assert_eq!(out, "IP: 10.0.0.1\nPort: 5001\n");
}

/// The CLI sends the port as typed, so it comes back as a JSON string.
#[tokio::test]
async fn test_ctl_register_sends_port_as_string() {
    let daemon = TestDaemon::start().await.unwrap();

    ctl(&daemon, &["register", "carol", "10.0.0.3", "7000"])
        .await
        .unwrap();

    let (_, body) = api_get(&daemon, "/peerinfo?username=carol").await.unwrap();
    assert_eq!(body["user_info"]["port"], serde_json::json!("7000"));
}

#[tokio::test]
async fn test_ctl_peerinfo_unknown() {
    let daemon = TestDaemon::start().await.unwrap();

    let (outcome, out) = ctl(&daemon, &["peerinfo", "ghost"]).await.unwrap();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(out, "Error: User not found\n");
}

#[tokio::test]
async fn test_ctl_reports_unreachable_daemon() {
    let daemon = TestDaemon::start().await.unwrap();
    let client = daemon.client();
    daemon.stop().await.unwrap();

    let mut out = Vec::new();
    let outcome = dispatch(&client, &["peers"], &mut out).await.unwrap();
    assert_eq!(outcome, Outcome::Failed);
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Error: failed to connect"), "{out}");
}
