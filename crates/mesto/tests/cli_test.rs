//! Integration tests for the `mesto` CLI binary.
//!
//! Argument parsing, help output, completions and config handling run
//! without a server; the session tests point the binary at a wiremock
//! server standing in for the gallery API.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `mesto` binary with env isolation.
///
/// Clears all `MESTO_*` env vars and points config directories at `home`
/// so tests never touch the user's real configuration.
fn mesto_cmd(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mesto");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("MESTO_PROFILE")
        .env_remove("MESTO_SERVER")
        .env_remove("MESTO_COHORT")
        .env_remove("MESTO_TOKEN")
        .env_remove("MESTO_OUTPUT")
        .env_remove("MESTO_INSECURE")
        .env_remove("MESTO_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn user_json() -> serde_json::Value {
    json!({
        "_id": "u1",
        "name": "Jacques Cousteau",
        "about": "Explorer",
        "avatar": "https://example.com/avatar.png",
        "cohort": "cohort-1"
    })
}

fn card_json(id: &str, likes: &[&str]) -> serde_json::Value {
    json!({
        "_id": id,
        "name": format!("Card {id}"),
        "link": format!("https://example.com/{id}.jpg"),
        "owner": { "_id": "u1", "name": "Jacques Cousteau" },
        "likes": likes.iter().map(|u| json!({ "_id": u })).collect::<Vec<_>>(),
        "createdAt": "2024-05-01T10:00:00.000Z"
    })
}

/// Mock server answering the two start-up requests.
async fn gallery() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/cohort-1/users/me"))
        .and(header("authorization", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/cohort-1/cards"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([card_json("c2", &["u1"]), card_json("c1", &[])])),
        )
        .mount(&server)
        .await;
    server
}

fn session_args(server: &MockServer) -> Vec<String> {
    vec![
        "--server".into(),
        server.uri(),
        "--cohort".into(),
        "cohort-1".into(),
        "--token".into(),
        "test-token".into(),
    ]
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = mesto_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    mesto_cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("photo cards")
                .and(predicate::str::contains("profile"))
                .and(predicate::str::contains("cards"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    mesto_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mesto"));
}

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    mesto_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_invalid_output_format() {
    let home = tempfile::tempdir().unwrap();
    mesto_cmd(home.path())
        .args(["--output", "xml", "cards", "list"])
        .assert()
        .failure()
        .code(2);
}

// ── Configuration ───────────────────────────────────────────────────

#[test]
fn test_missing_config_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    let output = mesto_cmd(home.path()).args(["cards", "list"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("mesto config init"));
}

#[test]
fn test_unknown_profile() {
    let home = tempfile::tempdir().unwrap();
    mesto_cmd(home.path())
        .args(["--profile", "ghost", "profile", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn test_config_set_then_show_redacts_token() {
    let home = tempfile::tempdir().unwrap();
    mesto_cmd(home.path())
        .args(["config", "set", "cohort", "cohort-9"])
        .assert()
        .success();
    mesto_cmd(home.path())
        .args(["config", "set", "token", "super-secret"])
        .assert()
        .success();

    mesto_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("cohort = \"cohort-9\"")
                .and(predicate::str::contains("****"))
                .and(predicate::str::contains("super-secret").not()),
        );

    mesto_cmd(home.path())
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default *"));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    mesto_cmd(home.path())
        .args(["config", "set", "colour", "red"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn test_config_use_requires_existing_profile() {
    let home = tempfile::tempdir().unwrap();
    mesto_cmd(home.path())
        .args(["config", "use", "work"])
        .assert()
        .code(2);
}

// ── Session commands (against a mock server) ────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_cards_list_plain_keeps_server_order() {
    let server = gallery().await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["--output", "plain", "cards", "list"])
        .assert()
        .success()
        .stdout("c2\nc1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cards_list_liked_filter_json() {
    let server = gallery().await;
    let home = tempfile::tempdir().unwrap();

    let output = mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["--output", "json", "cards", "list", "--liked"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let views: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(views.as_array().unwrap().len(), 1);
    assert_eq!(views[0]["id"], "c2");
    assert_eq!(views[0]["liked_by_me"], true);
    assert_eq!(views[0]["owned_by_me"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_show_json() {
    let server = gallery().await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["--output", "json-compact", "profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"Jacques Cousteau""#));
}

/// Mock server where only one of the start-up requests succeeds.
async fn half_gallery(failing_path: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(failing_path.to_owned()))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "Server error" })))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/cohort-1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/cohort-1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([card_json("c1", &[])])))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_show_survives_failed_card_fetch() {
    let server = half_gallery("/v1/cohort-1/cards").await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["--output", "plain", "profile", "show"])
        .assert()
        .success()
        .stdout("u1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cards_list_survives_failed_profile_fetch() {
    let server = half_gallery("/v1/cohort-1/users/me").await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["--output", "plain", "cards", "list"])
        .assert()
        .success()
        .stdout("c1\n");

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["cards", "like", "c1"])
        .assert()
        .code(1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_like_toggles_through_api() {
    let server = gallery().await;
    Mock::given(method("PUT"))
        .and(path("/v1/cohort-1/cards/c1/likes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_json("c1", &["u1"])))
        .expect(1)
        .mount(&server)
        .await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["--output", "plain", "cards", "like", "c1"])
        .assert()
        .success()
        .stdout("c1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_yes_skips_prompt() {
    let server = gallery().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/cohort-1/cards/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .expect(1)
        .mount(&server)
        .await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["--yes", "cards", "delete", "c1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Card deleted"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_without_terminal_requires_yes() {
    let server = gallery().await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["cards", "delete", "c1"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_card_posts_form() {
    let server = gallery().await;
    Mock::given(method("POST"))
        .and(path("/v1/cohort-1/cards"))
        .and(body_json(json!({ "name": "Altai", "link": "https://example.com/altai.jpg" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "c3",
            "name": "Altai",
            "link": "https://example.com/altai.jpg",
            "owner": { "_id": "u1" },
            "likes": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args([
            "--output",
            "plain",
            "cards",
            "add",
            "--name",
            "Altai",
            "--link",
            "https://example.com/altai.jpg",
        ])
        .assert()
        .success()
        .stdout("c3\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_card_name_is_usage_error() {
    let server = gallery().await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["cards", "add", "--name", "A", "--link", "https://example.com/a.jpg"])
        .assert()
        .code(2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_avatar_reports_server_message() {
    let server = gallery().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/cohort-1/users/me/avatar"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "avatar must be a URL" })),
        )
        .mount(&server)
        .await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["profile", "avatar", "not-a-url"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("avatar must be a URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bad_token_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Authorization required" })))
        .mount(&server)
        .await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["profile", "show"])
        .assert()
        .code(3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_card_is_not_found() {
    let server = gallery().await;
    let home = tempfile::tempdir().unwrap();

    mesto_cmd(home.path())
        .args(session_args(&server))
        .args(["cards", "show", "zzz"])
        .assert()
        .code(4);
}
