//! Scenario files replayed through the CLI composition root.

use std::io::Write;

use vault_notify_cli::handlers::run::{run_steps, summarize};
use vault_notify_cli::{CliConfig, CliError, Scenario, bootstrap};
use vault_notify_core::{NotificationKind, TabMessage};

fn scenario_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

const LOCKED_LOGIN: &str = r#"{
    "lockState": "locked",
    "ciphers": [{
        "id": "c1",
        "name": "example.com",
        "username": "alice",
        "password": "old-pw",
        "uris": [{"uri": "https://example.com"}]
    }],
    "steps": [
        {"step": "message", "tab": {"id": 4, "url": "https://example.com/login"},
         "message": {"command": "bgTriggerCipherNotification",
                     "form": {"username": "alice", "password": "new-pw",
                              "pageUrl": "https://example.com/login"}}},
        {"step": "unlock"},
        {"step": "message", "tab": {"id": 4, "url": "https://example.com/login"},
         "message": {"command": "bgSaveCipher"}}
    ]
}"#;

#[tokio::test]
async fn test_locked_change_is_replayed_and_saved() {
    let file = scenario_file(LOCKED_LOGIN);
    let scenario = Scenario::from_path(file.path()).unwrap();
    let ctx = bootstrap(&CliConfig::default(), &scenario).unwrap();

    let reports = run_steps(&ctx, &scenario.steps).await;
    assert_eq!(reports.len(), 3);
    assert!(reports[1].detail.starts_with("replayed 1"));

    let summary = summarize(&ctx).await;
    assert!(summary.queue.is_empty());
    assert_eq!(summary.ciphers[0].password, "new-pw");
    assert!(summary.tab_messages.iter().any(|delivered| {
        delivered.tab_id == 4
            && matches!(
                delivered.message,
                TabMessage::SaveCipherAttemptCompleted { .. }
            )
    }));
}

#[tokio::test]
async fn test_wait_step_expires_queued_notification() {
    let scenario = Scenario::from_json(
        r#"{
            "lockState": "unlocked",
            "steps": [
                {"step": "message", "tab": {"id": 1, "url": "https://example.com"},
                 "message": {"command": "bgTriggerCipherNotification",
                             "form": {"username": "bob", "password": "pw",
                                      "pageUrl": "https://example.com"}}},
                {"step": "wait", "secs": 31},
                {"step": "message", "tab": {"id": 1, "url": "https://example.com"},
                 "message": {"command": "bgSaveCipher"}}
            ]
        }"#,
    )
    .unwrap();
    let config = CliConfig {
        lifespan_secs: Some(30),
    };
    let ctx = bootstrap(&config, &scenario).unwrap();

    let reports = run_steps(&ctx, &scenario.steps).await;

    assert!(reports[2].detail.contains("NoQueuedNotification"));
    let summary = summarize(&ctx).await;
    assert!(summary.queue.is_empty());
    assert!(summary.ciphers.is_empty());
}

#[tokio::test]
async fn test_queue_survives_until_lifespan() {
    let scenario = Scenario::from_json(
        r#"{
            "lockState": "unlocked",
            "steps": [
                {"step": "message", "tab": {"id": 1, "url": "https://example.com"},
                 "message": {"command": "bgAddLogin",
                             "form": {"username": "bob", "password": "pw",
                                      "pageUrl": "https://example.com"}}},
                {"step": "wait", "secs": 10}
            ]
        }"#,
    )
    .unwrap();
    let ctx = bootstrap(&CliConfig::default(), &scenario).unwrap();

    run_steps(&ctx, &scenario.steps).await;

    let summary = summarize(&ctx).await;
    assert_eq!(summary.queue.len(), 1);
    assert!(matches!(summary.queue[0].kind, NotificationKind::AddLogin(_)));
}

#[test]
fn test_invalid_settings_fail_bootstrap() {
    let scenario =
        Scenario::from_json(r#"{"settings": {"defaultUriMatch": "never"}}"#).unwrap();
    let err = bootstrap(&CliConfig::default(), &scenario).err().unwrap();
    assert!(matches!(err, CliError::Config(_)));
}
