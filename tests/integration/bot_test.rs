//! Integration tests for the shared-secret bot API.

mod helpers;

use axum::http::StatusCode;
use helpers::{BOT_SECRET, TestApp};

#[tokio::test]
async fn test_bot_provisioning_flow() {
    let app = TestApp::new().await;
    let body = r#"{"username":"alice","password":"pw1"}"#;

    let no_secret = app.post_bot(body, None).await;
    assert_eq!(no_secret.status, StatusCode::FORBIDDEN);

    let wrong_secret = app.post_bot(body, Some("guess")).await;
    assert_eq!(wrong_secret.status, StatusCode::FORBIDDEN);
    assert_eq!(app.count("users").await, 1);

    let created = app.post_bot(body, Some(BOT_SECRET)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let json = created.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["username"], "alice");
    assert_eq!(json["data"]["role"], "user");
    assert!(json["data"]["id"].is_i64());
    assert!(json["data"].get("password_hash").is_none());

    let duplicate = app.post_bot(body, Some(BOT_SECRET)).await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.json()["error"], "CONFLICT");

    let response = app
        .post_form("/login", &[("username", "alice"), ("password", "pw1")], None)
        .await;
    response.assert_redirect("/videos");
}

#[tokio::test]
async fn test_bot_rejects_bad_bodies() {
    let app = TestApp::new().await;

    let missing_field = app
        .post_bot(r#"{"username":"bob"}"#, Some(BOT_SECRET))
        .await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);

    let blank = app
        .post_bot(r#"{"username":"","password":"pw"}"#, Some(BOT_SECRET))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.json()["success"], false);

    let not_json = app.post_bot("username=bob", Some(BOT_SECRET)).await;
    assert_eq!(not_json.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.count("users").await, 1);
}

#[tokio::test]
async fn test_bot_secret_checked_before_body() {
    let app = TestApp::new().await;

    let response = app.post_bot("{broken", Some("wrong")).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_bot_cannot_create_admins() {
    let app = TestApp::new().await;

    let response = app
        .post_bot(
            r#"{"username":"eve","password":"pw","role":"admin"}"#,
            Some(BOT_SECRET),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["data"]["role"], "user");
}

#[tokio::test]
async fn test_unconfigured_secret_disables_endpoint() {
    let app = TestApp::with_bot_secret(None).await;

    let response = app
        .post_bot(r#"{"username":"zoe","password":"pw"}"#, Some(""))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .post_bot(r#"{"username":"zoe","password":"pw"}"#, Some(BOT_SECRET))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
