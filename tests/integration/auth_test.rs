//! Integration tests for login, logout, session gating and password change.

mod helpers;

use axum::http::StatusCode;
use helpers::{ADMIN_PASSWORD, TestApp};
use vidhub_entity::user::UserRole;

#[tokio::test]
async fn test_login_page_renders_form() {
    let app = TestApp::new().await;

    let response = app.get("/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"action="/login""#));
    assert!(response.body.contains(r#"name="username""#));
}

#[tokio::test]
async fn test_admin_login_redirects_to_admin_with_cookie() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/login",
            &[("username", "admin"), ("password", ADMIN_PASSWORD)],
            None,
        )
        .await;

    response.assert_redirect("/admin");
    let set_cookie = response.set_cookie().expect("cookie set");
    assert!(set_cookie.starts_with("vidhub_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_user_login_redirects_to_videos() {
    let app = TestApp::new().await;
    app.create_user("viewer", "pw12345", UserRole::User).await;

    let response = app
        .post_form(
            "/login",
            &[("username", "viewer"), ("password", "pw12345")],
            None,
        )
        .await;

    response.assert_redirect("/videos");
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::new().await;

    let wrong_password = app
        .post_form("/login", &[("username", "admin"), ("password", "nope")], None)
        .await;
    let unknown_user = app
        .post_form("/login", &[("username", "ghost"), ("password", "nope")], None)
        .await;

    for response in [&wrong_password, &unknown_user] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert!(response.body.contains("Invalid username or password"));
        assert!(response.session_cookie().is_none());
    }
}

#[tokio::test]
async fn test_username_is_case_sensitive() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/login",
            &[("username", "ADMIN"), ("password", ADMIN_PASSWORD)],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_pages_redirect_without_session() {
    let app = TestApp::new().await;

    for path in ["/admin", "/videos", "/videos/folder/1", "/change-password"] {
        app.get(path, None).await.assert_redirect("/");
    }
    app.get("/videos", Some("vidhub_session=forged-token"))
        .await
        .assert_redirect("/");
}

#[tokio::test]
async fn test_login_page_redirects_signed_in_user() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;

    app.get("/", Some(&cookie)).await.assert_redirect("/admin");
}

#[tokio::test]
async fn test_non_admin_gets_forbidden_on_admin_panel() {
    let app = TestApp::new().await;
    app.create_user("viewer", "pw12345", UserRole::User).await;
    let cookie = app.login("viewer", "pw12345").await;

    let response = app.get("/admin", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app.get("/logout", Some(&cookie)).await;
    response.assert_redirect("/");
    assert!(response.set_cookie().expect("cookie cleared").contains("vidhub_session="));
    assert!(response.session_cookie().is_none());

    app.get("/admin", Some(&cookie)).await.assert_redirect("/");
    assert_eq!(app.count("sessions").await, 0);
}

#[tokio::test]
async fn test_logout_without_session_is_harmless() {
    let app = TestApp::new().await;

    app.get("/logout", None).await.assert_redirect("/");
}

#[tokio::test]
async fn test_deleted_user_session_stops_working() {
    let app = TestApp::new().await;
    let viewer = app.create_user("viewer", "pw12345", UserRole::User).await;
    let viewer_cookie = app.login("viewer", "pw12345").await;
    let admin_cookie = app.login_admin().await;

    app.post_form(
        "/admin/delete-user",
        &[("id", &viewer.id.to_string())],
        Some(&admin_cookie),
    )
    .await
    .assert_redirect("/admin");

    app.get("/videos", Some(&viewer_cookie))
        .await
        .assert_redirect("/");
}

#[tokio::test]
async fn test_change_password_rejects_wrong_current_password() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app
        .post_form(
            "/change-password",
            &[("oldPassword", "wrong"), ("newPassword", "newpass")],
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Current password is incorrect"));

    // Old password still works.
    app.login_admin().await;
}

#[tokio::test]
async fn test_change_password_success_revokes_other_sessions() {
    let app = TestApp::new().await;
    let current = app.login_admin().await;
    let other = app.login_admin().await;

    let form = app.get("/change-password", Some(&current)).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains(r#"name="oldPassword""#));

    let response = app
        .post_form(
            "/change-password",
            &[("oldPassword", ADMIN_PASSWORD), ("newPassword", "newpass")],
            Some(&current),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Password changed."));

    assert_eq!(app.get("/admin", Some(&current)).await.status, StatusCode::OK);
    app.get("/admin", Some(&other)).await.assert_redirect("/");

    let old = app
        .post_form(
            "/login",
            &[("username", "admin"), ("password", ADMIN_PASSWORD)],
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);
    app.login("admin", "newpass").await;
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new().await;

    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["database"], true);
}

#[tokio::test]
async fn test_health_degraded_when_database_closed() {
    let app = TestApp::new().await;
    app.db.close().await;

    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["database"], false);
}
