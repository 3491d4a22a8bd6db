//! Integration tests for the admin panel and its CRUD forms.

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use vidhub_entity::user::UserRole;

async fn folder_id(app: &TestApp, name: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM folders WHERE name = ?1")
        .bind(name)
        .fetch_one(app.db.pool())
        .await
        .expect("folder exists")
}

#[tokio::test]
async fn test_dashboard_lists_everything() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;
    app.post_form("/admin/add-folder", &[("name", "Trips")], Some(&cookie))
        .await
        .assert_redirect("/admin");

    let response = app.get("/admin", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Admin panel"));
    assert!(response.body.contains("<td>admin</td>"));
    assert!(response.body.contains("<em>you</em>"));
    assert!(response.body.contains("Trips"));
}

#[tokio::test]
async fn test_add_user_then_duplicate_conflicts() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;

    app.post_form(
        "/admin/add-user",
        &[("username", "carol"), ("password", "pw1"), ("role", "user")],
        Some(&cookie),
    )
    .await
    .assert_redirect("/admin");
    assert!(app.get("/admin", Some(&cookie)).await.body.contains("carol"));

    let duplicate = app
        .post_form(
            "/admin/add-user",
            &[("username", "carol"), ("password", "other")],
            Some(&cookie),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(app.count("users").await, 2);
}

#[tokio::test]
async fn test_added_admin_lands_on_admin_panel() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;

    app.post_form(
        "/admin/add-user",
        &[("username", "dave"), ("password", "pw2"), ("role", "admin")],
        Some(&cookie),
    )
    .await
    .assert_redirect("/admin");

    let response = app
        .post_form("/login", &[("username", "dave"), ("password", "pw2")], None)
        .await;
    response.assert_redirect("/admin");
}

#[tokio::test]
async fn test_add_user_rejects_unknown_role_and_blank_fields() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;

    let bad_role = app
        .post_form(
            "/admin/add-user",
            &[("username", "erin"), ("password", "pw"), ("role", "owner")],
            Some(&cookie),
        )
        .await;
    assert_eq!(bad_role.status, StatusCode::BAD_REQUEST);

    let blank = app
        .post_form(
            "/admin/add-user",
            &[("username", ""), ("password", "pw")],
            Some(&cookie),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("users").await, 1);
}

#[tokio::test]
async fn test_delete_user_rules() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;
    let frank = app.create_user("frank", "pw", UserRole::User).await;
    let admin_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE username = 'admin'")
        .fetch_one(app.db.pool())
        .await
        .unwrap();

    let own = app
        .post_form("/admin/delete-user", &[("id", &admin_id.to_string())], Some(&cookie))
        .await;
    assert_eq!(own.status, StatusCode::BAD_REQUEST);

    let missing = app
        .post_form("/admin/delete-user", &[("id", "9999")], Some(&cookie))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let malformed = app
        .post_form("/admin/delete-user", &[("id", "abc")], Some(&cookie))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);

    app.post_form("/admin/delete-user", &[("id", &frank.id.to_string())], Some(&cookie))
        .await
        .assert_redirect("/admin");
    assert_eq!(app.count("users").await, 1);
}

#[tokio::test]
async fn test_folder_create_and_cascade_delete() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;

    let blank = app
        .post_form("/admin/add-folder", &[("name", "   ")], Some(&cookie))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    app.post_form("/admin/add-folder", &[("name", "Summer 2024")], Some(&cookie))
        .await
        .assert_redirect("/admin");
    let id = folder_id(&app, "Summer 2024").await.to_string();

    for (title, filename) in [("Beach", "beach.mp4"), ("Hike", "hike.mp4")] {
        app.post_form(
            "/admin/add-video",
            &[("title", title), ("filename", filename), ("folder_id", &id)],
            Some(&cookie),
        )
        .await
        .assert_redirect("/admin");
    }
    app.post_form(
        "/admin/add-video",
        &[("title", "Loose"), ("filename", "loose.mp4"), ("folder_id", "")],
        Some(&cookie),
    )
    .await
    .assert_redirect("/admin");
    assert_eq!(app.count("videos").await, 3);

    app.post_form("/admin/delete-folder", &[("id", &id)], Some(&cookie))
        .await
        .assert_redirect("/admin");

    assert_eq!(app.count("folders").await, 0);
    assert_eq!(app.count("videos").await, 1);

    let again = app
        .post_form("/admin/delete-folder", &[("id", &id)], Some(&cookie))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_video_validation() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;

    let unknown_folder = app
        .post_form(
            "/admin/add-video",
            &[("title", "Clip"), ("filename", "clip.mp4"), ("folder_id", "42")],
            Some(&cookie),
        )
        .await;
    assert_eq!(unknown_folder.status, StatusCode::BAD_REQUEST);

    let bad_folder = app
        .post_form(
            "/admin/add-video",
            &[("title", "Clip"), ("filename", "clip.mp4"), ("folder_id", "x1")],
            Some(&cookie),
        )
        .await;
    assert_eq!(bad_folder.status, StatusCode::BAD_REQUEST);

    let traversal = app
        .post_form(
            "/admin/add-video",
            &[("title", "Clip"), ("filename", "../secret.mp4")],
            Some(&cookie),
        )
        .await;
    assert_eq!(traversal.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.count("videos").await, 0);
}

#[tokio::test]
async fn test_delete_video() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;
    app.post_form(
        "/admin/add-video",
        &[("title", "Clip"), ("filename", "clip.mp4")],
        Some(&cookie),
    )
    .await
    .assert_redirect("/admin");
    let id: i64 = sqlx::query_scalar("SELECT id FROM videos")
        .fetch_one(app.db.pool())
        .await
        .unwrap();

    app.post_form("/admin/delete-video", &[("id", &id.to_string())], Some(&cookie))
        .await
        .assert_redirect("/admin");
    assert_eq!(app.count("videos").await, 0);

    let missing = app
        .post_form("/admin/delete-video", &[("id", &id.to_string())], Some(&cookie))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_admin_cannot_mutate() {
    let app = TestApp::new().await;
    app.create_user("viewer", "pw", UserRole::User).await;
    let cookie = app.login("viewer", "pw").await;

    let response = app
        .post_form("/admin/add-folder", &[("name", "Sneaky")], Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .post_form(
            "/admin/add-user",
            &[("username", "mallory"), ("password", "pw"), ("role", "admin")],
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    assert_eq!(app.count("folders").await, 0);
    assert_eq!(app.count("users").await, 2);
}

#[tokio::test]
async fn test_anonymous_mutation_redirects_to_login() {
    let app = TestApp::new().await;

    app.post_form("/admin/add-folder", &[("name", "Nope")], None)
        .await
        .assert_redirect("/");
    assert_eq!(app.count("folders").await, 0);
}
