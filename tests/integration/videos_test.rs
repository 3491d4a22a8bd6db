//! Integration tests for library browsing and media serving.

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use vidhub_entity::user::UserRole;

/// Seed one folder with a video plus an unfiled video; returns the folder id.
async fn seed_library(app: &TestApp, admin_cookie: &str) -> String {
    app.post_form("/admin/add-folder", &[("name", "Trips")], Some(admin_cookie))
        .await
        .assert_redirect("/admin");
    let id: i64 = sqlx::query_scalar("SELECT id FROM folders WHERE name = 'Trips'")
        .fetch_one(app.db.pool())
        .await
        .unwrap();
    let id = id.to_string();

    app.post_form(
        "/admin/add-video",
        &[("title", "Alps"), ("filename", "trips/alps.mp4"), ("folder_id", &id)],
        Some(admin_cookie),
    )
    .await
    .assert_redirect("/admin");
    app.post_form(
        "/admin/add-video",
        &[("title", "Intro"), ("filename", "intro.mp4")],
        Some(admin_cookie),
    )
    .await
    .assert_redirect("/admin");

    id
}

#[tokio::test]
async fn test_library_shows_folders_and_unfiled_videos() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let folder_id = seed_library(&app, &admin).await;
    app.create_user("viewer", "pw", UserRole::User).await;
    let cookie = app.login("viewer", "pw").await;

    let response = app.get("/videos", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Welcome, viewer"));
    assert!(response.body.contains(&format!(r#"href="/videos/folder/{folder_id}""#)));
    assert!(response.body.contains("Intro"));
    assert!(response.body.contains(r#"src="/media/intro.mp4""#));
    assert!(!response.body.contains("Alps"));
}

#[tokio::test]
async fn test_folder_page_lists_its_videos() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let folder_id = seed_library(&app, &admin).await;

    let response = app
        .get(&format!("/videos/folder/{folder_id}"), Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<h1>Trips</h1>"));
    assert!(response.body.contains("Alps"));
    assert!(response.body.contains("/media/trips/alps.mp4"));
    assert!(!response.body.contains("Intro"));
}

#[tokio::test]
async fn test_empty_folder_says_so() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    app.post_form("/admin/add-folder", &[("name", "Empty")], Some(&admin))
        .await
        .assert_redirect("/admin");
    let id: i64 = sqlx::query_scalar("SELECT id FROM folders")
        .fetch_one(app.db.pool())
        .await
        .unwrap();

    let response = app.get(&format!("/videos/folder/{id}"), Some(&admin)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("This folder is empty."));
}

#[tokio::test]
async fn test_unknown_or_malformed_folder_redirects() {
    let app = TestApp::new().await;
    let cookie = app.login_admin().await;

    app.get("/videos/folder/999", Some(&cookie))
        .await
        .assert_redirect("/videos");
    app.get("/videos/folder/abc", Some(&cookie))
        .await
        .assert_redirect("/videos");
}

#[tokio::test]
async fn test_titles_are_escaped() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    app.post_form(
        "/admin/add-video",
        &[("title", "<b>bold</b>"), ("filename", "bold.mp4")],
        Some(&admin),
    )
    .await
    .assert_redirect("/admin");

    let response = app.get("/videos", Some(&admin)).await;

    assert!(response.body.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(!response.body.contains("<b>bold</b>"));
}

#[tokio::test]
async fn test_media_requires_session() {
    let app = TestApp::new().await;
    app.write_media("clip.mp4", b"not really a video");

    app.get("/media/clip.mp4", None).await.assert_redirect("/");

    let cookie = app.login_admin().await;
    let response = app.get("/media/clip.mp4", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "not really a video");

    let missing = app.get("/media/nope.mp4", Some(&cookie)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filename_with_reserved_characters_plays() {
    let app = TestApp::new().await;
    app.write_media("clip #1.mp4", b"hash in name");
    let cookie = app.login_admin().await;
    app.post_form(
        "/admin/add-video",
        &[("title", "Clip"), ("filename", "clip #1.mp4")],
        Some(&cookie),
    )
    .await
    .assert_redirect("/admin");

    let page = app.get("/videos", Some(&cookie)).await;
    assert!(page.body.contains(r#"src="/media/clip%20%231.mp4""#));

    let media = app.get("/media/clip%20%231.mp4", Some(&cookie)).await;
    assert_eq!(media.status, StatusCode::OK);
    assert_eq!(media.body, "hash in name");
}

#[tokio::test]
async fn test_deleted_folder_page_redirects_to_library() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    app.get("/", Some(&admin)).await.assert_redirect("/admin");

    app.post_form("/admin/add-folder", &[("name", "Lectures")], Some(&admin))
        .await
        .assert_redirect("/admin");
    let id: i64 = sqlx::query_scalar("SELECT id FROM folders WHERE name = 'Lectures'")
        .fetch_one(app.db.pool())
        .await
        .unwrap();
    app.post_form(
        "/admin/add-video",
        &[("title", "L1"), ("filename", "l1.mp4"), ("folder_id", &id.to_string())],
        Some(&admin),
    )
    .await
    .assert_redirect("/admin");

    let page = app.get(&format!("/videos/folder/{id}"), Some(&admin)).await;
    assert!(page.body.contains("L1"));

    app.post_form("/admin/delete-folder", &[("id", &id.to_string())], Some(&admin))
        .await
        .assert_redirect("/admin");

    assert_eq!(app.count("videos").await, 0);
    app.get(&format!("/videos/folder/{id}"), Some(&admin))
        .await
        .assert_redirect("/videos");
}
