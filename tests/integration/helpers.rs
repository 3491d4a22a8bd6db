//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use vidhub_api::AppState;
use vidhub_auth::PasswordHasher;
use vidhub_core::config::AppConfig;
use vidhub_database::DatabasePool;
use vidhub_database::migration::run_migrations;
use vidhub_database::repositories::UserRepository;
use vidhub_entity::user::{CreateUser, User, UserRole};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "secret1";
pub const BOT_SECRET: &str = "bot-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database handle for direct queries
    pub db: DatabasePool,
    /// Application config
    pub config: AppConfig,
    /// Directory served under the media mount path
    pub media_dir: TempDir,
}

impl TestApp {
    /// Create a test application with the bot API enabled.
    pub async fn new() -> Self {
        Self::with_bot_secret(Some(BOT_SECRET)).await
    }

    /// Create a test application with an in-memory database and a seeded admin.
    pub async fn with_bot_secret(bot_secret: Option<&str>) -> Self {
        let media_dir = tempfile::tempdir().expect("Failed to create media dir");

        let mut config = AppConfig::default();
        config.auth.bot_secret = bot_secret.map(str::to_string);
        config.auth.bootstrap_admin_username = ADMIN_USERNAME.to_string();
        config.auth.bootstrap_admin_password = Some(ADMIN_PASSWORD.to_string());
        config.media.root = media_dir.path().to_string_lossy().into_owned();

        let db = DatabasePool::connect_in_memory()
            .await
            .expect("Failed to open in-memory database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(config.clone(), db.clone());
        state
            .bootstrap_service
            .ensure_admin()
            .await
            .expect("Failed to seed admin");

        let router = vidhub_api::build_app(state);

        Self {
            router,
            db,
            config,
            media_dir,
        }
    }

    /// Insert a user directly and return it.
    pub async fn create_user(&self, username: &str, password: &str, role: UserRole) -> User {
        let hash = PasswordHasher::new()
            .hash_password(password)
            .expect("Failed to hash password");
        UserRepository::new(self.db.pool().clone())
            .create(&CreateUser {
                username: username.to_string(),
                password_hash: hash,
                role,
            })
            .await
            .expect("Failed to create test user")
    }

    /// Write a file under the media root.
    pub fn write_media(&self, name: &str, contents: &[u8]) {
        std::fs::write(self.media_dir.path().join(name), contents).expect("Failed to write media");
    }

    /// Count rows in a table.
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to count rows")
    }

    /// Log in through the form and return the `name=value` cookie pair.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post_form("/login", &[("username", username), ("password", password)], None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::SEE_OTHER,
            "Login failed: {}",
            response.body
        );
        response
            .session_cookie()
            .expect("No session cookie in login response")
    }

    /// Log in as the seeded admin.
    pub async fn login_admin(&self) -> String {
        self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await
    }

    /// GET a path, optionally with a session cookie.
    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.send(req.body(Body::empty()).expect("Failed to build request"))
            .await
    }

    /// POST a URL-encoded form. Values must not need escaping beyond spaces.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={}", v.replace(' ', "+")))
            .collect::<Vec<_>>()
            .join("&");

        let mut req = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.send(req.body(Body::from(body)).expect("Failed to build request"))
            .await
    }

    /// POST a raw JSON body to the bot API with an optional secret header.
    pub async fn post_bot(&self, body: &str, secret: Option<&str>) -> TestResponse {
        let mut req = Request::builder()
            .method("POST")
            .uri("/api/add-user")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(secret) = secret {
            req = req.header(self.config.auth.bot_secret_header.as_str(), secret);
        }
        self.send(req.body(Body::from(body.to_string())).expect("Failed to build request"))
            .await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub body: String,
}

impl TestResponse {
    /// The redirect target, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// The full `Set-Cookie` header, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }

    /// The `name=value` pair of a non-empty session cookie being set.
    pub fn session_cookie(&self) -> Option<String> {
        let pair = self.set_cookie()?.split(';').next()?.trim();
        match pair.split_once('=') {
            Some((_, value)) if !value.is_empty() => Some(pair.to_string()),
            _ => None,
        }
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("Body is not JSON")
    }

    /// Assert a 303 redirect to `target`.
    pub fn assert_redirect(&self, target: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location(), Some(target));
    }
}
