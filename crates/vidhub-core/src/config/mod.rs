//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! layered TOML files and environment variables. Each sub-module represents
//! a logical configuration section, and every section has defaults so an
//! empty configuration is valid.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod media;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::media::MediaConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`VIDHUB__SERVER__PORT`, ...).
pub const ENV_PREFIX: &str = "VIDHUB";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Session management settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Media file settings.
    #[serde(default)]
    pub media: MediaConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Sources, later ones winning: `config/default.toml`, `config/{env}.toml`,
    /// the explicit `config_path` (if any), `VIDHUB__*` environment variables,
    /// and finally the bare `PORT` variable for `server.port`.
    pub fn load(config_path: Option<&str>, env: &str) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject combinations the server cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.session.cookie_name.trim().is_empty() {
            return Err(AppError::configuration("session.cookie_name must not be empty"));
        }
        if self.auth.bot_secret_header.trim().is_empty() {
            return Err(AppError::configuration("auth.bot_secret_header must not be empty"));
        }
        if !self.media.mount_path.starts_with('/') || self.media.mount_path == "/" {
            return Err(AppError::configuration(
                "media.mount_path must be an absolute sub-path such as /media",
            ));
        }
        Ok(())
    }
}
