//! Password policy enforcement for new passwords.

use vidhub_core::config::AuthConfig;
use vidhub_core::error::AppError;

/// Validates new passwords against the configured minimum length.
///
/// There is no strength policy; the only rule is a minimum character count,
/// which defaults to one (i.e. "not empty").
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length, in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length.max(1),
        }
    }

    /// Validates a password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        Ok(())
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}
