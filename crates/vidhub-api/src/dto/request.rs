//! Request DTOs with validation.
//!
//! Browser forms are URL-encoded; field names match the HTML views.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login form.
///
/// Empty fields are not rejected here; they simply fail to authenticate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// Admin "add user" form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddUserForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// `admin` or `user`; blank means `user`.
    #[serde(default)]
    pub role: Option<String>,
}

/// Any delete form: a single row id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IdForm {
    #[serde(default)]
    pub id: String,
}

/// Admin "add folder" form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddFolderForm {
    #[validate(length(min = 1, message = "Folder name is required"))]
    pub name: String,
}

/// Admin "add video" form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddVideoForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Filename is required"))]
    pub filename: String,
    /// Blank or absent means unfiled.
    #[serde(default)]
    pub folder_id: Option<String>,
}

/// Self-service password change form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordForm {
    /// Current password.
    #[serde(rename = "oldPassword", default)]
    pub old_password: String,
    /// Replacement password.
    #[serde(rename = "newPassword", default)]
    pub new_password: String,
}

/// Bot provisioning request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BotAddUserRequest {
    /// Username to create.
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    /// Initial password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
