//! Self-service password change form.

use super::{Nav, layout, message};

/// Render the change-password page with an optional error or success notice.
pub fn render(nav: &Nav<'_>, error: Option<&str>, notice: Option<&str>) -> String {
    let error = message("error", error);
    let notice = message("notice", notice);
    let body = format!(
        r#"<h1>Change password</h1>
{error}{notice}
<form method="post" action="/change-password">
    <p><label>Current password <input type="password" name="oldPassword" autocomplete="current-password" required></label></p>
    <p><label>New password <input type="password" name="newPassword" autocomplete="new-password" required></label></p>
    <p><button type="submit">Change password</button></p>
</form>"#
    );
    layout("Change password", Some(nav), &body)
}
