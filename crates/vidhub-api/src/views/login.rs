//! Login form.

use super::{layout, message};

/// Render the login page, optionally with an error message.
pub fn render(error: Option<&str>) -> String {
    let error = message("error", error);
    let body = format!(
        r#"<h1>Sign in</h1>
{error}
<form method="post" action="/login">
    <p><label>Username <input type="text" name="username" autocomplete="username" required></label></p>
    <p><label>Password <input type="password" name="password" autocomplete="current-password" required></label></p>
    <p><button type="submit">Log in</button></p>
</form>"#
    );
    layout("Sign in", None, &body)
}
