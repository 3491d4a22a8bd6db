//! Server-rendered HTML pages.
//!
//! Every view is a plain function from a view-model to a `String`. All
//! user-controlled text goes through [`escape_html`] before interpolation.

pub mod admin;
pub mod error;
pub mod login;
pub mod password;
pub mod videos;

/// Escape text for safe inclusion in HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Navigation bar for a signed-in user.
pub(crate) struct Nav<'a> {
    pub username: &'a str,
    pub is_admin: bool,
}

/// Wrap page content in the shared document shell.
pub(crate) fn layout(title: &str, nav: Option<&Nav<'_>>, body: &str) -> String {
    let title = escape_html(title);
    let nav = nav.map(render_nav).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - VidHub</title>
    <style>
        body {{ font-family: sans-serif; margin: 0; background: #f5f5f5; color: #222; }}
        nav {{ background: #222; color: #fff; padding: 10px 20px; }}
        nav a {{ color: #fff; margin-right: 15px; }}
        main {{ max-width: 960px; margin: 20px auto; padding: 0 20px; }}
        table {{ border-collapse: collapse; width: 100%; background: #fff; margin-bottom: 20px; }}
        th, td {{ border: 1px solid #ddd; padding: 6px 10px; text-align: left; }}
        form.inline {{ display: inline; }}
        .error {{ color: #b00020; }}
        .notice {{ color: #1b5e20; }}
        .empty {{ color: #666; font-style: italic; }}
    </style>
</head>
<body>
{nav}<main>
{body}
</main>
</body>
</html>"#
    )
}

fn render_nav(nav: &Nav<'_>) -> String {
    let admin_link = if nav.is_admin {
        r#"<a href="/admin">Admin</a>"#
    } else {
        ""
    };
    format!(
        r#"<nav>{admin_link}<a href="/videos">Videos</a><a href="/change-password">Change password</a><a href="/logout">Log out</a> <span>Signed in as {}</span></nav>
"#,
        escape_html(nav.username)
    )
}

/// Optional message paragraph.
pub(crate) fn message(class: &str, text: Option<&str>) -> String {
    text.map(|t| format!(r#"<p class="{class}">{}</p>"#, escape_html(t)))
        .unwrap_or_default()
}
