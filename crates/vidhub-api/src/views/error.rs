//! Error pages.

use super::{escape_html, layout};

/// Render a minimal error page with a heading and message.
pub fn render(heading: &str, detail: &str) -> String {
    let body = format!(
        r#"<h1>{}</h1>
<p class="error">{}</p>
<p><a href="/">Back to start</a></p>"#,
        escape_html(heading),
        escape_html(detail)
    );
    layout(heading, None, &body)
}
