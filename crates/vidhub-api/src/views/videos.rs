//! Library and per-folder video pages.

use std::fmt::Write;

use vidhub_core::config::MediaConfig;
use vidhub_entity::video::Video;
use vidhub_service::{FolderListing, Library};

use super::{Nav, escape_html, layout};

/// Render the library: every folder plus videos that belong to none.
pub fn render_library(nav: &Nav<'_>, library: &Library, media: &MediaConfig) -> String {
    let folders = if library.folders.is_empty() {
        r#"<p class="empty">No folders yet.</p>"#.to_string()
    } else {
        let mut list = String::from("<ul>\n");
        for folder in &library.folders {
            let _ = writeln!(
                list,
                r#"<li><a href="/videos/folder/{}">{}</a></li>"#,
                folder.id,
                escape_html(&folder.name)
            );
        }
        list.push_str("</ul>");
        list
    };

    let unfiled = if library.unfiled.is_empty() {
        String::new()
    } else {
        format!(
            "<h2>Other videos</h2>\n{}",
            video_list(&library.unfiled, media)
        )
    };

    let body = format!(
        r#"<h1>Welcome, {}</h1>
<h2>Folders</h2>
{folders}
{unfiled}"#,
        escape_html(nav.username)
    );
    layout("Videos", Some(nav), &body)
}

/// Render one folder with its videos, or an explicit empty notice.
pub fn render_folder(nav: &Nav<'_>, listing: &FolderListing, media: &MediaConfig) -> String {
    let content = if listing.is_empty {
        r#"<p class="empty">This folder is empty.</p>"#.to_string()
    } else {
        video_list(&listing.videos, media)
    };

    let body = format!(
        r#"<h1>{}</h1>
{content}
<p><a href="/videos">Back to all folders</a></p>"#,
        escape_html(&listing.folder.name)
    );
    layout(&listing.folder.name, Some(nav), &body)
}

fn video_list(videos: &[Video], media: &MediaConfig) -> String {
    let mut out = String::new();
    for video in videos {
        let url = escape_html(&media.url_for(&video.filename));
        let _ = writeln!(
            out,
            r#"<section>
    <h3>{}</h3>
    <video controls preload="metadata" width="640" src="{url}"></video>
    <p><a href="{url}">Download</a></p>
</section>"#,
            escape_html(&video.title)
        );
    }
    out
}
