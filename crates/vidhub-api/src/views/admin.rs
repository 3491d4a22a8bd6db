//! Admin dashboard.

use std::collections::HashMap;
use std::fmt::Write;

use vidhub_core::config::MediaConfig;
use vidhub_service::AdminDashboard;

use super::{Nav, escape_html, layout};

/// Render the admin panel: users, folders and videos with their forms.
pub fn render(
    nav: &Nav<'_>,
    current_user_id: i64,
    data: &AdminDashboard,
    media: &MediaConfig,
) -> String {
    let mut users = String::new();
    for user in &data.users {
        let action = if user.id == current_user_id {
            "<em>you</em>".to_string()
        } else {
            delete_button("/admin/delete-user", user.id)
        };
        let _ = writeln!(
            users,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{action}</td></tr>",
            user.id,
            escape_html(&user.username),
            user.role,
        );
    }

    let folder_names: HashMap<i64, &str> = data
        .folders
        .iter()
        .map(|f| (f.id, f.name.as_str()))
        .collect();

    let mut folders = String::new();
    let mut folder_options = String::from(r#"<option value="">(no folder)</option>"#);
    for folder in &data.folders {
        let name = escape_html(&folder.name);
        let _ = writeln!(
            folders,
            r#"<tr><td>{id}</td><td><a href="/videos/folder/{id}">{name}</a></td><td>{action}</td></tr>"#,
            id = folder.id,
            action = delete_button("/admin/delete-folder", folder.id),
        );
        let _ = write!(folder_options, r#"<option value="{}">{name}</option>"#, folder.id);
    }

    let mut videos = String::new();
    for video in &data.videos {
        let folder = video
            .folder_id
            .map(|id| {
                folder_names
                    .get(&id)
                    .map(|name| escape_html(name))
                    .unwrap_or_else(|| id.to_string())
            })
            .unwrap_or_else(|| "<em>unfiled</em>".to_string());
        let _ = writeln!(
            videos,
            r#"<tr><td>{}</td><td>{}</td><td><a href="{}">{}</a></td><td>{folder}</td><td>{}</td></tr>"#,
            video.id,
            escape_html(&video.title),
            escape_html(&media.url_for(&video.filename)),
            escape_html(&video.filename),
            delete_button("/admin/delete-video", video.id),
        );
    }

    let body = format!(
        r#"<h1>Admin panel</h1>

<h2>Users</h2>
<table>
<tr><th>ID</th><th>Username</th><th>Role</th><th></th></tr>
{users}</table>
<form method="post" action="/admin/add-user">
    <input type="text" name="username" placeholder="Username" required>
    <input type="password" name="password" placeholder="Password" required>
    <select name="role"><option value="user">user</option><option value="admin">admin</option></select>
    <button type="submit">Add user</button>
</form>

<h2>Folders</h2>
<table>
<tr><th>ID</th><th>Name</th><th></th></tr>
{folders}</table>
<form method="post" action="/admin/add-folder">
    <input type="text" name="name" placeholder="Folder name" required>
    <button type="submit">Add folder</button>
</form>

<h2>Videos</h2>
<table>
<tr><th>ID</th><th>Title</th><th>File</th><th>Folder</th><th></th></tr>
{videos}</table>
<form method="post" action="/admin/add-video">
    <input type="text" name="title" placeholder="Title" required>
    <input type="text" name="filename" placeholder="path/to/file.mp4" required>
    <select name="folder_id">{folder_options}</select>
    <button type="submit">Add video</button>
</form>"#
    );

    layout("Admin", Some(nav), &body)
}

fn delete_button(action: &str, id: i64) -> String {
    format!(
        r#"<form class="inline" method="post" action="{action}"><input type="hidden" name="id" value="{id}"><button type="submit">Delete</button></form>"#
    )
}
