//! Media file configuration.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Where video files live and where they are served from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Directory that video filenames are resolved against.
    #[serde(default = "default_root")]
    pub root: String,
    /// URL path the media directory is mounted at.
    #[serde(default = "default_mount_path")]
    pub mount_path: String,
}

impl MediaConfig {
    /// Public URL of a stored video filename.
    ///
    /// Each `/`-separated segment is percent-encoded; the separators are kept
    /// so files in subdirectories of the media root still resolve.
    pub fn url_for(&self, filename: &str) -> String {
        let path = filename
            .split('/')
            .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/{}", self.mount_path.trim_end_matches('/'), path)
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            mount_path: default_mount_path(),
        }
    }
}

fn default_root() -> String {
    "media".to_string()
}

fn default_mount_path() -> String {
    "/media".to_string()
}
