//! URL path -> relative filesystem path.

use std::path::{Component, Path, PathBuf};

use super::decode::percent_decode;
use super::INDEX_FILE;

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Maps a raw (percent-encoded) URL path to a path relative to the host directory.
///
/// The path is decoded, leading separators are stripped and each segment is
/// pushed as its own component so the result uses native separators. Empty and
/// `.` segments are dropped; `..` removes the previous segment and can never
/// climb above the host directory. A directory-like path (empty, ending in a
/// separator, or with nothing left after dot handling) gets `index.html`.
pub fn relative_path(raw_path: &str) -> PathBuf {
    let decoded = percent_decode(raw_path);
    let trimmed = decoded.trim_start_matches(is_separator);

    let mut parts: Vec<&str> = Vec::new();
    for segment in trimmed.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            s if is_plain_component(s) => parts.push(s),
            s => tracing::debug!(segment = s, "dropping non-plain path segment"),
        }
    }

    let last = trimmed.rsplit(is_separator).next().unwrap_or("");
    let directory_like = matches!(last, "" | "." | "..") || parts.is_empty();

    let mut path: PathBuf = parts.into_iter().collect();
    if directory_like {
        path.push(INDEX_FILE);
    }
    path
}

/// True when `segment` pushes as exactly one normal component (no drive prefix or root).
fn is_plain_component(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
