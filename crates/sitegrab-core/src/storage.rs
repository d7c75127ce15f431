//! Writing response bodies to disk.
//!
//! Creates the per-host directory tree on demand and replaces any existing
//! file at the target path. A failed write may leave a partial file behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GrabError;
use crate::url_model::OutputPath;

/// Writes `body` to `root/<host>/<relative>` and returns the path written.
///
/// Missing parent directories are created; existing ones are fine. The file is
/// truncated if it exists. The handle is closed before returning, on success
/// and on error.
pub fn save_body(root: &Path, output: &OutputPath, body: &[u8]) -> Result<PathBuf, GrabError> {
    let path = root.join(output.to_path());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GrabError::filesystem(parent, e))?;
    }

    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .map_err(|e| GrabError::filesystem(&path, e))?;
    file.write_all(body)
        .map_err(|e| GrabError::filesystem(&path, e))?;
    file.flush().map_err(|e| GrabError::filesystem(&path, e))?;

    tracing::debug!(path = %path.display(), bytes = body.len(), "body written");
    Ok(path)
}
