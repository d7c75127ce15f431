//! URL modeling and output path derivation.
//!
//! Turns a typed target into the request URL, and a final response URL into
//! `<authority>/<decoded path>` under the output root. Everything here is pure:
//! no network or disk access.

mod decode;
mod path;

use std::path::PathBuf;

use crate::error::GrabError;

pub use decode::percent_decode;
pub use path::relative_path;

/// File name used for directory-like URL paths.
pub const INDEX_FILE: &str = "index.html";

/// The only scheme ever requested.
pub const SCHEME: &str = "http";

/// Where a response body lands, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath {
    /// Network authority of the URL, verbatim (dots, case and port preserved).
    pub host: String,
    /// Path below the host directory, always ending in a file name.
    pub relative: PathBuf,
}

impl OutputPath {
    /// Joins host and relative path component-wise.
    pub fn to_path(&self) -> PathBuf {
        let mut path = PathBuf::from(&self.host);
        path.push(&self.relative);
        path
    }
}

/// Builds `http://<target>` and checks it parses with a host.
///
/// The authority is kept as typed so the host directory matches what the
/// server reports back. Path and query come from the parsed URL, which
/// percent-encodes characters such as spaces that libcurl would reject.
pub fn request_url(target: &str) -> Result<String, GrabError> {
    let full = format!("{SCHEME}://{target}");
    let parsed =
        url::Url::parse(&full).map_err(|e| GrabError::InvalidUrl(format!("{full}: {e}")))?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(GrabError::InvalidUrl(format!("{full}: missing host")));
    }

    let mut request = format!("{SCHEME}://{}", raw_authority(&full));
    if !url_path(&full).is_empty() {
        request.push_str(parsed.path());
    }
    if let Some(query) = parsed.query() {
        request.push('?');
        request.push_str(query);
    }
    Ok(request)
}

/// Authority text including any userinfo, exactly as written.
fn raw_authority(url: &str) -> &str {
    let rest = after_scheme(url);
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

/// Returns the authority (host and optional port) of `url`, without userinfo.
///
/// Taken verbatim from the URL text: `http://Sub.Example.com:80/x` yields
/// `Sub.Example.com:80`. Returns `None` when the authority is empty.
pub fn authority(url: &str) -> Option<&str> {
    let authority = raw_authority(url);
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Returns the raw path component of `url`, excluding query and fragment.
pub fn url_path(url: &str) -> &str {
    let rest = after_scheme(url);
    let start = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let rest = &rest[start..];
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

fn after_scheme(url: &str) -> &str {
    url.split_once("://").map_or(url, |(_, rest)| rest)
}

/// Derives the output path for a (final) response URL.
pub fn derive_output_path(url: &str) -> Result<OutputPath, GrabError> {
    let host = authority(url)
        .ok_or_else(|| GrabError::OutputPath(format!("{url}: no host to name a directory")))?;
    if matches!(host, "." | "..") || host.contains(['\\', '\0']) {
        return Err(GrabError::OutputPath(format!(
            "{url}: host {host:?} cannot name a directory"
        )));
    }
    Ok(OutputPath {
        host: host.to_string(),
        relative: relative_path(url_path(url)),
    })
}

/// Bare file name a URL would be saved under, without decoding.
///
/// Query and fragment are ignored; a directory-like path yields `index.html`.
pub fn file_name_hint(url: &str) -> &str {
    let path = url_path(url);
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => INDEX_FILE,
    }
}
