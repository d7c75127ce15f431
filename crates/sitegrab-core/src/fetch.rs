//! Single blocking HTTP GET.
//!
//! Uses the curl crate (libcurl) with its default timeouts. Redirects are
//! followed by libcurl; the effective URL after the last hop is reported so the
//! output path can be derived from where the body actually came from.

use std::fmt;

/// What one GET produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// Final status code, after any redirects.
    pub status: u32,
    /// URL the body was served from.
    pub final_url: String,
    pub body: Vec<u8>,
}

/// Issues a GET and returns the response, whatever its status.
///
/// Non-2xx statuses are a normal response here; only failures to get any
/// response are errors.
pub trait Fetch {
    fn get(&mut self, url: &str) -> Result<FetchResponse, TransportError>;
}

/// Broad cause of a transport failure, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Host name could not be resolved.
    Resolve,
    /// Connection refused, reset, or dropped mid-transfer.
    Connect,
    Timeout,
    Other,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportKind::Resolve => "could not resolve host",
            TransportKind::Connect => "connection failed",
            TransportKind::Timeout => "timed out",
            TransportKind::Other => "request failed",
        };
        f.write_str(s)
    }
}

/// No HTTP response was obtained.
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {source}")]
pub struct TransportError {
    pub kind: TransportKind,
    #[source]
    pub source: curl::Error,
}

impl From<curl::Error> for TransportError {
    fn from(source: curl::Error) -> Self {
        TransportError {
            kind: classify_curl_error(&source),
            source,
        }
    }
}

/// Classify a curl error for reporting.
pub fn classify_curl_error(e: &curl::Error) -> TransportKind {
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return TransportKind::Resolve;
    }
    if e.is_operation_timedout() {
        return TransportKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportKind::Connect;
    }
    TransportKind::Other
}

/// libcurl-backed [`Fetch`]. A fresh `Easy` handle per request, so no state
/// (cookies, connections) carries over between targets.
#[derive(Debug, Default)]
pub struct CurlFetcher;

impl CurlFetcher {
    pub fn new() -> Self {
        CurlFetcher
    }
}

impl Fetch for CurlFetcher {
    fn get(&mut self, url: &str) -> Result<FetchResponse, TransportError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let final_url = easy
            .effective_url()?
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string());

        tracing::debug!(url, %final_url, status, bytes = body.len(), "GET finished");

        Ok(FetchResponse {
            status,
            final_url,
            body,
        })
    }
}
