//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers GET requests from a fixed route table keyed by the raw request path
//! (percent-encoding intact). Unknown paths get 404. Every response closes the
//! connection.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Route {
    /// 200 OK with this body.
    Body(Vec<u8>),
    /// Bare status line, e.g. `"500 Internal Server Error"`, with a short body.
    Status(&'static str),
    /// 302 Found pointing at this location (absolute path or URL).
    Redirect(String),
}

/// Starts a server in a background thread. Returns its authority
/// (e.g. "127.0.0.1:12345"), ready to be typed as a target.
/// The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("127.0.0.1:{}", port)
}

/// An authority on which nothing listens (connections are refused).
pub fn closed_authority() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut request_line = request.lines().next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("");
    let path = request_line.next().unwrap_or("/");

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let (status, extra, body): (&str, String, Vec<u8>) = match routes.get(path) {
        Some(Route::Body(body)) => ("200 OK", String::new(), body.clone()),
        Some(Route::Status(status)) => (status, String::new(), status.as_bytes().to_vec()),
        Some(Route::Redirect(location)) => (
            "302 Found",
            format!("Location: {}\r\n", location),
            Vec::new(),
        ),
        None => ("404 Not Found", String::new(), b"not found".to_vec()),
    };
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        status,
        body.len(),
        extra
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
}
