//! Minimal HTTP/1.1 server answering HEAD requests for integration tests.
//!
//! Each path is mapped to a canned response. Unknown paths get 404. Every
//! request is counted so tests can assert that no network traffic happened.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct CannedResponse {
    pub status: u16,
    /// `None` omits the header entirely.
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
    /// Sleep before answering (simulates a hanging server).
    pub stall: Option<Duration>,
}

impl CannedResponse {
    pub fn new(status: u16, content_length: Option<u64>, content_type: Option<&str>) -> Self {
        Self {
            status,
            content_length,
            content_type: content_type.map(str::to_string),
            stall: None,
        }
    }

    pub fn stalled(mut self, stall: Duration) -> Self {
        self.stall = Some(stall);
        self
    }
}

pub struct HeadServer {
    base: String,
    hits: Arc<AtomicUsize>,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl HeadServer {
    /// Starts a server in a background thread. It runs until the process exits.
    pub fn start(routes: Vec<(&str, CannedResponse)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Arc<HashMap<String, CannedResponse>> =
            Arc::new(routes.into_iter().map(|(path, r)| (path.to_string(), r)).collect());
        let hits = Arc::new(AtomicUsize::new(0));
        let user_agents = Arc::new(Mutex::new(Vec::new()));

        let counter = Arc::clone(&hits);
        let agents = Arc::clone(&user_agents);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let counter = Arc::clone(&counter);
                let agents = Arc::clone(&agents);
                thread::spawn(move || handle(stream, &routes, &counter, &agents));
            }
        });

        Self {
            base: format!("http://127.0.0.1:{}", port),
            hits,
            user_agents,
        }
    }

    /// Absolute URL for `path` (which starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// `User-Agent` header of every request received, in arrival order.
    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, CannedResponse>,
    hits: &AtomicUsize,
    user_agents: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    hits.fetch_add(1, Ordering::SeqCst);
    if let Some(agent) = request.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.trim().eq_ignore_ascii_case("user-agent").then(|| value.trim().to_string())
    }) {
        user_agents.lock().unwrap().push(agent);
    }

    let mut parts = request.lines().next().unwrap_or_default().split_whitespace();
    let method = parts.next().unwrap_or_default();
    let path = parts.next().unwrap_or("/");

    if !method.eq_ignore_ascii_case("HEAD") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }

    let canned = routes
        .get(path)
        .cloned()
        .unwrap_or_else(|| CannedResponse::new(404, Some(0), None));
    if let Some(stall) = canned.stall {
        thread::sleep(stall);
    }

    let mut response = format!("HTTP/1.1 {} {}\r\n", canned.status, reason(canned.status));
    if let Some(length) = canned.content_length {
        response.push_str(&format!("Content-Length: {}\r\n", length));
    }
    if let Some(content_type) = &canned.content_type {
        response.push_str(&format!("Content-Type: {}\r\n", content_type));
    }
    response.push_str("Connection: close\r\n\r\n");
    let _ = stream.write_all(response.as_bytes());
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
