//! Minimal HTTP/1.1 server that answers every request with one fixed status.
//!
//! Records each raw request head so tests can inspect the method and headers
//! the client sent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use unshorten_core::probe::ProbeOptions;

pub struct StatusServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StatusServer {
    /// Raw request heads received so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Value of header `name` in request `index`, matched case-insensitively.
    pub fn header(&self, index: usize, name: &str) -> Option<String> {
        let requests = self.requests();
        let request = requests.get(index)?;
        request.lines().skip(1).find_map(|line| {
            let (n, v) = line.split_once(':')?;
            n.trim()
                .eq_ignore_ascii_case(name)
                .then(|| v.trim().to_string())
        })
    }
}

/// Options for loopback tests: proxies from the environment are bypassed.
pub fn options() -> ProbeOptions {
    ProbeOptions {
        no_proxy: Some("*".to_string()),
        ..ProbeOptions::default()
    }
}

/// Starts a server in a background thread. `status` is the status line tail
/// (e.g. "301 Moved Permanently"); `headers` are extra response headers.
/// The server runs until the process exits.
pub fn start(status: &str, headers: &[(&str, &str)]) -> StatusServer {
    let mut head = format!("HTTP/1.1 {}\r\n", status);
    for (name, value) in headers {
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    start_raw(head.into_bytes())
}

/// Like `start` but with the status line and headers given as raw bytes
/// (without the terminating blank line), e.g. to send Latin-1 values.
pub fn start_raw(head: Vec<u8>) -> StatusServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let mut response = head;
    response.extend_from_slice(b"Content-Length: 0\r\nConnection: close\r\n\r\n");

    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, &response, &seen);
        }
    });

    StatusServer {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

/// A URL whose server accepts connections and never answers.
pub fn start_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// A URL on a local port that nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, response: &[u8], seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut head = Vec::new();
    let mut buf = [0u8; 4096];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    seen.lock()
        .unwrap()
        .push(String::from_utf8_lossy(&head).into_owned());
    let _ = stream.write_all(response);
}
