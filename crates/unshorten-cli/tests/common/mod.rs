//! Helpers for running the built binary against a loopback server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::Duration;

/// Serve `response_head` (status line and headers, without the blank line) to
/// every connection. Returns the base URL.
pub fn serve(response_head: &str) -> String {
    serve_after(response_head, Duration::ZERO)
}

/// Like `serve` but waits `delay` before answering each request.
pub fn serve_after(response_head: &str, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let response = format!(
        "{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        response_head
    );
    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            thread::sleep(delay);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// A URL whose server accepts connections and never answers.
pub fn serve_silent() -> String {
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

/// Build a command for the `unshorten` binary with a clean, hermetic environment.
pub fn unshorten(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_unshorten"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("UNSHORTEN_CONFIG")
        .env_remove("UNSHORTEN_DEBUG")
        .env_remove("RUST_LOG");
    for var in ["http_proxy", "HTTP_PROXY", "https_proxy", "HTTPS_PROXY", "all_proxy", "ALL_PROXY"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run `cmd` feeding `stdin` and collect its output.
pub fn run_with_stdin(mut cmd: Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn unshorten");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait unshorten")
}
