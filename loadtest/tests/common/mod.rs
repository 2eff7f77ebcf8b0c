//! Minimal HTTP/1.1 server for end-to-end tests.
//!
//! Binds an ephemeral port, answers each connection on its own thread, and
//! counts every connection it accepts. Responses always close the
//! connection, so each request from the client opens a fresh one and the
//! hit counter equals the number of requests issued.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// How the server treats incoming connections.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Answer everything with `200 OK`.
    Ok,
    /// Drop the first `n` connections without a response, then answer the
    /// rest with `200 OK`.
    FailFirst(usize),
}

/// A running test server.
#[derive(Debug)]
pub struct TestServer {
    url: String,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    /// Target URL for the server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Number of connections accepted so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server on an ephemeral port. It runs until the test process
/// exits.
pub fn start(behavior: Behavior) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let url = format!("http://{}/hi", listener.local_addr().unwrap());
    let hits = Arc::new(AtomicUsize::new(0));

    let accepted = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let hit = accepted.fetch_add(1, Ordering::SeqCst);
            thread::spawn(move || handle(stream, hit, behavior));
        }
    });

    TestServer { url, hits }
}

fn handle(mut stream: TcpStream, hit: usize, behavior: Behavior) {
    if let Behavior::FailFirst(n) = behavior {
        if hit < n {
            // Dropping the stream closes the connection before any
            // response is written.
            return;
        }
    }
    let mut buf = [0u8; 8192];
    let _ = stream.read(&mut buf);
    let _ = stream.write_all(
        b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nhi",
    );
}
