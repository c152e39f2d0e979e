// src/fetch/stub.rs
//
// Minimal HTTP/1.1 server for tests: canned replies keyed by request path.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

#[derive(Clone, Debug)]
pub(crate) enum Reply {
    Json { status: u16, body: String },
    /// Accept the connection and never answer.
    Hang,
}

impl Reply {
    pub(crate) fn json(status: u16, body: &str) -> Self {
        Reply::Json {
            status,
            body: body.to_string(),
        }
    }
}

pub(crate) struct StubServer {
    addr: std::net::SocketAddr,
    seen: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Serve `routes` (path without query → reply). Unknown paths get a 404.
    pub(crate) async fn start(routes: Vec<(&str, Reply)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Arc<HashMap<String, Reply>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, reply)| (path.to_string(), reply))
                .collect(),
        );
        let seen = Arc::new(Mutex::new(Vec::new()));

        let handle = tokio::spawn({
            let seen = seen.clone();
            async move {
                while let Ok((stream, _)) = listener.accept().await {
                    let routes = routes.clone();
                    let seen = seen.clone();
                    tokio::spawn(async move {
                        let _ = handle_conn(stream, &routes, &seen).await;
                    });
                }
            }
        });

        Self { addr, seen, handle }
    }

    pub(crate) fn base_url(&self) -> String {
        format!("http://{}/cas", self.addr)
    }

    /// Request targets (path + query) in arrival order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_conn(
    mut stream: TcpStream,
    routes: &HashMap<String, Reply>,
    seen: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    seen.lock().unwrap().push(target.clone());

    let path = target.split('?').next().unwrap_or("/");
    let (status, body) = match routes.get(path) {
        Some(Reply::Json { status, body }) => (*status, body.clone()),
        Some(Reply::Hang) => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            return Ok(());
        }
        None => (404, r#"{"error":"not found"}"#.to_string()),
    };

    let resp = format!(
        "HTTP/1.1 {} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(resp.as_bytes()).await?;
    stream.shutdown().await
}
