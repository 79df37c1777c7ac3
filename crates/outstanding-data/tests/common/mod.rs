//! One-shot HTTP server for exercising the client without the network.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Canned response returned by [`serve_once`].
pub struct Canned {
    pub status: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl Canned {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: "200 OK",
            headers: vec![("Content-Type", "application/json".to_string())],
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

/// Accepts a single connection, replies with `canned`, and yields the raw
/// request head (lowercased) through the returned handle.
pub async fn serve_once(canned: Canned) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let mut head = format!("HTTP/1.1 {}\r\n", canned.status);
        for (name, value) in &canned.headers {
            head.push_str(&format!("{}: {}\r\n", name, value));
        }
        head.push_str(&format!(
            "Content-Length: {}\r\nConnection: close\r\n\r\n",
            canned.body.len()
        ));
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&canned.body).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request).to_lowercase()
    });

    (base_url, handle)
}
