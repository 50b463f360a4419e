// src/test_server.rs
// =============================================================================
// A tiny HTTP/1.1 server for tests, so nothing needs the internet.
//
// It binds to 127.0.0.1 on a random port and answers every connection with
// one canned response chosen by request path. Unknown paths get a 404.
// Each response closes the connection.
// =============================================================================

use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    status: u16,
    body: Vec<u8>,
    delay: Option<Duration>,
}

impl Route {
    pub fn ok(path: &str, body: impl Into<Vec<u8>>) -> Self {
        Route::status(path, 200, body)
    }

    pub fn status(path: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Route {
            path: path.to_string(),
            status,
            body: body.into(),
            delay: None,
        }
    }

    /// Waits before sending anything back.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub struct TestServer {
    base: String,
}

impl TestServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Arc<HashMap<String, Route>> =
            Arc::new(routes.into_iter().map(|r| (r.path.clone(), r)).collect());

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                tokio::spawn(async move {
                    let _ = serve(stream, &routes).await;
                });
            }
        });

        TestServer {
            base: format!("http://{}", addr),
        }
    }

    /// Absolute URL of `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Client that never goes through an environment proxy.
pub fn test_client() -> Client {
    Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

async fn serve(mut stream: TcpStream, routes: &HashMap<String, Route>) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];

    // Read until the end of the request headers
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        request.extend_from_slice(&buf[..n]);
    }

    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let not_found = Route::status(path, 404, "not found");
    let route = routes.get(path).unwrap_or(&not_found);

    if let Some(delay) = route.delay {
        tokio::time::sleep(delay).await;
    }

    let head = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        route.body.len()
    );
    stream.write_all(head.as_bytes()).await?;
    stream.write_all(&route.body).await?;
    stream.shutdown().await
}
