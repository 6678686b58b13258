//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use visitor_counter::config::CounterConfig;
use visitor_counter::CountClient;

/// Handle to a running mock counting endpoint.
#[allow(dead_code)]
pub struct MockBackend {
    pub addr: SocketAddr,
    hits: Arc<AtomicU32>,
    last_request: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn url(&self) -> String {
        format!("http://{}/hit/madebyraf.tech/visits", self.addr)
    }

    /// Number of requests accepted so far.
    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Raw head of the most recent request.
    pub fn last_request(&self) -> Option<String> {
        self.last_request.lock().unwrap().clone()
    }

    /// Poll until at least `n` requests arrived.
    pub async fn wait_for_hits(&self, n: u32) {
        while self.hits() < n {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

/// Start a programmable mock backend on an ephemeral port.
///
/// `f` receives the zero-based request index and returns status and body.
pub async fn start_programmable_backend<F, Fut>(f: F) -> MockBackend
where
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let last_request = Arc::new(Mutex::new(None));
    let f = Arc::new(f);

    {
        let hits = hits.clone();
        let last_request = last_request.clone();
        tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((mut socket, _)) => {
                        let index = hits.fetch_add(1, Ordering::SeqCst);
                        let f = f.clone();
                        let last_request = last_request.clone();
                        tokio::spawn(async move {
                            let head = read_request_head(&mut socket).await;
                            *last_request.lock().unwrap() = Some(head);

                            let (status, body) = f(index).await;
                            let status_text = match status {
                                200 => "200 OK",
                                404 => "404 Not Found",
                                429 => "429 Too Many Requests",
                                500 => "500 Internal Server Error",
                                502 => "502 Bad Gateway",
                                503 => "503 Service Unavailable",
                                _ => "200 OK",
                            };

                            let response_str = format!(
                                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                status_text,
                                body.len(),
                                body
                            );
                            let _ = socket.write_all(response_str.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        });
                    }
                    Err(_) => break,
                }
            }
        });
    }

    MockBackend {
        addr,
        hits,
        last_request,
    }
}

/// Backend answering every request with the same status and body.
#[allow(dead_code)]
pub async fn start_mock_backend(status: u16, body: &'static str) -> MockBackend {
    start_programmable_backend(move |_| async move { (status, body.to_string()) }).await
}

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Config pointed at `url` with short backoff for fast tests.
#[allow(dead_code)]
pub fn test_config(url: &str) -> CounterConfig {
    let mut config = CounterConfig::default();
    config.endpoint.url = url.to_string();
    config.retry.backoff_step_ms = 10;
    config.timeouts.request_secs = 5;
    config.animation.frame_ms = 5;
    config
}

/// Client that ignores proxy environment variables.
#[allow(dead_code)]
pub fn test_client(config: &CounterConfig) -> CountClient {
    let http = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();
    CountClient::with_http(http, &config.endpoint, &config.timeouts).unwrap()
}
