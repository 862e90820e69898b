//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tiny_redirect::{HttpServer, RedirectConfig};
use tokio::net::TcpListener;

/// Start the redirector on an ephemeral loopback port.
///
/// The listener is bound before this returns, so requests can be sent
/// immediately.
pub async fn start_server(config: RedirectConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    spawn_server(HttpServer::new(config), listener);
    addr
}

/// Serve `server` on `listener` in the background.
///
/// A server that stops panics the task and prints the error.
pub fn spawn_server(server: HttpServer, listener: TcpListener) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = server.run(listener).await {
            panic!("redirect server stopped: {}", e);
        }
    })
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
