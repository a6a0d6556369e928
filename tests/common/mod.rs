//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use university_catalog::config::ServiceConfig;
use university_catalog::{Dataset, HttpServer, Shutdown};

/// A running server on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}/api/v1{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the server with default config over `dataset`.
pub async fn start_server(dataset: Dataset) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(ServiceConfig::default(), Arc::new(dataset));
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // The listener is already bound; give the accept loop a moment.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer { addr, shutdown }
}

pub async fn start_seeded() -> TestServer {
    start_server(Dataset::seed().unwrap()).await
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
