//! Shared test utilities for roster-api integration tests.

use reqwest::{Client, Response as ReqwestResponse};
use roster_api::rest::{AppState, create_router};
use roster_api::{EmployeeAuditLogger, EmployeeService, SqliteStore};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Test server wrapper backed by an in-memory store.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

impl TestServer {
    /// Spawn a test server on an OS-assigned port.
    pub async fn spawn() -> Self {
        let store = SqliteStore::in_memory()
            .await
            .expect("Failed to open in-memory store");
        Self::spawn_with_store(Arc::new(store)).await
    }

    /// Spawn a test server over a store the test keeps a handle to.
    pub async fn spawn_with_store(store: Arc<SqliteStore>) -> Self {
        // Create app state with noop audit logger
        let app_state = Arc::new(AppState {
            service: EmployeeService::new(store, Arc::new(EmployeeAuditLogger::new_noop())),
        });

        let router = create_router(app_state);

        // Port 0 lets the OS choose
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
        let actual_addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Server error");
        });

        Self {
            addr: actual_addr,
            client: Client::new(),
            shutdown_tx,
        }
    }

    /// Base URL for the REST API.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Perform a GET request.
    pub async fn get(&self, path: &str) -> ReqwestResponse {
        self.client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await
            .expect("Request failed")
    }

    /// Perform a GET request outside the `/api` prefix.
    pub async fn get_root(&self, path: &str) -> ReqwestResponse {
        self.client
            .get(format!("http://{}{}", self.addr, path))
            .send()
            .await
            .expect("Request failed")
    }

    /// Perform a POST request with JSON body.
    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> ReqwestResponse {
        self.client
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    /// Perform a POST request with a raw body labelled as JSON.
    pub async fn post_raw(&self, path: &str, body: &str) -> ReqwestResponse {
        self.client
            .post(format!("{}{}", self.base_url(), path))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Request failed")
    }

    /// Perform a PUT request with JSON body.
    pub async fn put_json<T: Serialize>(&self, path: &str, body: &T) -> ReqwestResponse {
        self.client
            .put(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    /// Perform a DELETE request.
    pub async fn delete(&self, path: &str) -> ReqwestResponse {
        self.client
            .delete(format!("{}{}", self.base_url(), path))
            .send()
            .await
            .expect("Request failed")
    }

    /// Shutdown the server.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
    }
}
