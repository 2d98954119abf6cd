//! Test helpers for integration tests
//!
//! Provides a TCP-bound test server and response assertions.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use events_api::{create_app, AppState};
use events_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, MediaConfig,
    RateLimitConfig, ServerConfig,
};
use events_core::EventRepository;
use events_service::ServiceContext;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::InMemoryEventRepository;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over the seeded in-memory repository
    pub async fn start() -> Result<Self> {
        Self::start_with(Arc::new(InMemoryEventRepository::seeded()), test_config()).await
    }

    /// Start a server over the given repository and config
    pub async fn start_with(repo: Arc<dyn EventRepository>, config: AppConfig) -> Result<Self> {
        let state = AppState::new(ServiceContext::new(repo), config);
        let app = create_app(state)?;

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request as if it arrived through a reverse proxy
    pub async fn get_forwarded(&self, path: &str, host: &str, proto: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("X-Forwarded-Host", host)
            .header("X-Forwarded-Proto", proto)
            .send()
            .await?)
    }
}

/// Configuration for a development server that needs no environment
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "conference-events-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            trust_proxy_headers: false,
        },
        database: DatabaseConfig {
            url: "postgresql://localhost/unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        media: MediaConfig::default(),
        rate_limit: RateLimitConfig::default(),
        cors: CorsConfig::default(),
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
