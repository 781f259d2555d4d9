//! The I/O half of the client.
//!
//! # Design
//! `Transport` is the only seam that touches the network. `ProductClient`
//! stays pure; `ProductApi` pairs the two so each operation reads as one
//! awaitable call. Dispatchers only ever see `ProductApi<T>` for some
//! `T: Transport`, which lets tests script responses and failures.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::client::ProductClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewProductData, Product};

/// Executes an `HttpRequest` and hands back whatever the server answered.
///
/// Non-2xx statuses are data, not errors: interpreting them is the
/// `ProductClient`'s job. An `Err` means no response arrived at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking `ureq` agent driven from tokio's blocking pool.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    timeout: Duration,
    delay: Duration,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        // Status codes come back as responses so the client can map them.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        if !config.delay.is_zero() {
            warn!(
                delay_ms = config.delay.as_millis() as u64,
                "simulating network delay, remove for production"
            );
        }
        Self {
            agent,
            timeout: config.timeout,
            delay: config.delay,
        }
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let agent = self.agent.clone();
        let timeout_ms = self.timeout.as_millis() as u64;
        let result = tokio::task::spawn_blocking(move || execute(&agent, request, timeout_ms))
            .await
            .map_err(|e| TransportError::Network(e.to_string()))
            .and_then(|r| r);

        // Both outcomes settle late, like a slow network would.
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        result
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder
}

fn execute(agent: &ureq::Agent, req: HttpRequest, timeout_ms: u64) -> Result<HttpResponse, TransportError> {
    let headers = req.headers;
    let response = match (req.method, req.body) {
        (HttpMethod::Get, _) => with_headers(agent.get(&req.path), &headers).call(),
        (HttpMethod::Delete, _) => with_headers(agent.delete(&req.path), &headers).call(),
        (HttpMethod::Post, Some(body)) => with_headers(agent.post(&req.path), &headers).send(body.as_bytes()),
        (HttpMethod::Post, None) => with_headers(agent.post(&req.path), &headers).send_empty(),
        (HttpMethod::Put, Some(body)) => with_headers(agent.put(&req.path), &headers).send(body.as_bytes()),
        (HttpMethod::Put, None) => with_headers(agent.put(&req.path), &headers).send_empty(),
    };

    let mut response = response.map_err(|e| map_ureq_error(e, timeout_ms))?;
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| map_ureq_error(e, timeout_ms))?;

    Ok(HttpResponse { status, headers, body })
}

/// Message for every non-timeout failure where no response arrived.
pub const NETWORK_ERROR: &str = "Network Error";

fn map_ureq_error(error: ureq::Error, timeout_ms: u64) -> TransportError {
    match error {
        ureq::Error::Timeout(_) => TransportError::Timeout(timeout_ms),
        other => {
            debug!(error = %other, "request failed without a response");
            TransportError::Network(NETWORK_ERROR.to_string())
        }
    }
}

/// One awaitable call per REST operation.
#[derive(Debug, Clone)]
pub struct ProductApi<T> {
    client: ProductClient,
    transport: T,
}

impl ProductApi<UreqTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(ProductClient::new(&config.base_url), UreqTransport::new(config))
    }
}

impl<T: Transport> ProductApi<T> {
    pub fn new(client: ProductClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let req = self.client.build_list_products();
        let response = self.transport.send(req).await?;
        self.client.parse_list_products(response)
    }

    pub async fn create_product(&self, input: &NewProductData) -> Result<Product, ApiError> {
        let req = self.client.build_create_product(input)?;
        let response = self.transport.send(req).await?;
        self.client.parse_create_product(response)
    }

    pub async fn update_product(&self, id: &str, input: &NewProductData) -> Result<Product, ApiError> {
        let req = self.client.build_update_product(id, input)?;
        let response = self.transport.send(req).await?;
        self.client.parse_update_product(response)
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let req = self.client.build_delete_product(id);
        let response = self.transport.send(req).await?;
        self.client.parse_delete_product(response)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{api, ScriptedTransport};
    use super::*;

    #[tokio::test]
    async fn fetch_products_sends_one_get() {
        let api = api(ScriptedTransport::default().reply(200, "[]"));
        let products = api.fetch_products().await.unwrap();
        assert!(products.is_empty());

        let seen = api.transport().requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, HttpMethod::Get);
        assert_eq!(seen[0].path, "http://localhost:3000/Products");
    }

    #[tokio::test]
    async fn transport_failure_becomes_api_error() {
        let api = api(ScriptedTransport::default().fail("Network Error"));
        let err = api.delete_product("1").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::Network(ref m)) if m == "Network Error"));
    }

    #[tokio::test]
    async fn update_product_puts_to_member() {
        let body = r#"{"id":"3","description":"Saw","stock":2,"price":30.0,"categories":[]}"#;
        let api = api(ScriptedTransport::default().reply(200, body));
        let input = NewProductData {
            description: "Saw".to_string(),
            stock: 2,
            price: 30.0,
            categories: Vec::new(),
        };
        let product = api.update_product("3", &input).await.unwrap();
        assert_eq!(product.id, "3");

        let seen = api.transport().requests();
        assert_eq!(seen[0].method, HttpMethod::Put);
        assert_eq!(seen[0].path, "http://localhost:3000/Products/3");
    }

    #[tokio::test]
    async fn ureq_transport_reports_unreachable_host() {
        // Bind then drop to get a port nothing listens on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = ClientConfig::new(format!("http://127.0.0.1:{port}"));
        let api = ProductApi::from_config(&config);
        let err = api.fetch_products().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::Network(ref m)) if m == NETWORK_ERROR));
    }

    #[tokio::test]
    async fn ureq_transport_times_out_on_silent_server() {
        // Kernel backlog accepts the connection, nobody ever answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let mut config = ClientConfig::new(format!("http://{}", listener.local_addr().unwrap()));
        config.timeout = Duration::from_millis(300);
        let api = ProductApi::from_config(&config);

        let err = api.fetch_products().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::Timeout(300))), "got {err:?}");
        drop(listener);
    }

    #[tokio::test]
    async fn delay_holds_back_failures_too() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let mut config = ClientConfig::new(format!("http://127.0.0.1:{port}"));
        config.delay = Duration::from_millis(300);
        let api = ProductApi::from_config(&config);

        let started = std::time::Instant::now();
        let err = api.delete_product("1").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::Network(_))));
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
