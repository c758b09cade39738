/*
[INPUT]:  Assembled ServiceRequest values
[OUTPUT]: RawResponse (status + untouched body) or TransportError
[POS]:    HTTP layer - pluggable transport seam
[UPDATE]: When adding transports or changing dispatch behavior
*/

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::Client;

use super::client::ClientConfig;
use super::error::TransportError;
use super::request::{RawResponse, ServiceRequest};

/// Sends a request and hands back the reply verbatim
///
/// Implementations must not interpret the reply: non-2xx statuses are
/// returned as `Ok` so the response normalizer can report them.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    async fn dispatch(&self, request: &ServiceRequest) -> Result<RawResponse, TransportError>;
}

/// Default transport backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    /// Build a reqwest client honoring the configured timeouts
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { http_client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn dispatch(&self, request: &ServiceRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .http_client
            .request(request.method.clone(), request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<Result<RawResponse, String>>,
    requests: Vec<ServiceRequest>,
}

/// In-memory transport for tests
///
/// Replies are served in the order they were queued and every dispatched
/// request is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply with the given status and JSON body
    pub fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push_raw(RawResponse::new(status, body.to_string()))
    }

    /// Queue a reply verbatim
    pub fn push_raw(&self, response: RawResponse) -> &Self {
        self.lock().replies.push_back(Ok(response));
        self
    }

    /// Queue a transport failure
    pub fn push_failure(&self, message: impl Into<String>) -> &Self {
        self.lock().replies.push_back(Err(message.into()));
        self
    }

    /// Number of dispatched requests
    pub fn calls(&self) -> usize {
        self.lock().requests.len()
    }

    /// Every dispatched request, in order
    pub fn requests(&self) -> Vec<ServiceRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn dispatch(&self, request: &ServiceRequest) -> Result<RawResponse, TransportError> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        match state.replies.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Other(message)),
            None => Err(TransportError::Other(format!(
                "no reply queued for {} {}",
                request.method, request.url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use url::Url;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_mock_transport_serves_in_order() {
        let transport = MockTransport::new();
        transport
            .push_json(200, serde_json::json!({"status": "success"}))
            .push_failure("connection reset");

        let url = Url::parse("http://localhost/v1/wallet").unwrap();
        let request = ServiceRequest::new(Method::GET, url);

        let first = transport.dispatch(&request).await.unwrap();
        assert_eq!(first.status, 200);

        let second = transport.dispatch(&request).await.unwrap_err();
        assert!(matches!(second, TransportError::Other(message) if message == "connection reset"));

        assert!(transport.dispatch(&request).await.is_err());
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_reqwest_transport_sends_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/disburse"))
            .and(header("authorization", "Bearer token-1"))
            .and(body_json(serde_json::json!({"lock": "pass"})))
            .respond_with(ResponseTemplate::new(402).set_body_string("insufficient"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(&ClientConfig::default()).unwrap();
        let url = Url::parse(&format!("{}/v1/disburse", server.uri())).unwrap();
        let mut body = serde_json::Map::new();
        body.insert("lock".to_string(), serde_json::Value::from("pass"));
        let request = ServiceRequest::new(Method::POST, url)
            .with_bearer("token-1")
            .with_body(body);

        let response = transport.dispatch(&request).await.unwrap();
        assert_eq!(response.status, 402);
        assert_eq!(response.body, "insufficient");
    }
}
