/*
[INPUT]:  Credentials, optional cached token, timeouts, transport
[OUTPUT]: Configured MoneywaveClient ready to build and send service calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use super::error::{MoneywaveError, Result};
use super::request::{RawResponse, ServiceRequest};
use super::transport::{HttpTransport, ReqwestTransport};
use crate::auth::{Credentials, TokenManager};
use crate::response::{MoneywaveResponse, ResponseShape};
use crate::types::Environment;

const UNAUTHORIZED: u16 = 401;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// How long a token issued by the verify endpoint is trusted
    pub token_lifetime: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            token_lifetime: Duration::from_secs(2 * 60 * 60),
        }
    }
}

#[derive(Debug)]
struct ClientInner {
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
    tokens: TokenManager,
}

/// Main client for the Moneywave API
///
/// Cloning is cheap; clones share the transport and the token cache.
#[derive(Debug, Clone)]
pub struct MoneywaveClient {
    inner: Arc<ClientInner>,
}

impl MoneywaveClient {
    /// Create a client whose credentials come from the environment
    ///
    /// See [`Credentials::from_env`]. A non-empty `existing_token` is reused
    /// as-is instead of requesting a new one.
    pub fn new(existing_token: Option<String>) -> Result<Self> {
        Self::builder(Credentials::from_env()?)
            .access_token(existing_token)
            .build()
    }

    /// Create a client with explicit credentials
    pub fn with_credentials(
        existing_token: Option<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        environment: Environment,
    ) -> Result<Self> {
        Self::builder(Credentials::new(api_key, secret_key, environment))
            .access_token(existing_token)
            .build()
    }

    pub fn builder(credentials: Credentials) -> ClientBuilder {
        ClientBuilder::new(credentials)
    }

    /// Make sure a token is available, obtaining one if needed
    pub async fn authenticate(&self) -> Result<String> {
        self.inner.tokens.obtain_token().await
    }

    /// Current access token, for the caller to persist between runs
    pub fn access_token(&self) -> Option<String> {
        self.inner.tokens.current_token()
    }

    /// Replace the cached access token
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.inner.tokens.set_token(token);
    }

    pub fn environment(&self) -> Environment {
        self.inner.tokens.credentials().environment
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.inner.tokens
    }

    /// Send an authenticated request and normalize the reply
    ///
    /// A 401 reply is treated as an expired token: when credentials are
    /// available the token is re-obtained and the request sent once more.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Map<String, Value>,
        shape: ResponseShape,
    ) -> Result<MoneywaveResponse> {
        let url = self.inner.base_url.join(path)?;
        let tokens = &self.inner.tokens;

        let token = tokens.obtain_token().await?;
        let mut raw = self.dispatch(&method, &url, &payload, &token).await?;

        if raw.status == UNAUTHORIZED && tokens.credentials().is_complete() {
            warn!(path, "access token rejected, obtaining a new one");
            tokens.invalidate(&token);
            let token = tokens.obtain_token().await?;
            raw = self.dispatch(&method, &url, &payload, &token).await?;
        }

        let response = MoneywaveResponse::from_raw(raw, shape);
        if !response.is_successful() {
            warn!(
                path,
                status = response.status_code(),
                message = response.message(),
                "moneywave reported an unsuccessful request"
            );
        }
        Ok(response)
    }

    async fn dispatch(
        &self,
        method: &Method,
        url: &Url,
        payload: &Map<String, Value>,
        token: &str,
    ) -> Result<RawResponse> {
        let request = ServiceRequest::new(method.clone(), url.clone())
            .with_bearer(token)
            .with_body(payload.clone());
        debug!(
            method = %request.method,
            path = request.url.path(),
            request_id = request.request_id().unwrap_or_default(),
            "dispatching moneywave request"
        );
        Ok(self.inner.transport.dispatch(&request).await?)
    }
}

/// Builder for [`MoneywaveClient`]
#[derive(Debug)]
pub struct ClientBuilder {
    credentials: Credentials,
    config: ClientConfig,
    base_url: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    access_token: Option<String>,
}

impl ClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            config: ClientConfig::default(),
            base_url: None,
            transport: None,
            access_token: None,
        }
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the environment's base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a custom transport instead of reqwest
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Reuse a token cached by the caller
    pub fn access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    pub fn build(self) -> Result<MoneywaveClient> {
        let base_url = match self.base_url {
            Some(url) => parse_base_url(&url)?,
            None => Url::parse(self.credentials.environment.base_url())?,
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };

        let lifetime = chrono::Duration::from_std(self.config.token_lifetime)
            .map_err(|e| MoneywaveError::Config(format!("token lifetime out of range: {e}")))?;

        let tokens = TokenManager::new(
            self.credentials,
            &base_url,
            Arc::clone(&transport),
            lifetime,
        )?;
        if let Some(token) = self.access_token {
            tokens.set_token(token);
        }

        Ok(MoneywaveClient {
            inner: Arc::new(ClientInner {
                base_url,
                transport,
                tokens,
            }),
        })
    }
}

/// Parse a base URL so that endpoint paths are appended, not substituted
fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{raw}/"))?)
    }
}
