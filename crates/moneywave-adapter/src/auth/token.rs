/*
[INPUT]:  Credentials, transport and an optional caller-cached token
[OUTPUT]: Access token for authenticated requests
[POS]:    Auth layer - token acquisition, caching and refresh
[UPDATE]: When the verify flow or token storage strategy changes
*/

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use tokio::sync::Mutex;
use tracing::{debug, info};
use url::Url;

use super::Credentials;
use crate::http::{HttpTransport, MoneywaveError, Result, ServiceRequest, json_object};
use crate::types::endpoints;
use crate::types::{VerifyRequest, VerifyResponse};

/// Stored token data with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct TokenData {
    pub token: String,
    pub obtained_at: DateTime<Utc>,
    /// `None` for tokens handed in by the caller
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenData {
    /// A token supplied by the caller, trusted until the API rejects it
    pub fn supplied(token: String) -> Self {
        Self {
            token,
            obtained_at: Utc::now(),
            expires_at: None,
        }
    }

    /// A token just issued by the verify endpoint
    pub fn issued(token: String, lifetime: Duration) -> Self {
        let obtained_at = Utc::now();
        Self {
            token,
            obtained_at,
            expires_at: Some(obtained_at + lifetime),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }

    fn is_usable(&self) -> bool {
        !self.token.trim().is_empty() && !self.is_expired()
    }
}

/// Obtains, caches and refreshes the access token
///
/// Refreshes are single-flight: concurrent callers queue on one async
/// mutex and re-check the cache once they hold it.
#[derive(Debug)]
pub struct TokenManager {
    credentials: Credentials,
    verify_url: Url,
    transport: Arc<dyn HttpTransport>,
    lifetime: Duration,
    data: RwLock<Option<TokenData>>,
    refresh: Mutex<()>,
}

impl TokenManager {
    pub fn new(
        credentials: Credentials,
        base_url: &Url,
        transport: Arc<dyn HttpTransport>,
        lifetime: Duration,
    ) -> Result<Self> {
        Ok(Self {
            credentials,
            verify_url: base_url.join(endpoints::VERIFY_MERCHANT)?,
            transport,
            lifetime,
            data: RwLock::new(None),
            refresh: Mutex::new(()),
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Return the cached token, or obtain a new one from the API
    pub async fn obtain_token(&self) -> Result<String> {
        if let Some(token) = self.cached() {
            return Ok(token);
        }

        let _guard = self.refresh.lock().await;
        if let Some(token) = self.cached() {
            return Ok(token);
        }

        let token = self.verify().await?;
        *self.write() = Some(TokenData::issued(token.clone(), self.lifetime));
        info!(
            environment = %self.credentials.environment,
            "obtained moneywave access token"
        );
        Ok(token)
    }

    /// Install a caller-supplied token; empty tokens clear the cache
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        *self.write() = if token.trim().is_empty() {
            None
        } else {
            Some(TokenData::supplied(token))
        };
    }

    /// Current token, if any, for the caller to persist
    pub fn current_token(&self) -> Option<String> {
        self.read().as_ref().map(|data| data.token.clone())
    }

    /// Get token data if available
    pub fn token_data(&self) -> Option<TokenData> {
        self.read().clone()
    }

    /// Drop the cached token if it is still `stale`
    ///
    /// Returns whether the cache was cleared. A token installed by another
    /// caller in the meantime is left alone.
    pub fn invalidate(&self, stale: &str) -> bool {
        let mut guard = self.write();
        match guard.as_ref() {
            Some(data) if data.token == stale => {
                *guard = None;
                debug!("invalidated rejected access token");
                true
            }
            _ => false,
        }
    }

    /// Clear the stored token
    pub fn clear(&self) {
        *self.write() = None;
    }

    fn cached(&self) -> Option<String> {
        self.read()
            .as_ref()
            .filter(|data| data.is_usable())
            .map(|data| data.token.clone())
    }

    async fn verify(&self) -> Result<String> {
        if !self.credentials.is_complete() {
            return Err(MoneywaveError::authentication(
                "api key and secret key are required to obtain an access token",
            ));
        }

        let body = VerifyRequest {
            api_key: self.credentials.api_key.clone(),
            secret: self.credentials.secret_key.clone(),
        };
        let request = ServiceRequest::new(Method::POST, self.verify_url.clone())
            .with_body(json_object(&body)?);

        debug!(url = %self.verify_url, "requesting moneywave access token");
        let raw = self.transport.dispatch(&request).await?;

        let reply: VerifyResponse = serde_json::from_str(&raw.body).map_err(|_| {
            MoneywaveError::authentication(format!(
                "unexpected verify response (HTTP {})",
                raw.status
            ))
        })?;

        match reply.token {
            Some(token)
                if reply.status.eq_ignore_ascii_case("success") && !token.trim().is_empty() =>
            {
                Ok(token)
            }
            _ => Err(MoneywaveError::authentication(reply.message.unwrap_or_else(
                || format!("verify returned status '{}' without a token", reply.status),
            ))),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<TokenData>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<TokenData>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}
