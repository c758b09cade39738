/*
[INPUT]:  Service method, path, access token and JSON payload
[OUTPUT]: Immutable request description handed to the transport
[POS]:    HTTP layer - request assembly and authorization headers
[UPDATE]: When changing header format or request identification
*/

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;
use uuid::Uuid;

use super::error::{MoneywaveError, Result};

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A fully assembled request, built fresh for every dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Map<String, Value>>,
}

impl ServiceRequest {
    /// Start a request with a fresh request id
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: vec![(REQUEST_ID_HEADER.to_string(), request_id())],
            body: None,
        }
    }

    /// Attach `Authorization: Bearer <token>`
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers
            .push((AUTHORIZATION_HEADER.to_string(), format!("Bearer {token}")));
        self
    }

    /// Attach a JSON object body
    ///
    /// GET requests carry no body; their payload is dropped.
    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        if self.method != Method::GET {
            self.body = Some(body);
        }
        self
    }

    /// Look up a header value, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn request_id(&self) -> Option<&str> {
        self.header(REQUEST_ID_HEADER)
    }
}

/// Reply exactly as received from the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Serialize a payload that must be a JSON object
pub fn json_object<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(MoneywaveError::Serialization(serde::ser::Error::custom(
            format!("expected a JSON object payload, got {other}"),
        ))),
    }
}

fn request_id() -> String {
    Uuid::new_v4().to_string()
}
