/*
[INPUT]:  Concrete service definitions (method, path, required fields, payload)
[OUTPUT]: Validated, authenticated dispatch producing MoneywaveResponse
[POS]:    Service layer - contract shared by every API operation
[UPDATE]: When the validation rules or the send flow change
*/

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::{MoneywaveClient, MoneywaveError, Result, json_object};
use crate::response::{MoneywaveResponse, ResponseShape};

/// One remote operation
///
/// Implementors hold their fields as a serializable struct using the
/// API's wire names; unset optional fields must be skipped during
/// serialization so that they read as missing.
#[async_trait]
pub trait Service: Serialize + Send + Sync {
    /// Client the request is sent through
    fn client(&self) -> &MoneywaveClient;

    fn request_method(&self) -> Method;

    /// Endpoint path relative to the environment base URL
    fn request_path(&self) -> &'static str;

    /// Wire names that must be non-empty, in the order they are checked
    fn required_fields(&self) -> &'static [&'static str];

    fn response_shape(&self) -> ResponseShape {
        ResponseShape::Flat
    }

    /// Every field currently set, keyed by wire name
    fn payload(&self) -> Result<Map<String, Value>> {
        json_object(self)
    }

    /// Check the required fields without sending anything
    fn validate(&self) -> Result<bool> {
        check_required(self.required_fields(), &self.payload()?)?;
        Ok(true)
    }

    async fn send(&self) -> Result<MoneywaveResponse> {
        send_validated(self).await
    }
}

/// Validate, then dispatch through the service's client
///
/// Services that override [`Service::send`] call this once their own
/// checks have passed.
pub async fn send_validated<S: Service + ?Sized>(service: &S) -> Result<MoneywaveResponse> {
    let payload = service.payload()?;
    check_required(service.required_fields(), &payload)?;
    service
        .client()
        .execute(
            service.request_method(),
            service.request_path(),
            payload,
            service.response_shape(),
        )
        .await
}

/// Fail on the first required field that is missing or empty
pub fn check_required(required: &[&str], payload: &Map<String, Value>) -> Result<()> {
    match required
        .iter()
        .find(|name| payload.get(**name).is_none_or(is_empty_value))
    {
        Some(name) => Err(MoneywaveError::validation(format!("field {name} is required"))),
        None => Ok(()),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
