/*
[INPUT]:  RawResponse from the transport and the endpoint's response shape
[OUTPUT]: MoneywaveResponse with status flag, message, data and batch partition
[POS]:    Response layer - uniform view over heterogeneous API replies
[UPDATE]: When the API changes its envelope or batch item format
*/

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{RawResponse, Result};

const SUCCESS_STATES: [&str; 3] = ["success", "successful", "completed"];
const SUCCESS_RESPONSE_CODE: &str = "00";

/// How an endpoint lays out its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseShape {
    /// `data` is a single result
    #[default]
    Flat,
    /// `data` carries one result per item of a batch
    Batch,
}

/// Normalized reply of any service call
///
/// A failed operation on the API side (insufficient balance, unknown
/// account, non-2xx status) still yields a `MoneywaveResponse`; check
/// [`is_successful`](Self::is_successful) before using the data.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneywaveResponse {
    raw: RawResponse,
    json: Option<Value>,
    successful: bool,
    message: String,
    data: Value,
    passed: Vec<Value>,
    failed: Vec<Value>,
}

impl MoneywaveResponse {
    pub fn from_raw(raw: RawResponse, shape: ResponseShape) -> Self {
        let json = serde_json::from_str::<Value>(&raw.body).ok();

        let api_status = json
            .as_ref()
            .and_then(|value| value.get("status"))
            .and_then(Value::as_str);
        let successful =
            raw.is_success() && api_status.is_some_and(|s| s.eq_ignore_ascii_case("success"));

        let message = json
            .as_ref()
            .and_then(|value| value.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| fallback_message(&raw, json.is_some(), successful));

        let data = json
            .as_ref()
            .and_then(|value| value.get("data"))
            .cloned()
            .unwrap_or(Value::Null);

        let (passed, failed) = match shape {
            ResponseShape::Flat => (Vec::new(), Vec::new()),
            ResponseShape::Batch => partition_items(&data),
        };

        Self {
            raw,
            json,
            successful,
            message,
            data,
            passed,
            failed,
        }
    }

    /// Body exactly as received
    pub fn raw_response(&self) -> &str {
        &self.raw.body
    }

    pub fn status_code(&self) -> u16 {
        self.raw.status
    }

    /// Whole reply parsed as JSON, if it was JSON
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// The API accepted and completed the operation
    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The `data` member of the reply, `Null` when absent
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Deserialize `data` into a typed model
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }

    /// Batch items reporting success, in reply order
    pub fn passed(&self) -> &[Value] {
        &self.passed
    }

    /// Batch items reporting anything else, in reply order
    pub fn failed(&self) -> &[Value] {
        &self.failed
    }
}

fn fallback_message(raw: &RawResponse, is_json: bool, successful: bool) -> String {
    if successful {
        String::new()
    } else if !raw.is_success() {
        format!("request failed with HTTP status {}", raw.status)
    } else if !is_json {
        "response body is not valid JSON".to_string()
    } else {
        "request was not successful".to_string()
    }
}

fn batch_items(data: &Value) -> &[Value] {
    match data {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("transfers")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

fn item_succeeded(item: &Value) -> bool {
    let by_status = item
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|status| {
            SUCCESS_STATES
                .iter()
                .any(|state| status.eq_ignore_ascii_case(state))
        });
    let by_code = item
        .get("responseCode")
        .and_then(Value::as_str)
        .is_some_and(|code| code == SUCCESS_RESPONSE_CODE);
    by_status || by_code
}

fn partition_items(data: &Value) -> (Vec<Value>, Vec<Value>) {
    batch_items(data)
        .iter()
        .cloned()
        .partition(item_succeeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WalletInfo;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn raw(status: u16, body: Value) -> RawResponse {
        RawResponse::new(status, body.to_string())
    }

    #[test]
    fn test_flat_success() {
        let response = MoneywaveResponse::from_raw(
            raw(
                200,
                json!({"status": "success", "data": [{"balance": "1500.00", "currency": "NGN"}]}),
            ),
            ResponseShape::Flat,
        );

        assert!(response.is_successful());
        assert_eq!(response.message(), "");
        assert!(response.passed().is_empty());
        assert!(response.failed().is_empty());

        let wallets: Vec<WalletInfo> = response.data_as().unwrap();
        assert_eq!(wallets[0].balance, Decimal::new(150000, 2));
    }

    #[test]
    fn test_api_error_is_not_successful() {
        let response = MoneywaveResponse::from_raw(
            raw(
                200,
                json!({"status": "error", "message": "insufficient wallet balance"}),
            ),
            ResponseShape::Flat,
        );

        assert!(!response.is_successful());
        assert_eq!(response.message(), "insufficient wallet balance");
        assert!(response.data().is_null());
    }

    #[test]
    fn test_non_json_error_body() {
        let response = MoneywaveResponse::from_raw(
            RawResponse::new(502, "<html>Bad Gateway</html>"),
            ResponseShape::Flat,
        );

        assert!(!response.is_successful());
        assert!(response.json().is_none());
        assert_eq!(response.message(), "request failed with HTTP status 502");
        assert_eq!(response.raw_response(), "<html>Bad Gateway</html>");
    }

    #[test]
    fn test_success_status_with_error_http_code() {
        let response = MoneywaveResponse::from_raw(
            raw(500, json!({"status": "success"})),
            ResponseShape::Flat,
        );
        assert!(!response.is_successful());
    }

    #[test]
    fn test_batch_partition_preserves_order_and_raw() {
        let body = json!({
            "status": "success",
            "data": {
                "transfers": [
                    {"ref": "1", "status": "failed", "responseMessage": "invalid account"},
                    {"ref": "2", "status": "completed"},
                    {"ref": "3", "responseCode": "00"},
                    {"ref": "4", "status": "pending"},
                    {"ref": "5", "status": "SUCCESS"},
                ]
            }
        });
        let body_text = body.to_string();
        let response =
            MoneywaveResponse::from_raw(RawResponse::new(200, body_text.clone()), ResponseShape::Batch);

        let refs = |items: &[Value]| -> Vec<String> {
            items
                .iter()
                .map(|item| item["ref"].as_str().unwrap().to_string())
                .collect()
        };

        assert_eq!(refs(response.passed()), vec!["2", "3", "5"]);
        assert_eq!(refs(response.failed()), vec!["1", "4"]);
        assert_eq!(response.passed().len() + response.failed().len(), 5);
        assert_eq!(response.raw_response(), body_text);
    }

    #[test]
    fn test_batch_data_as_plain_array() {
        let response = MoneywaveResponse::from_raw(
            raw(
                200,
                json!({"status": "success", "data": [{"status": "success"}, {"status": "failed"}]}),
            ),
            ResponseShape::Batch,
        );
        assert_eq!(response.passed().len(), 1);
        assert_eq!(response.failed().len(), 1);
    }

    #[test]
    fn test_flat_shape_never_partitions() {
        let response = MoneywaveResponse::from_raw(
            raw(
                200,
                json!({"status": "success", "data": {"transfers": [{"status": "success"}]}}),
            ),
            ResponseShape::Flat,
        );
        assert!(response.passed().is_empty());
        assert!(response.failed().is_empty());
    }
}
