/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for moneywave-adapter tests

use moneywave_adapter::{Credentials, Environment, MoneywaveClient};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "ts_test_api_key";
pub const SECRET_KEY: &str = "ts_test_secret_key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mock access token for testing
#[allow(dead_code)]
pub fn mock_access_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}

#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new(API_KEY, SECRET_KEY, Environment::Staging)
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer, existing_token: Option<String>) -> MoneywaveClient {
    MoneywaveClient::builder(test_credentials())
        .base_url(server.uri())
        .access_token(existing_token)
        .build()
        .expect("client init")
}

/// Expect exactly `times` verify calls answered with `token`
#[allow(dead_code)]
pub async fn mount_verify(server: &MockServer, token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/v1/merchant/verify"))
        .and(body_json(serde_json::json!({
            "apiKey": API_KEY,
            "secret": SECRET_KEY,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "token": token,
        })))
        .expect(times)
        .mount(server)
        .await;
}
