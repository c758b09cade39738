/*
[INPUT]:  Account number and bank code
[OUTPUT]: Account holder name and the list of supported banks
[POS]:    Service layer - lookup endpoints
[UPDATE]: When lookup endpoints change
*/

use reqwest::Method;
use serde::Serialize;

use crate::http::MoneywaveClient;
use crate::service::Service;
use crate::types::endpoints;

/// Resolve the holder of an account number
///
/// POST v1/resolve/account
#[derive(Debug, Clone, Serialize)]
pub struct AccountNumberValidation {
    #[serde(skip)]
    client: MoneywaveClient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
}

impl AccountNumberValidation {
    pub fn new(client: MoneywaveClient) -> Self {
        Self {
            client,
            account_number: None,
            bank_code: None,
        }
    }
}

impl Service for AccountNumberValidation {
    fn client(&self) -> &MoneywaveClient {
        &self.client
    }

    fn request_method(&self) -> Method {
        Method::POST
    }

    fn request_path(&self) -> &'static str {
        endpoints::RESOLVE_ACCOUNT
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["account_number", "bank_code"]
    }
}

/// Banks the API can pay into, keyed by bank code
///
/// POST banks
#[derive(Debug, Clone, Serialize)]
pub struct GetBanks {
    #[serde(skip)]
    client: MoneywaveClient,
}

impl GetBanks {
    pub fn new(client: MoneywaveClient) -> Self {
        Self { client }
    }
}

impl Service for GetBanks {
    fn client(&self) -> &MoneywaveClient {
        &self.client
    }

    fn request_method(&self) -> Method {
        Method::POST
    }

    fn request_path(&self) -> &'static str {
        endpoints::BANKS
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[]
    }
}

impl MoneywaveClient {
    pub fn account_number_validation(&self) -> AccountNumberValidation {
        AccountNumberValidation::new(self.clone())
    }

    pub fn banks(&self) -> GetBanks {
        GetBanks::new(self.clone())
    }
}
