/*
[INPUT]:  Identifier of a failed transfer, or an amount and fee to price
[OUTPUT]: Retry of a failed disbursement and card charge quotes
[POS]:    Service layer - transfer endpoints
[UPDATE]: When transfer endpoints or their fields change
*/

use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::http::MoneywaveClient;
use crate::service::Service;
use crate::types::endpoints;

/// Ask the API to retry a disbursement that failed on its side
///
/// POST v1/transfer/disburse/retry
///
/// This only wraps the remote retry endpoint; the client itself never
/// repeats requests.
#[derive(Debug, Clone, Serialize)]
pub struct RetryFailedTransfer {
    #[serde(skip)]
    client: MoneywaveClient,
    /// Id of the failed transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Send the retry to a different account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_bank: Option<String>,
}

impl RetryFailedTransfer {
    pub fn new(client: MoneywaveClient) -> Self {
        Self {
            client,
            id: None,
            recipient_account_number: None,
            recipient_bank: None,
        }
    }
}

impl Service for RetryFailedTransfer {
    fn client(&self) -> &MoneywaveClient {
        &self.client
    }

    fn request_method(&self) -> Method {
        Method::POST
    }

    fn request_path(&self) -> &'static str {
        endpoints::RETRY_FAILED_TRANSFER
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["id"]
    }
}

/// Total amount charged to a card for a transfer of `amount` plus `fee`
///
/// POST v1/get-charge
#[derive(Debug, Clone, Serialize)]
pub struct TotalChargeToCard {
    #[serde(skip)]
    client: MoneywaveClient,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
}

impl TotalChargeToCard {
    pub fn new(client: MoneywaveClient) -> Self {
        Self {
            client,
            amount: None,
            fee: None,
        }
    }
}

impl Service for TotalChargeToCard {
    fn client(&self) -> &MoneywaveClient {
        &self.client
    }

    fn request_method(&self) -> Method {
        Method::POST
    }

    fn request_path(&self) -> &'static str {
        endpoints::TOTAL_CHARGE
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["amount", "fee"]
    }
}

impl MoneywaveClient {
    pub fn retry_failed_transfer(&self) -> RetryFailedTransfer {
        RetryFailedTransfer::new(self.clone())
    }

    pub fn total_charge_to_card(&self) -> TotalChargeToCard {
        TotalChargeToCard::new(self.clone())
    }
}
