/*
[INPUT]:  Wallet lock, amount, destination account and transaction reference
[OUTPUT]: Single wallet-to-account transfer and its status lookup
[POS]:    Service layer - disbursement endpoints
[UPDATE]: When disbursement fields or endpoints change
*/

use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::http::MoneywaveClient;
use crate::service::Service;
use crate::types::{Currency, endpoints};

/// Transfer funds from the merchant wallet to one bank account
///
/// POST v1/disburse
#[derive(Debug, Clone, Serialize)]
pub struct Disburse {
    #[serde(skip)]
    client: MoneywaveClient,
    /// Wallet password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(rename = "bankcode")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(rename = "accountNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(rename = "senderName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    /// Unique reference of this transfer
    #[serde(rename = "ref")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Disburse {
    pub fn new(client: MoneywaveClient) -> Self {
        Self {
            client,
            lock: None,
            amount: None,
            bank_code: None,
            account_number: None,
            currency: Some(Currency::Naira),
            sender_name: None,
            reference: None,
        }
    }
}

impl Service for Disburse {
    fn client(&self) -> &MoneywaveClient {
        &self.client
    }

    fn request_method(&self) -> Method {
        Method::POST
    }

    fn request_path(&self) -> &'static str {
        endpoints::DISBURSE
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[
            "lock",
            "amount",
            "bankcode",
            "accountNumber",
            "currency",
            "senderName",
            "ref",
        ]
    }
}

/// Look up the state of an earlier disbursement by its reference
///
/// POST v1/disburse/status
#[derive(Debug, Clone, Serialize)]
pub struct DisburseStatus {
    #[serde(skip)]
    client: MoneywaveClient,
    #[serde(rename = "ref")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl DisburseStatus {
    pub fn new(client: MoneywaveClient) -> Self {
        Self {
            client,
            reference: None,
        }
    }
}

impl Service for DisburseStatus {
    fn client(&self) -> &MoneywaveClient {
        &self.client
    }

    fn request_method(&self) -> Method {
        Method::POST
    }

    fn request_path(&self) -> &'static str {
        endpoints::DISBURSE_STATUS
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["ref"]
    }
}

impl MoneywaveClient {
    pub fn disburse(&self) -> Disburse {
        Disburse::new(self.clone())
    }

    pub fn disburse_status(&self) -> DisburseStatus {
        DisburseStatus::new(self.clone())
    }
}
