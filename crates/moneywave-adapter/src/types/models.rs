/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One payee of a bulk disbursement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(rename = "bankcode")]
    pub bank_code: String,
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "ref")]
    pub reference: String,
}

/// Body of `v1/merchant/verify`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub secret: String,
}

/// Reply of `v1/merchant/verify`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerifyResponse {
    pub status: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Wallet entry returned by `v1/wallet`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub balance: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Resolved holder of an account number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub account_name: String,
    #[serde(default)]
    pub account_number: Option<String>,
}
