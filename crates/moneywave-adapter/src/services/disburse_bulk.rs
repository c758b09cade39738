/*
[INPUT]:  Wallet lock, batch reference and an ordered list of recipients
[OUTPUT]: Bulk disbursement response partitioned into passed/failed items
[POS]:    Service layer - bulk disbursement endpoint
[UPDATE]: When recipient format or batch validation changes
*/

use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::http::{MoneywaveClient, MoneywaveError, Result};
use crate::response::{MoneywaveResponse, ResponseShape};
use crate::service::{Service, check_required, send_validated};
use crate::types::{Currency, Recipient, endpoints};

/// Transfer funds from the merchant wallet to several bank accounts at once
///
/// POST v1/disburse/bulk
///
/// Each recipient needs a reference that is unique within the batch. When
/// none is given, the recipient's 1-based position is used, so a retried
/// batch reuses "1", "2", ... unless the caller supplies its own.
#[derive(Debug, Clone, Serialize)]
pub struct DisburseBulk {
    #[serde(skip)]
    client: MoneywaveClient,
    /// Wallet password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    recipients: Vec<Recipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(rename = "senderName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    /// Unique reference of the whole batch
    #[serde(rename = "ref")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl DisburseBulk {
    pub fn new(client: MoneywaveClient) -> Self {
        Self {
            client,
            lock: None,
            recipients: Vec::new(),
            currency: Some(Currency::Naira),
            sender_name: None,
            reference: None,
        }
    }

    /// Append a recipient
    ///
    /// A missing or blank `reference` defaults to the recipient's position.
    /// Mixing explicit numeric references with defaults can collide (an
    /// explicit "2" followed by a default "2"); `send` rejects duplicates.
    pub fn add_recipient(
        &mut self,
        bank_code: impl Into<String>,
        account_number: impl Into<String>,
        amount: Decimal,
        reference: Option<String>,
    ) -> &mut Self {
        let reference = reference
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| (self.recipients.len() + 1).to_string());
        self.recipients.push(Recipient {
            bank_code: bank_code.into(),
            account_number: account_number.into(),
            amount,
            reference,
        });
        self
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    fn check_recipients(&self) -> Result<()> {
        if self.recipients.is_empty() {
            return Err(MoneywaveError::validation("at least 1 recipient required"));
        }
        if let Some(recipient) = self.recipients.iter().find(|r| r.amount <= Decimal::ZERO) {
            return Err(MoneywaveError::validation(format!(
                "recipient {} amount must be positive",
                recipient.reference
            )));
        }
        let mut seen = HashSet::new();
        if let Some(recipient) = self
            .recipients
            .iter()
            .find(|r| !seen.insert(r.reference.as_str()))
        {
            return Err(MoneywaveError::validation(format!(
                "recipient reference {} is not unique",
                recipient.reference
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Service for DisburseBulk {
    fn client(&self) -> &MoneywaveClient {
        &self.client
    }

    fn request_method(&self) -> Method {
        Method::POST
    }

    fn request_path(&self) -> &'static str {
        endpoints::DISBURSE_BULK
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["lock", "recipients", "currency", "senderName", "ref"]
    }

    fn response_shape(&self) -> ResponseShape {
        ResponseShape::Batch
    }

    fn validate(&self) -> Result<bool> {
        self.check_recipients()?;
        check_required(self.required_fields(), &self.payload()?)?;
        Ok(true)
    }

    /// Recipient checks run before the generic field checks
    async fn send(&self) -> Result<MoneywaveResponse> {
        self.check_recipients()?;
        send_validated(self).await
    }
}

impl MoneywaveClient {
    pub fn disburse_bulk(&self) -> DisburseBulk {
        DisburseBulk::new(self.clone())
    }
}
