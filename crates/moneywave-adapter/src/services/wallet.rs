/*
[INPUT]:  Authenticated client
[OUTPUT]: Balances of the merchant's wallets
[POS]:    Service layer - wallet endpoints
[UPDATE]: When wallet endpoints change
*/

use reqwest::Method;
use serde::Serialize;

use crate::http::MoneywaveClient;
use crate::service::Service;
use crate::types::endpoints;

/// Balance of every wallet owned by the merchant
///
/// GET v1/wallet
#[derive(Debug, Clone, Serialize)]
pub struct WalletBalance {
    #[serde(skip)]
    client: MoneywaveClient,
}

impl WalletBalance {
    pub fn new(client: MoneywaveClient) -> Self {
        Self { client }
    }
}

impl Service for WalletBalance {
    fn client(&self) -> &MoneywaveClient {
        &self.client
    }

    fn request_method(&self) -> Method {
        Method::GET
    }

    fn request_path(&self) -> &'static str {
        endpoints::WALLET_BALANCE
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[]
    }
}

impl MoneywaveClient {
    pub fn wallet_balance(&self) -> WalletBalance {
        WalletBalance::new(self.clone())
    }
}
