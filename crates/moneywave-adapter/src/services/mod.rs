/*
[INPUT]:  MoneywaveClient and caller-provided field values
[OUTPUT]: Concrete service objects, one per API operation
[POS]:    Service layer - concrete operations and their factories
[UPDATE]: When endpoints are added or their required fields change
*/

pub mod disburse;
pub mod disburse_bulk;
pub mod lookup;
pub mod transfer;
pub mod wallet;

pub use disburse::{Disburse, DisburseStatus};
pub use disburse_bulk::DisburseBulk;
pub use lookup::{AccountNumberValidation, GetBanks};
pub use transfer::{RetryFailedTransfer, TotalChargeToCard};
pub use wallet::WalletBalance;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::auth::Credentials;
    use crate::http::{MockTransport, MoneywaveClient};
    use crate::types::Environment;

    /// Client with a cached token so no verify call is made
    pub fn client(transport: &MockTransport) -> MoneywaveClient {
        MoneywaveClient::builder(Credentials::new("key", "secret", Environment::Staging))
            .base_url("http://moneywave.test")
            .transport(transport.clone())
            .access_token(Some("test-token".to_string()))
            .build()
            .expect("client init")
    }
}
