/*
[INPUT]:  MONEYWAVE_* environment variables
[OUTPUT]: Bulk disbursement result split into passed and failed transfers
[POS]:    Examples - bulk disbursement demonstration
[UPDATE]: When the bulk disbursement flow changes
*/

use moneywave_adapter::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = match MoneywaveClient::new(std::env::var("MONEYWAVE_ACCESS_TOKEN").ok()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let mut bulk = client.disburse_bulk();
    bulk.lock = Some("wallet password".to_string());
    bulk.reference = Some(format!("txn-{}", uuid::Uuid::new_v4()));
    bulk.sender_name = Some("MoneywaveSDK".to_string());
    bulk.add_recipient(banks::ACCESS_BANK, "0690000004", Decimal::ONE, None)
        .add_recipient(banks::ACCESS_BANK, "0690000005", Decimal::TWO, None);

    match bulk.send().await {
        Ok(response) => {
            println!("raw: {}", response.raw_response());
            println!("failed: {:?}", response.failed());
            println!("passed: {:?}", response.passed());
            println!("data: {}", response.data());
            println!("message: {}", response.message());
        }
        Err(MoneywaveError::Validation(message)) => eprintln!("invalid request: {message}"),
        Err(e) => eprintln!("request could not be sent: {e}"),
    }

    if let Some(token) = client.access_token() {
        println!("MONEYWAVE_ACCESS_TOKEN={token}");
    }
}
