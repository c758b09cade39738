/*
[INPUT]:  MONEYWAVE_* environment variables and a failed transaction id
[OUTPUT]: Result of asking the API to retry the transfer
[POS]:    Examples - failed transfer retry demonstration
[UPDATE]: When the retry flow changes
*/

use moneywave_adapter::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(id) = std::env::args().nth(1) else {
        eprintln!("usage: transfer_retry <transaction id>");
        return;
    };

    let client = match MoneywaveClient::new(std::env::var("MONEYWAVE_ACCESS_TOKEN").ok()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let mut retry = client.retry_failed_transfer();
    retry.id = Some(id);

    match retry.send().await {
        Ok(response) => {
            println!("data: {}", response.data());
            println!("message: {}", response.message());
        }
        Err(e) => eprintln!("retry could not be sent: {e}"),
    }
}
