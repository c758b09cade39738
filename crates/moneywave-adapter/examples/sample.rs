/*
[INPUT]:  MONEYWAVE_* environment variables and an optional cached token
[OUTPUT]: Access token printed for reuse in later runs
[POS]:    Examples - authentication flow demonstration
[UPDATE]: When auth flow changes
*/

use moneywave_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: obtain (or reuse) an access token
///
/// Pass a token from an earlier run in `MONEYWAVE_ACCESS_TOKEN` to skip the
/// verify round trip.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cached = std::env::var("MONEYWAVE_ACCESS_TOKEN").ok();
    let client = match MoneywaveClient::new(cached) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.authenticate().await {
        Ok(token) => println!("MONEYWAVE_ACCESS_TOKEN={token}"),
        Err(e) => eprintln!("Authentication failed: {e}"),
    }
}
