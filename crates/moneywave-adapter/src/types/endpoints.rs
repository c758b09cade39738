/*
[INPUT]:  Moneywave REST API reference
[OUTPUT]: Endpoint paths relative to the environment base URL
[POS]:    Data layer - endpoint constants
[UPDATE]: When endpoints are added or moved
*/

pub const VERIFY_MERCHANT: &str = "v1/merchant/verify";
pub const WALLET_BALANCE: &str = "v1/wallet";
pub const DISBURSE: &str = "v1/disburse";
pub const DISBURSE_BULK: &str = "v1/disburse/bulk";
pub const DISBURSE_STATUS: &str = "v1/disburse/status";
pub const RETRY_FAILED_TRANSFER: &str = "v1/transfer/disburse/retry";
pub const RESOLVE_ACCOUNT: &str = "v1/resolve/account";
pub const TOTAL_CHARGE: &str = "v1/get-charge";
pub const BANKS: &str = "banks";
