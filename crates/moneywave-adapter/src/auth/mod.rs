/*
[INPUT]:  Merchant credentials and caller-cached tokens
[OUTPUT]: Access tokens and auth errors
[POS]:    Auth layer - handles Moneywave API authentication
[UPDATE]: When the token flow or credential sources change
*/

pub mod credentials;
pub mod token;

pub use credentials::Credentials;
pub use token::{TokenData, TokenManager};
