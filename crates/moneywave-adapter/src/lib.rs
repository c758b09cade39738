/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Moneywave adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod response;
pub mod service;
pub mod services;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, TokenData, TokenManager};

// Re-export commonly used types from http
pub use http::{
    ClientBuilder,
    ClientConfig,
    HttpTransport,
    MockTransport,
    MoneywaveClient,
    MoneywaveError,
    RawResponse,
    ReqwestTransport,
    Result,
    ServiceRequest,
    TransportError,
};

pub use response::{MoneywaveResponse, ResponseShape};
pub use service::Service;
pub use services::*;

// Re-export all types
pub use types::*;
