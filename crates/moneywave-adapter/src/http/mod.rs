/*
[INPUT]:  Client configuration, assembled requests and transports
[OUTPUT]: Raw HTTP replies and crate-wide error types
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding transports or changing client behavior
*/

pub mod client;
pub mod error;
pub mod request;
pub mod transport;

pub use error::{MoneywaveError, Result, TransportError};
pub use request::{RawResponse, ServiceRequest, json_object};
pub use transport::{HttpTransport, MockTransport, ReqwestTransport};

pub use client::{ClientBuilder, ClientConfig, MoneywaveClient};
