/*
[INPUT]:  API key, secret key and target environment
[OUTPUT]: Credentials used to obtain access tokens
[POS]:    Auth layer - merchant credentials
[UPDATE]: When credential sources or env variable names change
*/

use std::fmt;

use crate::http::{MoneywaveError, Result};
use crate::types::Environment;

pub const API_KEY_VAR: &str = "MONEYWAVE_API_KEY";
pub const SECRET_KEY_VAR: &str = "MONEYWAVE_SECRET_KEY";
pub const ENVIRONMENT_VAR: &str = "MONEYWAVE_ENV";

/// Merchant credentials for the verify endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
    pub environment: Environment,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            environment,
        }
    }

    /// Read credentials from `MONEYWAVE_API_KEY`, `MONEYWAVE_SECRET_KEY`
    /// and `MONEYWAVE_ENV`.
    ///
    /// Missing keys are left empty; they only matter once a token has to be
    /// obtained. An unparsable environment is a configuration error.
    pub fn from_env() -> Result<Self> {
        let environment = match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) if !value.trim().is_empty() => value
                .parse::<Environment>()
                .map_err(|e| MoneywaveError::Config(format!("{ENVIRONMENT_VAR}: {e}")))?,
            _ => Environment::default(),
        };

        Ok(Self {
            api_key: std::env::var(API_KEY_VAR).unwrap_or_default(),
            secret_key: std::env::var(SECRET_KEY_VAR).unwrap_or_default(),
            environment,
        })
    }

    /// Both keys are present
    pub fn is_complete(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.secret_key.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}
