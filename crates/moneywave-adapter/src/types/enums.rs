/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const PRODUCTION_BASE_URL: &str = "https://live.moneywaveapi.co/";
const STAGING_BASE_URL: &str = "https://moneywave.herokuapp.com/";

/// Moneywave deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Staging,
}

impl Environment {
    /// Base URL every endpoint path is joined onto
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Staging => STAGING_BASE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "live" => Ok(Environment::Production),
            "staging" | "test" => Ok(Environment::Staging),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Staging => f.write_str("staging"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "NGN")]
    Naira,
    #[serde(rename = "USD")]
    UsDollar,
    #[serde(rename = "GHS")]
    GhanaianCedi,
    #[serde(rename = "KES")]
    KenyanShilling,
    #[serde(rename = "GBP")]
    PoundSterling,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Naira => "NGN",
            Currency::UsDollar => "USD",
            Currency::GhanaianCedi => "GHS",
            Currency::KenyanShilling => "KES",
            Currency::PoundSterling => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("PRODUCTION".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("staging".parse::<Environment>(), Ok(Environment::Staging));
        assert!("moon".parse::<Environment>().is_err());
    }

    #[test]
    fn test_currency_serializes_as_code() {
        let value = serde_json::to_value(Currency::Naira).unwrap();
        assert_eq!(value, serde_json::json!("NGN"));
        assert_eq!(Currency::KenyanShilling.code(), "KES");
        assert_eq!(Currency::PoundSterling.to_string(), "GBP");
    }
}
