//! Core types for trailer matching and freight quoting

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// USD to CAD conversion applied to every quoted amount
pub const USD_TO_CAD_RATE: f64 = 1.37;

/// Currency for quoted amounts. Base prices are in USD.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Cad,
}

impl Currency {
    /// Multiplier from USD into this currency
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Cad => USD_TO_CAD_RATE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "CAD" => Ok(Currency::Cad),
            other => Err(Error::Config(ConfigError::ParseError(format!(
                "unsupported currency '{}'",
                other
            )))),
        }
    }
}

/// Kind of priced document produced at the end of the wizard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Quote,
    Invoice,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Quote => "Quote",
            DocumentKind::Invoice => "Invoice",
        }
    }

    /// Prefix used for document references
    pub fn reference_prefix(&self) -> &'static str {
        match self {
            DocumentKind::Quote => "Q",
            DocumentKind::Invoice => "INV",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
