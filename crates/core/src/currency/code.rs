//! Supported currency codes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for empty or unrecognized currency codes.
///
/// Raised only on structural validation of a code string; unsupported
/// conversion *pairs* are not an error (they pass through unconverted).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// Currency code was empty.
    #[error("Currency code must not be empty")]
    Empty,

    /// Currency code is not one of the supported codes.
    #[error("Unrecognized currency code: {0}")]
    Unrecognized(String),
}

/// Currency of a charge line or report.
///
/// Reports are normalized into a single target currency (USD or AED in the
/// current deployment). EUR and GBP may appear on stored charge lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollar.
    Usd,
    /// United Arab Emirates dirham.
    Aed,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
}

impl Currency {
    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Aed => "AED",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CurrencyError::Empty);
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "AED" => Ok(Self::Aed),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            other => Err(CurrencyError::Unrecognized(other.to_string())),
        }
    }
}
