//! Currency codes for stored amounts.
//!
//! Amounts keep the currency they were entered in and are never converted;
//! the code travels with the record for display only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a currency code fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid currency code (must be a 3-letter code): {0}")]
pub struct InvalidCurrencyCode(pub String);

/// A 3-letter currency code (e.g., "GBP", "USD").
///
/// Always held uppercase; construction validates the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrencyCode` unless the input is exactly three
    /// ASCII letters.
    pub fn new(code: &str) -> Result<Self, InvalidCurrencyCode> {
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(InvalidCurrencyCode(code.to_string()))
        }
    }

    /// The store's default currency for new expense records.
    #[must_use]
    pub fn gbp() -> Self {
        Self("GBP".to_string())
    }

    /// The default display currency for fresh sessions.
    #[must_use]
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::gbp()
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = InvalidCurrencyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = InvalidCurrencyCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_normalizes_case() {
        assert_eq!(CurrencyCode::new("gbp").unwrap().as_str(), "GBP");
        assert_eq!(CurrencyCode::new("Eur").unwrap().as_str(), "EUR");
    }

    #[test]
    fn test_new_rejects_bad_shapes() {
        assert!(CurrencyCode::new("").is_err());
        assert!(CurrencyCode::new("GB").is_err());
        assert!(CurrencyCode::new("GBPX").is_err());
        assert!(CurrencyCode::new("G1P").is_err());
        assert!(CurrencyCode::new("€£¥").is_err());
    }

    #[test]
    fn test_default_is_store_default() {
        assert_eq!(CurrencyCode::default().as_str(), "GBP");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(CurrencyCode::from_str("usd").unwrap(), CurrencyCode::usd());
        assert!(CurrencyCode::from_str("dollars").is_err());
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let code = CurrencyCode::new("JPY").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"JPY\"");
        let back: CurrencyCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);

        let bad: Result<CurrencyCode, _> = serde_json::from_str("\"notacode\"");
        assert!(bad.is_err());
    }
}
