//! Country identifiers and catalog records.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque country code (a 3-letter ISO-like code such as `FRA`).
///
/// Equality is structural. [`CountryCode::parse`] normalizes user input;
/// [`CountryCode::new`] takes the value as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Wraps a code without normalization.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Parses user input: trims whitespace and upper-cases ASCII letters.
    ///
    /// Returns `None` for blank input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_ascii_uppercase()))
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// One catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Unique code.
    pub code: CountryCode,
    /// Display name.
    pub name: String,
    /// Surface area in km², used for ordering listings.
    #[serde(default)]
    pub area: f64,
}

impl Country {
    /// Creates a catalog record.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, area: f64) -> Self {
        Self {
            code: CountryCode::new(code),
            name: name.into(),
            area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_input() {
        assert_eq!(CountryCode::parse("  fra "), Some(CountryCode::new("FRA")));
        assert_eq!(CountryCode::parse("   "), None);
        assert_eq!(CountryCode::parse(""), None);
    }

    #[test]
    fn test_code_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![CountryCode::new("DEU")]).unwrap();
        assert_eq!(json, r#"["DEU"]"#);
    }

    #[test]
    fn test_country_area_defaults_to_zero() {
        let country: Country = serde_json::from_str(r#"{"code":"AND","name":"Andorra"}"#).unwrap();
        assert_eq!(country.code.as_str(), "AND");
        assert!(country.area.abs() < f64::EPSILON);
    }
}
