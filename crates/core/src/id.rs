//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// ISBN: the identifier under which a book is keyed in the catalog.
///
/// Stored as the caller-supplied string (no checksum validation; catalogs in
/// the wild carry plenty of house SKUs that are not real ISBN-13s). The only
/// requirement is that it is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    /// Create an identifier from a raw string.
    ///
    /// Surrounding whitespace is trimmed; a blank input is rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("Isbn: empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Isbn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Isbn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifier() {
        let isbn = Isbn::new("ISBN1").unwrap();
        assert_eq!(isbn.as_str(), "ISBN1");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let isbn = Isbn::new("  978-0-13-468599-1 ").unwrap();
        assert_eq!(isbn.as_str(), "978-0-13-468599-1");
    }

    #[test]
    fn rejects_blank_input() {
        let err = Isbn::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn parses_via_from_str() {
        let isbn: Isbn = "ISBN-EXACT".parse().unwrap();
        assert_eq!(isbn.to_string(), "ISBN-EXACT");
    }
}
