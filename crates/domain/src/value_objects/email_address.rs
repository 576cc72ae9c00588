//! Email address value object with validation

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated email address, normalized to lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct EmailAddress {
    #[validate(email)]
    value: String,
}

impl EmailAddress {
    /// Create a new email address, validating the format
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEmailAddress`] if the format is invalid.
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let value = address.into().trim().to_lowercase();

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|_| DomainError::InvalidEmailAddress(candidate.value.clone()))?;

        Ok(candidate)
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address_is_accepted() {
        let address = EmailAddress::new("reports@example.com").unwrap();
        assert_eq!(address.as_str(), "reports@example.com");
    }

    #[test]
    fn address_is_normalized_to_lowercase() {
        let address = EmailAddress::new("Reports@Example.COM").unwrap();
        assert_eq!(address.as_str(), "reports@example.com");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let address = EmailAddress::new("  reports@example.com ").unwrap();
        assert_eq!(address.as_str(), "reports@example.com");
    }

    #[test]
    fn invalid_address_is_rejected() {
        assert!(EmailAddress::new("not-an-address").is_err());
        assert!(EmailAddress::new("@missing-local.com").is_err());
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn rejection_carries_the_offending_value() {
        match EmailAddress::new("broken") {
            Err(DomainError::InvalidEmailAddress(value)) => assert_eq!(value, "broken"),
            other => unreachable!("Expected InvalidEmailAddress, got {other:?}"),
        }
    }

    #[test]
    fn display_matches_content() {
        let address = EmailAddress::new("a@b.co").unwrap();
        assert_eq!(address.to_string(), "a@b.co");
    }
}
