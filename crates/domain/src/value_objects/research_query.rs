//! Research query value object
//!
//! A query is the free-text research topic a user submits. Construction
//! rejects empty and whitespace-only input, so an invalid query can never
//! reach the research pipeline. This is the system-wide policy for empty
//! input: short-circuit client-side, zero pipeline invocations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Maximum accepted query length in characters
pub const MAX_QUERY_CHARS: usize = 4096;

/// A validated, trimmed research query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResearchQuery {
    value: String,
}

impl ResearchQuery {
    /// Create a new query, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyQuery`] for empty or whitespace-only
    /// input and [`DomainError::QueryTooLong`] when the trimmed text
    /// exceeds [`MAX_QUERY_CHARS`].
    pub fn new(query: impl Into<String>) -> Result<Self, DomainError> {
        let value = query.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::EmptyQuery);
        }

        let len = value.chars().count();
        if len > MAX_QUERY_CHARS {
            return Err(DomainError::QueryTooLong {
                len,
                max: MAX_QUERY_CHARS,
            });
        }

        Ok(Self { value })
    }

    /// Get the query text as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ResearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for ResearchQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ResearchQuery {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
