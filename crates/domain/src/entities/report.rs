//! Research report entity

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Maximum subject length derived from the report body
const SUBJECT_MAX_CHARS: usize = 72;

/// Subject used when the report yields no usable line
const FALLBACK_SUBJECT: &str = "Research report";

/// A finished research report in markdown
///
/// By convention this is the last chunk emitted by the research stream;
/// there is no end marker beyond stream completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    markdown: String,
}

impl Report {
    /// Create a report from its markdown body
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyReport`] for empty or whitespace-only
    /// input.
    pub fn new(markdown: impl Into<String>) -> Result<Self, DomainError> {
        let markdown = markdown.into();

        if markdown.trim().is_empty() {
            return Err(DomainError::EmptyReport);
        }

        Ok(Self { markdown })
    }

    /// The raw markdown body
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// Derive an email subject line from the report
    ///
    /// Uses the first ATX heading if one exists, otherwise the first
    /// non-empty line truncated to 72 characters.
    pub fn subject(&self) -> String {
        for line in self.markdown.lines() {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix('#') {
                let heading = rest.trim_start_matches('#').trim();
                if !heading.is_empty() {
                    return heading.to_string();
                }
            }
        }

        self.markdown
            .lines()
            .map(|line| line.trim().trim_start_matches('#').trim())
            .find(|line| !line.is_empty())
            .map_or_else(|| FALLBACK_SUBJECT.to_string(), truncate_subject)
    }
}

/// Truncate a line to the subject limit, on a character boundary
fn truncate_subject(line: &str) -> String {
    if line.chars().count() <= SUBJECT_MAX_CHARS {
        return line.to_string();
    }

    let mut subject: String = line.chars().take(SUBJECT_MAX_CHARS).collect();
    subject.push('…');
    subject
}
