//! User-facing messages and the error raised when a submission is rejected

use thiserror::Error;

use crate::form::FieldErrors;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

pub const SUBMISSION_ERROR: &str = "Please fix the errors below";

/// Message for a required field left empty
pub fn required(label: &str) -> String {
    format!("{label} is required")
}

/// Message for remarks longer than the configured word limit
pub fn remarks_too_long(max_words: usize) -> String {
    format!("Remarks must not exceed {max_words} words")
}

/// Raised to stop a submission whose fields did not validate.
///
/// Callers match on this type to tell "show the inline messages" apart
/// from failures of the submission itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FormSubmissionError {
    message: String,
    errors: FieldErrors,
}

impl FormSubmissionError {
    pub fn new(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The per-field messages to render next to each input
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }
}
