//! Validation verdicts and the per-field message map

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::utils::error_messages::{FormSubmissionError, SUBMISSION_ERROR};

/// Field name to message, at most one message per field.
///
/// Messages can only be added with [`FieldErrors::try_insert`], so whichever
/// check flags a field first keeps its message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Records `message` for `field` unless the field already has one.
    /// Returns whether the message was stored.
    pub fn try_insert(&mut self, field: &str, message: impl Into<String>) -> bool {
        if self.0.contains_key(field) {
            return false;
        }
        let message = message.into();
        debug!("{field}: {message}");
        self.0.insert(field.to_string(), message);
        true
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: FieldErrors,
}

impl From<FieldErrors> for ValidationResult {
    fn from(errors: FieldErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Turns a failed verdict into the error that aborts the submission
    pub fn into_submission(self) -> Result<(), FormSubmissionError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(FormSubmissionError::new(SUBMISSION_ERROR, self.errors))
        }
    }
}
