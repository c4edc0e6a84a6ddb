//! Represents an email address accepted by the registration form.
//!
//! The check is deliberately loose: a local part, an `@`, and a domain
//! containing at least one dot, none of them holding whitespace or a second
//! `@`. This is the same shape the form's email field has always accepted.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::validation::FORM_WHITESPACE_CLASS;

// ^[^\s@]+@[^\s@]+\.[^\s@]+$ with the browser's whitespace set for \s
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{FORM_WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("Failed to compile email regex")
});

/// An email address that matched the form's email pattern.
/// This type can only be constructed through validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailInput {
    // The address exactly as submitted
    email: String,
}

impl EmailInput {
    /// Creates a new `EmailInput` after checking the address format.
    ///
    /// The value is matched as submitted: surrounding whitespace is not
    /// trimmed away and makes the address invalid.
    ///
    /// # Arguments
    /// * `email` - The raw email address to validate
    ///
    /// # Returns
    /// * `Ok(EmailInput)` if the email is valid
    /// * `Err` with a descriptive message if validation fails
    ///
    /// # Example
    /// ```
    /// use registration_form::utils::validation::EmailInput;
    ///
    /// assert!(EmailInput::new("a@b.co").is_ok());
    /// assert!(EmailInput::new("not-an-email").is_err());
    /// ```
    pub fn new(email: &str) -> Result<Self> {
        if email.is_empty() {
            bail!("Email address cannot be empty");
        }

        if !EMAIL_REGEX.is_match(email) {
            bail!("Invalid email format");
        }

        Ok(Self {
            email: email.to_string(),
        })
    }

    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.email
    }
}
