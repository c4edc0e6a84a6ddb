//! Provides a validated, non-blank text value.
//!
//! Blank means empty or made only of whitespace, using the same whitespace
//! set the browser applies to form values (see [`is_form_whitespace`]).

use anyhow::{bail, Result};

use crate::utils::validation::is_form_whitespace;

/// Represents text content that is known not to be blank.
/// This type can only be constructed through validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextInput {
    // The trimmed text content
    text_content: String,
}

impl TextInput {
    /// Creates a new TextInput for a required field.
    ///
    /// # Arguments
    /// * `content` - The raw field value
    ///
    /// # Example
    /// ```
    /// use registration_form::utils::validation::TextInput;
    ///
    /// let city = TextInput::required("  Pune ").unwrap();
    /// assert_eq!(city.as_str(), "Pune");
    /// assert!(TextInput::required("   ").is_err());
    /// ```
    pub fn required(content: &str) -> Result<Self> {
        let trimmed = content.trim_matches(is_form_whitespace);

        if trimmed.is_empty() {
            bail!("Content cannot be empty");
        }

        Ok(Self {
            text_content: trimmed.to_string(),
        })
    }

    /// Number of words, where words are separated by runs of whitespace
    pub fn word_count(&self) -> usize {
        self.text_content
            .split(is_form_whitespace)
            .filter(|word| !word.is_empty())
            .count()
    }

    /// Returns the validated content as a string slice
    pub fn as_str(&self) -> &str {
        &self.text_content
    }
}
