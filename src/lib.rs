//! Validation of the student registration form before it is submitted.
//!
//! ```
//! use registration_form::form::{validate, StaticSnapshot};
//!
//! let result = validate(&StaticSnapshot::new().with_value("email", "not-an-email"));
//! assert!(!result.is_valid());
//! assert_eq!(result.errors().get("email"), Some("Please enter a valid email address"));
//! ```

pub mod config;
pub mod consts;
pub mod form;
pub mod utils;

pub use config::ValidatorConfig;
pub use form::{validate, FormValidator, ValidationResult};
pub use utils::error_messages::FormSubmissionError;
