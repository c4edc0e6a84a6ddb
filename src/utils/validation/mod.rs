//! Root module for the validation system.
//! Exposes the typed inputs the form validator is built from.

mod types;
mod constants;

// Re-export commonly used types and functions
pub use constants::*;
pub use types::{EmailInput, FileInput, TextInput};
