//! The registration form: its fields, the snapshot the validator reads,
//! and the validator itself.

pub mod fields;
mod registration;
mod result;
mod snapshot;
mod validator;

pub use fields::{FieldSpec, REQUIRED_FIELDS};
pub use registration::Registration;
pub use result::{FieldErrors, ValidationResult};
pub use snapshot::{ControlKind, FieldValue, FileRef, FormSnapshot, InvalidControl, StaticSnapshot};
pub use validator::{validate, FormValidator};
