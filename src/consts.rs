//! Global constants for the application.

pub const MAX_REMARKS_WORDS_VAR: &str = "FORM_MAX_REMARKS_WORDS"; // Overrides the remarks word limit.
