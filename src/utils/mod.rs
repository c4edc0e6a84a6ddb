//! Shared helpers: typed input validation and user-facing messages.

pub mod error_messages;
pub mod validation;
