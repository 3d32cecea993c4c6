//! Core error types for menagerie-core.

use thiserror::Error;

/// Errors produced while turning untrusted input into records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A variant tag that is neither `"dog"` nor `"cat"`.
    #[error("unknown animal kind: '{kind}'")]
    UnknownKind { kind: String },
}
