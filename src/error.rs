//! Crate error type
//!
//! Recoverable validation failures are data (`errors[key]` in the store),
//! never errors of this type. `FormError` covers caller contract
//! violations, which fail fast instead of silently no-opping.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormError>;

/// Caller contract violations surfaced by store and adapter operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The key was never declared in the activation defaults
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// The incoming change event does not match the field's control kind
    #[error("field `{field}` received a change event that does not match its control")]
    EventMismatch { field: String },

    /// The field's control kind cannot back the requested adapter
    #[error("field `{field}` cannot back a `{adapter}` control")]
    UnsupportedControl { field: String, adapter: &'static str },
}
