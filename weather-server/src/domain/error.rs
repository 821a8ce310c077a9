//! Domain error types.
//!
//! These errors represent validation failures when building domain values
//! from remote records or stored rows. They are distinct from API/IO errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A required field was missing or blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
