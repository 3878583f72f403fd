//! Error types for container operations.
//!
//! Failures in this crate are rare by design: out-of-range reads and absent
//! keys return `None` rather than erroring. The structured variants here cover
//! the two cases that do fail, both of which are caller-recoverable.

use thiserror::Error;

/// Structured error types for container operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ContainerError {
    /// A write to a key that does not exist on a map with a locked key set
    #[error("unknown map key '{key}'")]
    UnknownKey { key: String },

    /// A value had the wrong shape for the requested operation
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl ContainerError {
    /// Check if this error is a locked-key violation
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, ContainerError::UnknownKey { .. })
    }

    /// Check if this error is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ContainerError::TypeMismatch { .. })
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            ContainerError::UnknownKey { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from ContainerError to the main Error type
impl From<ContainerError> for crate::Error {
    fn from(err: ContainerError) -> Self {
        crate::Error::Container(err)
    }
}
