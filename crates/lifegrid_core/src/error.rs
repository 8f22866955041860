//! Error types for lifegrid_core.
//!
//! Construction is the only fallible operation on a universe; everything
//! else is total over the integer plane.

use thiserror::Error;

/// Main error type for lifegrid_core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UniverseError {
    /// A construction argument was outside its valid range
    #[error("Invalid argument `{name}`: must be positive, got {value}")]
    InvalidArgument { name: &'static str, value: i32 },
}

/// Result type alias for lifegrid_core operations.
pub type Result<T> = std::result::Result<T, UniverseError>;

impl UniverseError {
    /// Creates a new invalid argument error.
    #[must_use]
    pub fn invalid_argument(name: &'static str, value: i32) -> Self {
        Self::InvalidArgument { name, value }
    }

    /// Name of the argument that was rejected.
    #[must_use]
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name, .. } => name,
        }
    }
}
