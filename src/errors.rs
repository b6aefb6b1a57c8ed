//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectroscopyError {
    /// Raised when a parameter or grid cannot produce a defined result.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable explanation.
        reason: String,
    },
}

impl SpectroscopyError {
    /// Builds an [`SpectroscopyError::InvalidParameter`].
    #[must_use]
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }

    /// Convenience for the common "value must be finite" rejection.
    #[must_use]
    pub fn not_finite(name: &'static str, value: Scalar) -> Self {
        Self::invalid(name, format!("expected a finite value, got {value}"))
    }
}

/// Result alias used by fallible operations in this crate.
pub type Result<T> = std::result::Result<T, SpectroscopyError>;
