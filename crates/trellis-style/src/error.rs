//! Validation errors.
//!
//! Only two grammars fail loudly; everything else falls back to a default.
//! The messages are part of the observable contract and must not change.

use thiserror::Error;

/// A shorthand value too malformed to fall back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `box-shadow` with fewer than the three lengths and a color.
    #[error("Invalid box-shadow")]
    InvalidBoxShadow {
        /// The rejected value.
        value: String,
    },
    /// `box-shadow` with more components than `inset`, four lengths and a color.
    #[error("Invalid box-shadow format")]
    InvalidBoxShadowFormat {
        /// The rejected value.
        value: String,
    },
    /// `aspect-ratio: n/0`.
    #[error("Denominator cannot be zero")]
    ZeroDenominator {
        /// The rejected value.
        value: String,
    },
}
