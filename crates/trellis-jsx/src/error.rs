//! Conversion errors.

use thiserror::Error;
use trellis_style::ValidationError;

/// Why a conversion was aborted.
///
/// Errors are passed through unchanged: the display text is that of the
/// originating error.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// A style value failed validation (`box-shadow`, `aspect-ratio`).
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A function component returned an error.
    #[error(transparent)]
    Component(anyhow::Error),
    /// A deferred element resolved to an error.
    #[error(transparent)]
    Deferred(anyhow::Error),
}
