//! Overlay error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by overlay operations
///
/// Input validation fails fast: an operation that returns one of these has
/// not modified any state. Toolkit-side errors are never reported here, they
/// are captured by [`crate::diagnostics::ErrorLatch`].
#[derive(Error, Debug)]
pub enum OverlayError {
    /// Rejected argument (non-finite coordinate, wrong corner count, bad style)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The window reported a zero dimension while a fraction was being derived
    #[error("Degenerate window size {width}x{height}: cannot derive a relative position")]
    DegenerateWindow {
        /// Window width in pixels
        width: u32,
        /// Window height in pixels
        height: u32,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl OverlayError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type for overlay operations
pub type OverlayResult<T> = Result<T, OverlayError>;
