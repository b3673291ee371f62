//! Canonical error and result types for the crate.
//!
//! Every failure here is an ordinary value. None is fatal to the endpoint
//! that raised the original error; callers fall back to reporting the
//! completion without annotation.

use thiserror::Error;

pub use crate::bounded::FormatError;

/// Failures while producing an error data payload.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ErrorDataError {
    /// The payload buffer could not be allocated.
    #[error("failed to allocate {capacity} byte error data buffer")]
    Allocation {
        /// Requested buffer size in bytes.
        capacity: usize,
    },
    /// The connection descriptor did not fit its reserved region.
    #[error("failed to format connection descriptor: {0}")]
    Formatting(#[from] FormatError),
}

impl ErrorDataError {
    /// Short label for this failure, used in logs and metrics.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Allocation { .. } => "allocation",
            Self::Formatting(_) => "formatting",
        }
    }
}

/// Result alias used by payload-producing APIs.
pub type Result<T> = std::result::Result<T, ErrorDataError>;
