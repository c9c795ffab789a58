//! # Error Types
//!
//! Structured error types for tally_core. Each variant carries enough
//! context to explain what went wrong to the user without the caller
//! having to string-match.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::errors::{QuoteError, QuoteResult};
//!
//! fn require_selection(count: usize) -> QuoteResult<()> {
//!     if count == 0 {
//!         return Err(QuoteError::EmptySelection);
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tally_core operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Structured error type for quote-building operations.
///
/// Row-level garbage in a spreadsheet is never an error (those rows are
/// skipped during parsing); these variants cover the failures that abort
/// an operation outright.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
    /// The workbook itself could not be read (corrupt file, unsupported
    /// format, no sheets). Fatal to the load action.
    #[error("Could not read spreadsheet: {reason}")]
    SpreadsheetRead { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Export was requested with nothing selected
    #[error("Nothing selected - add at least one item before exporting")]
    EmptySelection,

    /// Typst compilation or PDF encoding failed
    #[error("PDF rendering failed during {stage}: {reason}")]
    RenderFailed { stage: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl QuoteError {
    /// Create a SpreadsheetRead error
    pub fn spreadsheet_read(reason: impl Into<String>) -> Self {
        QuoteError::SpreadsheetRead {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a RenderFailed error
    pub fn render_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        QuoteError::RenderFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::SpreadsheetRead { .. } => "SPREADSHEET_READ",
            QuoteError::FileError { .. } => "FILE_ERROR",
            QuoteError::EmptySelection => "EMPTY_SELECTION",
            QuoteError::RenderFailed { .. } => "RENDER_FAILED",
            QuoteError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = QuoteError::spreadsheet_read("not a zip archive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: QuoteError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(QuoteError::EmptySelection.error_code(), "EMPTY_SELECTION");
        assert_eq!(
            QuoteError::render_failed("compile", "boom").error_code(),
            "RENDER_FAILED"
        );
    }

    #[test]
    fn test_display_messages() {
        let error = QuoteError::file_error("write", "quote.pdf", "permission denied");
        assert!(error.to_string().contains("quote.pdf"));
        assert!(error.to_string().contains("permission denied"));
    }
}
