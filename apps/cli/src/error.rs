//! # App Error Type
//!
//! Unified error type for the command-line app.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prompt I/O ───── io::Error ─────┐                                      │
//! │                                  │                                      │
//! │  Catalog lookup ─ CoreError ─────┼──► AppError ──► anyhow (main)        │
//! │                                  │                                      │
//! │  Environment ──── ConfigError ───┘                                      │
//! │                                                                         │
//! │  Bill rendering is the exception: print_bill() logs and swallows its    │
//! │  AppError so the session always ends normally.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use mcshell_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the app layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Domain failure from mcshell-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading a choice or writing output failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use mcshell_core::Category;

    #[test]
    fn test_core_error_is_transparent() {
        let err: AppError = CoreError::UnrecognizedSelection {
            category: Category::Beverage,
            label: "Cola".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Unrecognized beverage selection: 'Cola'");
    }

    #[test]
    fn test_io_error_message() {
        let err: AppError = io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into();
        assert_eq!(err.to_string(), "Terminal I/O failed: input closed");
    }
}
