//! # Error Types
//!
//! Domain-specific error types for mcshell-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mcshell-core errors (this file)                                        │
//! │  ├── CoreError        - Selection and pricing failures                  │
//! │  └── ValidationError  - Malformed catalog tables                        │
//! │                                                                         │
//! │  mcshell-cli errors (app crate)                                         │
//! │  └── AppError         - Core + terminal I/O + configuration             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → anyhow (main)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::Category;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A chosen label does not belong to the category's catalog.
    ///
    /// ## When This Occurs
    /// Only if the prompt offered something the catalog never listed. The
    /// lookup fails instead of falling back to a default item.
    #[error("Unrecognized {category} selection: '{label}'")]
    UnrecognizedSelection { category: Category, label: String },

    /// The "finish" entry was passed where an orderable item is required.
    #[error("The {category} finish option cannot be added to an order")]
    SentinelNotOrderable { category: Category },

    /// An amount no longer fits in the money representation.
    #[error("Amount overflow while computing the bill")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog table validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A menu option carries a negative price.
    #[error("'{name}' has a negative price")]
    NegativePrice { name: String },

    /// The catalog has no finish entry.
    #[error("{category} catalog has no finish option")]
    MissingSentinel { category: Category },

    /// The catalog has more than one finish entry.
    #[error("{category} catalog has {count} finish options, expected exactly one")]
    DuplicateSentinel { category: Category, count: usize },

    /// The finish entry is not free.
    #[error("{category} finish option must have a zero price")]
    SentinelPriced { category: Category },

    /// Two options render to the same display label.
    #[error("Duplicate label '{label}' in {category} catalog")]
    DuplicateLabel { category: Category, label: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
