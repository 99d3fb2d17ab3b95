//! # Error Types
//!
//! Validation error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  stockroom-core errors (this file)                                  │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  stockroom-db errors (separate crate)                               │
//! │  └── DbError          - Storage operation failures                  │
//! │                                                                     │
//! │  Flow: ValidationError (caller side) → DbError (storage side)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a record's fields do not meet the domain rules.
/// Callers validate before handing records to the repository; the
/// repository itself stays a pass-through to storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A text field exceeds its maximum length.
    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: String, max: usize },

    /// A numeric field is negative where only zero or more is allowed.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// A numeric field holds a value with no meaning in the domain
    /// (NaN or infinite price).
    #[error("{field} is not a finite number")]
    NotFinite { field: String },
}
