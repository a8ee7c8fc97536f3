//! # Error Types
//!
//! Domain error types for ticket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ticket-core errors (this file)                                        │
//! │  └── ValidationError  - Invalid item arguments (title/price/quantity)  │
//! │                         or a total too large to represent              │
//! │                                                                         │
//! │  ticket-demo errors (app)                                              │
//! │  └── ConfigError      - Bad environment / arguments                    │
//! │                                                                         │
//! │  Flow: ValidationError → anyhow context → process exit                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names the field that failed
//! 3. Errors are enum variants, never String
//! 4. Discount math and ticket rendering are total, so this is the only
//!    error kind the core can produce

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Invalid argument supplied when creating or updating an item.
///
/// Every variant is the same error kind from the caller's point of view:
/// the item is rejected and nothing is added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long (in characters).
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is below the allowed minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value would push an amount past the largest representable decimal.
    #[error("{field} is too large")]
    TooLarge { field: String },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::TooLarge { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
