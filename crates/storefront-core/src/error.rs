//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Authentication, ordering and selection failures │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-cli errors (shell crate)                                   │
//! │  └── ShellError       - Terminal I/O and configuration                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ShellError → message on stdout    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty search result is not an error. Filters return an empty `Vec`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is recoverable. The shell reports it and carries on (or
/// ends the session cleanly, for authentication).
#[derive(Debug, Error)]
pub enum CoreError {
    /// No registered user matches the credential pair.
    #[error("Invalid login or password for '{login}'")]
    AuthenticationFailed { login: String },

    /// An order was requested for a user handle the registry does not hold.
    ///
    /// ## When This Occurs
    /// - The `User` was constructed but never passed to `add_user`
    /// - The handle belongs to a different `Store`
    #[error("User not found: {0}")]
    UnknownUser(String),

    /// The selection does not resolve to any orderable product.
    #[error("Invalid selection: {reason}")]
    InvalidSelection { reason: String },

    /// Quantity is zero or negative.
    #[error("Invalid quantity: {requested}")]
    InvalidQuantity { requested: i64 },

    /// The order total does not fit in the money representation.
    #[error("Order total overflows")]
    TotalOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when a product, user or typed value fails a field rule, before
/// any state changes.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. "12.345" as a price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
