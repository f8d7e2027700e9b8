//! # Error Types
//!
//! Domain-specific error types for aurora-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aurora-core errors (this file)                                        │
//! │  ├── FormatError      - Money template has no usable placeholder       │
//! │  └── ValidationError  - Cart input rejected before any request         │
//! │                                                                         │
//! │  aurora-cart errors (separate crate)                                   │
//! │  └── CartError        - Network, HTTP status, config failures          │
//! │                                                                         │
//! │  Flow: ValidationError/FormatError → CartError → UI sink               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (template, field name, value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Format Error
// =============================================================================

/// Money template errors.
///
/// A template that cannot be formatted is a configuration bug in the theme,
/// so formatting fails fast instead of returning a half-substituted string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The template contains no `{{ name }}` placeholder at all.
    ///
    /// ## When This Occurs
    /// - Theme setting left as a bare currency symbol, e.g. `"$"`
    /// - Braces mistyped: `"${amount}"`
    #[error("Money format '{template}' has no {{{{amount}}}} placeholder")]
    MissingPlaceholder { template: String },

    /// The first placeholder names a variant we do not know.
    #[error("Unknown money format placeholder '{name}' in '{template}'")]
    UnknownPlaceholder { name: String, template: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before a cart request is sent, so nothing reaches the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., product handle with a slash in it).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
