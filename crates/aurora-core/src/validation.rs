//! # Validation Module
//!
//! Input checks run before a cart request leaves the client.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Theme markup                                                 │
//! │  └── quantity inputs with min/max attributes                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: CartSync (Rust)                                              │
//! │  └── THIS MODULE: reject requests the server would refuse anyway       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Storefront cart API                                          │
//! │  └── stock, variant availability, line existence (authoritative)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only shape is checked here. Whether a variant exists or a line is still
//! present is the server's call.

use crate::error::ValidationError;
use crate::types::VariantId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a variant identifier.
///
/// ## Example
/// ```rust
/// use aurora_core::validation::validate_variant_id;
///
/// assert!(validate_variant_id(39897499729985).is_ok());
/// assert!(validate_variant_id(0).is_err());
/// ```
pub fn validate_variant_id(variant_id: VariantId) -> ValidationResult<()> {
    if variant_id == 0 {
        return Err(ValidationError::Required {
            field: "variant_id".to_string(),
        });
    }
    Ok(())
}

/// Validates a quantity being added to the cart.
///
/// Zero is refused; there is no upper bound. Stock and per-line limits are
/// enforced by the storefront.
pub fn validate_add_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a 1-based cart line number.
///
/// ## Example
/// ```rust
/// use aurora_core::validation::validate_line;
///
/// assert!(validate_line(1).is_ok());
/// assert!(validate_line(0).is_err()); // lines start at 1
/// ```
pub fn validate_line(line: usize) -> ValidationResult<()> {
    if line == 0 {
        return Err(ValidationError::MustBePositive {
            field: "line".to_string(),
        });
    }
    Ok(())
}

/// Validates a product handle used in a quick-view URL.
///
/// Handles are lowercase slugs; anything that could escape the
/// `/products/` path segment is rejected.
pub fn validate_handle(handle: &str) -> ValidationResult<()> {
    let handle = handle.trim();

    if handle.is_empty() {
        return Err(ValidationError::Required {
            field: "handle".to_string(),
        });
    }

    if !handle
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "handle".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
