//! # aurora-core: Pure Storefront Logic
//!
//! This crate holds the storefront logic that needs no network: money
//! formatting for display, the cart API's wire types, and input validation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Aurora Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Theme UI (badges, drawer)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartEventSink                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               aurora-cart (CartSync, HttpCartApi)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aurora-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌─────────────┐              │   │
//! │  │   │   types   │  │    money    │  │ validation  │              │   │
//! │  │   │ CartState │  │ Money       │  │ quantities  │              │   │
//! │  │   │ LineItem  │  │ MoneyFormat │  │ lines       │              │   │
//! │  │   └───────────┘  └─────────────┘  └─────────────┘              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Cart wire types (CartState, LineItem, request bodies)
//! - [`money`] - Money type and money-format templates
//! - [`error`] - Domain error types
//! - [`validation`] - Cart input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use aurora_core::{format_money, Money, MoneyFormat};
//!
//! let format = MoneyFormat::parse("{{amount_with_comma_separator}} €").unwrap();
//! assert_eq!(Money::from_cents(1999).format_with(&format), "19,99 €");
//!
//! assert_eq!(format_money(1_000_000, "${{amount}}").unwrap(), "$10,000.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{FormatError, ValidationError};
pub use money::{format_money, Amount, FormatVariant, Money, MoneyFormat};
pub use types::*;
