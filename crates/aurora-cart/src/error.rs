//! # Cart Error Types
//!
//! Error types for cart sync operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │    Network      │  │     Cart Writes         │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Network        │  │  AddToCart              │ │
//! │  │  InvalidUrl     │  │  Http {status}  │  │  UpdateCart             │ │
//! │  │  ConfigLoad/Save│  │  Decode         │  │  Validation             │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Propagation
//! - Reads: stop inside `CartSync::fetch_cart` (logged, state unchanged)
//! - Writes: become a `false` return plus a `MutationFailure` event
//! - Nothing is retried

use aurora_core::{FormatError, ValidationError};
use thiserror::Error;

/// Result type alias for cart operations.
pub type CartResult<T> = Result<T, CartError>;

/// Cart error type covering every failure the sync client can see.
#[derive(Debug, Error)]
pub enum CartError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid storefront configuration.
    #[error("Invalid storefront configuration: {0}")]
    InvalidConfig(String),

    /// Base URL or endpoint path does not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Network Errors
    // =========================================================================
    /// Request could not be sent or the connection dropped.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("Cart endpoint returned HTTP {status}")]
    Http { status: u16 },

    /// Response body was not the expected JSON.
    #[error("Failed to decode cart response: {0}")]
    Decode(String),

    // =========================================================================
    // Cart Write Errors
    // =========================================================================
    /// Adding a variant to the cart failed.
    #[error("Failed to add variant {variant_id} to cart: {reason}")]
    AddToCart { variant_id: u64, reason: String },

    /// Changing a line's quantity failed.
    #[error("Failed to update cart line {line}: {reason}")]
    UpdateCart { line: usize, reason: String },

    /// Request rejected locally before being sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Money template could not be used.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for CartError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            CartError::Http {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            CartError::Decode(err.to_string())
        } else {
            CartError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CartError {
    fn from(err: serde_json::Error) -> Self {
        CartError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for CartError {
    fn from(err: url::ParseError) -> Self {
        CartError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for CartError {
    fn from(err: std::io::Error) -> Self {
        CartError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CartError {
    fn from(err: toml::de::Error) -> Self {
        CartError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CartError {
    fn from(err: toml::ser::Error) -> Self {
        CartError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl CartError {
    /// Returns true if the request never produced a usable response.
    pub fn is_network_error(&self) -> bool {
        matches!(self, CartError::Network(_) | CartError::Decode(_))
    }

    /// Returns true if the server rejected the request.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            CartError::Http { .. } | CartError::AddToCart { .. } | CartError::UpdateCart { .. }
        )
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CartError::InvalidConfig(_)
                | CartError::InvalidUrl(_)
                | CartError::ConfigLoadFailed(_)
                | CartError::ConfigSaveFailed(_)
                | CartError::Format(_)
        )
    }
}
