//! # Domain Types
//!
//! Cart types exchanged with the storefront cart API.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Wire Types                                 │
//! │                                                                         │
//! │  GET /cart.js                      POST /cart/add.js                    │
//! │  ┌─────────────────┐               ┌─────────────────┐                  │
//! │  │   CartState     │               │ AddItemsRequest │                  │
//! │  │  ─────────────  │               │  ─────────────  │                  │
//! │  │  items[] ───────┼──► LineItem   │  items[] ───────┼──► AddItem       │
//! │  │  total_price    │               │                 │    {id, qty}     │
//! │  │  item_count     │               └─────────────────┘                  │
//! │  └─────────────────┘                                                    │
//! │                                    POST /cart/change.js                 │
//! │                                    ┌─────────────────┐                  │
//! │                                    │ChangeLineRequest│                  │
//! │                                    │  line, quantity │                  │
//! │                                    └─────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Server Is the Source of Truth
//! `CartState` is only ever a copy of the last successful `/cart.js` response.
//! Nothing here computes totals; `total_price` and `item_count` are whatever
//! the server said, discounts included.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::money::Money;

/// Storefront variant identifier (the `id` sent to `/cart/add.js`).
pub type VariantId = u64;

// =============================================================================
// Line Item
// =============================================================================

/// One line of the cart as reported by the server.
///
/// The record's full shape belongs to the cart API. The fields every theme
/// reads are typed; anything else the server sends (images, options,
/// discounts, properties) is preserved untouched in `extra`, so two line
/// items compare equal only when the server sent the same record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable line key (`"39897499729985:abc123"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The variant this line is for.
    #[serde(default)]
    pub variant_id: VariantId,

    /// Quantity on this line.
    #[serde(default)]
    pub quantity: u32,

    /// Unit price in cents.
    #[serde(default)]
    pub price: Money,

    /// Line total in cents after line-level discounts.
    #[serde(default)]
    pub line_price: Money,

    /// Product title for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Every other field of the server record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// Cart State
// =============================================================================

/// Local mirror of the server-side cart.
///
/// ## Lifecycle
/// ```text
/// CartState::default()  (empty, before the first fetch)
///        │
///        ▼
/// GET /cart.js ok ──► replaced wholesale ──► observers notified
///        │
///        ▼
/// GET /cart.js fails ──► left as-is (stale but available)
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    /// Line items in server order.
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Cart total in cents, as computed by the server.
    #[serde(default)]
    pub total_price: Money,

    /// Total quantity across all lines.
    #[serde(default)]
    pub item_count: u32,
}

impl CartState {
    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the line at a 1-based line number, as `/cart/change.js` counts them.
    pub fn line(&self, line: usize) -> Option<&LineItem> {
        line.checked_sub(1).and_then(|idx| self.items.get(idx))
    }

    /// Returns the number of lines (not the total quantity).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Request Payloads
// =============================================================================

/// One entry of an add-to-cart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    /// Variant to add.
    pub id: VariantId,
    /// How many to add.
    pub quantity: u32,
}

/// Body of `POST /cart/add.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemsRequest {
    pub items: Vec<AddItem>,
}

impl AddItemsRequest {
    /// A request adding a single variant.
    pub fn single(variant_id: VariantId, quantity: u32) -> Self {
        AddItemsRequest {
            items: vec![AddItem {
                id: variant_id,
                quantity,
            }],
        }
    }
}

/// Body of `POST /cart/change.js`.
///
/// `line` is 1-based; a `quantity` of 0 removes the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLineRequest {
    pub line: usize,
    pub quantity: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================
