//! # Cart Events
//!
//! How `CartSync` talks to the UI layer.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CartEventSink                                   │
//! │                                                                         │
//! │  fetch_cart ok ─────────────► cart_updated(&CartState)                  │
//! │                               • badge counters, drawer contents         │
//! │                                                                         │
//! │  add_item ok ───────────────► show_cart()                               │
//! │                               • UI owns open/closed; this is an intent  │
//! │                                                                         │
//! │  add_item / update fails ───► mutation_failed(&MutationFailure)         │
//! │                               • alert_user = true only for adds         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sinks are called synchronously from the task that finished the request,
//! and `cart_updated` runs while the cart state is locked. They must be fast
//! and idempotent; there is no queue and no backpressure.

use std::fmt;

use aurora_core::CartState;
use tokio::sync::broadcast;
use tracing::trace;

// =============================================================================
// Failure Payload
// =============================================================================

/// Which write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    /// `POST /cart/add.js`
    Add,
    /// `POST /cart/change.js`
    UpdateQuantity,
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add"),
            CartOperation::UpdateQuantity => write!(f, "update_quantity"),
        }
    }
}

/// A failed cart write, handed to the UI to decide how loudly to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationFailure {
    /// Which write failed.
    pub operation: CartOperation,

    /// Technical description for logs and developer tools.
    pub message: String,

    /// Whether the shopper should see a blocking alert.
    pub alert_user: bool,
}

impl MutationFailure {
    /// Message shown to shoppers when adding to cart fails.
    pub const ADD_TO_CART_ALERT: &'static str =
        "Sorry, there was an error adding this item to your cart.";

    /// Failure of an add; shoppers are alerted.
    pub fn add(message: impl Into<String>) -> Self {
        MutationFailure {
            operation: CartOperation::Add,
            message: message.into(),
            alert_user: true,
        }
    }

    /// Failure of a quantity change; logged and reported, no alert.
    pub fn update_quantity(message: impl Into<String>) -> Self {
        MutationFailure {
            operation: CartOperation::UpdateQuantity,
            message: message.into(),
            alert_user: false,
        }
    }

    /// Text for the shopper, if any should be shown.
    pub fn user_message(&self) -> Option<&'static str> {
        match (self.alert_user, self.operation) {
            (true, CartOperation::Add) => Some(Self::ADD_TO_CART_ALERT),
            _ => None,
        }
    }
}

// =============================================================================
// Event Sink Trait
// =============================================================================

/// Receiver of cart notifications (implemented by the UI layer).
pub trait CartEventSink: Send + Sync {
    /// The cart was re-read from the server.
    fn cart_updated(&self, cart: &CartState);

    /// An add succeeded; the cart drawer should open.
    fn show_cart(&self);

    /// A cart write failed.
    fn mutation_failed(&self, failure: &MutationFailure);
}

/// No-op sink for headless use and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSink;

impl CartEventSink for NoOpSink {
    fn cart_updated(&self, _cart: &CartState) {}
    fn show_cart(&self) {}
    fn mutation_failed(&self, _failure: &MutationFailure) {}
}

// =============================================================================
// Channel Sink
// =============================================================================

/// Cart notification as a value, for async consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    Updated(CartState),
    ShowCart,
    MutationFailed(MutationFailure),
}

/// Forwards every notification into a `tokio::sync::broadcast` channel.
///
/// Lagging receivers lose the oldest events; since every `Updated` carries
/// the full cart, only the newest one matters to a badge or drawer.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: broadcast::Sender<CartEvent>,
}

impl ChannelSink {
    /// Creates a sink with room for `capacity` unread events per receiver.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        ChannelSink { tx }
    }

    /// Adds a receiver that sees every event sent after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.tx.subscribe()
    }

    fn send(&self, event: CartEvent) {
        // No receivers is fine: nobody is listening yet.
        if self.tx.send(event).is_err() {
            trace!("Cart event dropped, no receivers");
        }
    }
}

impl CartEventSink for ChannelSink {
    fn cart_updated(&self, cart: &CartState) {
        self.send(CartEvent::Updated(cart.clone()));
    }

    fn show_cart(&self) {
        self.send(CartEvent::ShowCart);
    }

    fn mutation_failed(&self, failure: &MutationFailure) {
        self.send(CartEvent::MutationFailed(failure.clone()));
    }
}
