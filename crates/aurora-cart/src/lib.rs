//! # aurora-cart: Cart Sync Client for Aurora Storefront
//!
//! Keeps the theme's view of the shopping cart consistent with the
//! storefront's cart API and tells the UI when something changed.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Sync Architecture                           │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  CartSync (one per storefront session)           │  │
//! │  │                                                                  │  │
//! │  │  Built by the composition root, shared as Arc<CartSync>          │  │
//! │  │  Owns the only CartState; replaced only by fetch_cart            │  │
//! │  └───────────┬──────────────────────────────────┬───────────────────┘  │
//! │              │                                  │                       │
//! │              ▼                                  ▼                       │
//! │  ┌────────────────────────┐        ┌────────────────────────────┐      │
//! │  │  CartApi (trait)       │        │  CartEventSink (trait)     │      │
//! │  │                        │        │                            │      │
//! │  │  HttpCartApi: reqwest  │        │  cart_updated              │      │
//! │  │  GET  /cart.js         │        │  show_cart                 │      │
//! │  │  POST /cart/add.js     │        │  mutation_failed           │      │
//! │  │  POST /cart/change.js  │        │                            │      │
//! │  └────────────────────────┘        └────────────────────────────┘      │
//! │                                                                         │
//! │  SUPPORT:                                                              │
//! │  • StorefrontConfig - TOML file + AURORA_* environment overrides       │
//! │  • Debouncer - collapses bursts of UI calls (quantity steppers)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`api`] - `CartApi` trait and the HTTP implementation
//! - [`config`] - Storefront configuration (base URL, endpoints, money format)
//! - [`debounce`] - Tokio-based debouncer
//! - [`error`] - Cart error types
//! - [`events`] - Observer trait and event payloads
//! - [`sync`] - `CartSync` itself
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aurora_cart::{CartSync, ChannelSink, StorefrontConfig};
//!
//! # async fn run() -> aurora_cart::CartResult<()> {
//! let config = StorefrontConfig::load_or_default(None);
//! let events = ChannelSink::new(16);
//! let mut rx = events.subscribe();
//!
//! let cart = Arc::new(CartSync::from_config(&config)?.with_sink(Arc::new(events)));
//! cart.fetch_cart().await;
//!
//! if cart.add_item(39897499729985, 1).await {
//!     println!("Cart total: {}", cart.formatted_total().await);
//! }
//! while let Ok(event) = rx.try_recv() {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod sync;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{CartApi, HttpCartApi};
pub use config::{CartSettings, QuickViewSettings, StoreSettings, StorefrontConfig};
pub use debounce::Debouncer;
pub use error::{CartError, CartResult};
pub use events::{CartEvent, CartEventSink, CartOperation, ChannelSink, MutationFailure, NoOpSink};
pub use sync::{CartSync, CartSyncStatus};
