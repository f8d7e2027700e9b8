//! # Cart Sync
//!
//! Keeps a local copy of the server cart and routes cart writes through the
//! storefront API.
//!
//! ## Reconciliation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Write, Then Re-read                             │
//! │                                                                         │
//! │  add_item(variant, qty)                                                 │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  POST /cart/add.js ──── non-2xx ──► mutation_failed(alert) ──► false    │
//! │      │ 2xx (body ignored)                                               │
//! │      ▼                                                                  │
//! │  GET /cart.js ──── ok ──► state replaced ──► cart_updated(&state)       │
//! │      │         └── err ─► logged, state kept                            │
//! │      ▼                                                                  │
//! │  show_cart() ──► true                                                   │
//! │                                                                         │
//! │  The server computes totals, discounts and counts. The client never    │
//! │  patches its copy: it only ever swaps in the latest full response.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! A `CartSync` is built once by the composition root and shared as
//! `Arc<CartSync>` with whatever needs the cart. There is no global instance.

use std::sync::Arc;

use aurora_core::validation::{validate_add_quantity, validate_line, validate_variant_id};
use aurora_core::{AddItemsRequest, CartState, ChangeLineRequest, Money, MoneyFormat, VariantId};
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, error, info, warn};

use crate::api::{CartApi, HttpCartApi};
use crate::config::StorefrontConfig;
use crate::error::{CartError, CartResult};
use crate::events::{CartEventSink, MutationFailure};

// =============================================================================
// Sync Status
// =============================================================================

/// Diagnostics about the last cart reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSyncStatus {
    /// When the cart was last read successfully.
    pub last_synced: Option<DateTime<Utc>>,

    /// Last error message from any cart request (cleared by a successful read).
    pub last_error: Option<String>,

    /// Number of successful cart reads.
    pub fetch_count: u64,
}

// =============================================================================
// Cart Sync
// =============================================================================

/// Local mirror of the storefront cart.
pub struct CartSync {
    /// Remote cart endpoints.
    api: Arc<dyn CartApi>,

    /// Last successful server response. Written only by `fetch_cart`.
    state: RwLock<CartState>,

    /// Read diagnostics.
    status: RwLock<CartSyncStatus>,

    /// UI observers.
    sinks: RwLock<Vec<Arc<dyn CartEventSink>>>,

    /// Held across a write and its refetch when mutations are serialized.
    mutation_lock: Option<Mutex<()>>,

    /// Display format for prices.
    money_format: MoneyFormat,
}

impl CartSync {
    /// Creates a cart sync over any [`CartApi`] with default display format
    /// and unserialized mutations.
    pub fn new(api: Arc<dyn CartApi>) -> Self {
        CartSync {
            api,
            state: RwLock::new(CartState::default()),
            status: RwLock::new(CartSyncStatus::default()),
            sinks: RwLock::new(Vec::new()),
            mutation_lock: None,
            money_format: MoneyFormat::default(),
        }
    }

    /// Creates a cart sync talking HTTP to the configured storefront.
    pub fn from_config(config: &StorefrontConfig) -> CartResult<Self> {
        config.validate()?;
        let api = HttpCartApi::new(config)?;
        Ok(Self::new(Arc::new(api))
            .with_money_format(config.store.money_format.clone())
            .with_serialized_mutations(config.cart.serialize_mutations))
    }

    /// Sets the display format used by [`formatted_total`](Self::formatted_total).
    pub fn with_money_format(mut self, format: MoneyFormat) -> Self {
        self.money_format = format;
        self
    }

    /// Runs each write and its refetch one at a time when `enabled`.
    pub fn with_serialized_mutations(mut self, enabled: bool) -> Self {
        self.mutation_lock = enabled.then(|| Mutex::new(()));
        self
    }

    /// Registers an observer at construction time.
    pub fn with_sink(mut self, sink: Arc<dyn CartEventSink>) -> Self {
        self.sinks.get_mut().push(sink);
        self
    }

    /// Registers an observer.
    pub async fn subscribe(&self, sink: Arc<dyn CartEventSink>) {
        self.sinks.write().await.push(sink);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns a snapshot of the current cart.
    pub async fn state(&self) -> CartState {
        self.state.read().await.clone()
    }

    /// Returns read diagnostics.
    pub async fn status(&self) -> CartSyncStatus {
        self.status.read().await.clone()
    }

    /// Returns the display format.
    pub fn money_format(&self) -> &MoneyFormat {
        &self.money_format
    }

    /// Formats any amount with the configured display format.
    pub fn format_price(&self, amount: Money) -> String {
        amount.format_with(&self.money_format)
    }

    /// Current cart total, formatted for display.
    pub async fn formatted_total(&self) -> String {
        let total = self.state.read().await.total_price;
        self.format_price(total)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Re-reads the cart from the server.
    ///
    /// On success the local state is replaced wholesale, observers are
    /// notified, and the new state is returned. On failure the error is
    /// logged, the previous state stays in place, and `None` is returned.
    pub async fn fetch_cart(&self) -> Option<CartState> {
        match self.api.get_cart().await {
            Ok(cart) => {
                let sinks = self.sinks().await;

                // Held until every sink has seen this cart, so concurrent
                // fetches notify in the order they were stored.
                let mut state = self.state.write().await;
                *state = cart.clone();
                {
                    let mut status = self.status.write().await;
                    status.last_synced = Some(Utc::now());
                    status.last_error = None;
                    status.fetch_count += 1;
                }

                debug!(
                    lines = cart.line_count(),
                    item_count = cart.item_count,
                    total = %cart.total_price,
                    "Cart fetched"
                );

                for sink in &sinks {
                    sink.cart_updated(&state);
                }
                drop(state);
                Some(cart)
            }
            Err(e) => {
                error!(error = %e, "Error fetching cart");
                self.record_error(&e).await;
                None
            }
        }
    }

    /// Adds one unit of a variant to the cart.
    pub async fn add_one(&self, variant_id: VariantId) -> bool {
        self.add_item(variant_id, 1).await
    }

    /// Adds a variant to the cart.
    ///
    /// Returns `true` once the server accepted the add; the cart is then
    /// re-read and observers are asked to show it. A failed refetch does not
    /// turn the result into `false`, the add itself went through.
    ///
    /// On failure observers receive a [`MutationFailure`] with `alert_user`
    /// set, and the local cart is untouched.
    pub async fn add_item(&self, variant_id: VariantId, quantity: u32) -> bool {
        let _guard = self.lock_mutations().await;

        match self.try_add(variant_id, quantity).await {
            Ok(()) => {
                info!(variant_id, quantity, "Added to cart");
                self.fetch_cart().await;
                for sink in self.sinks().await {
                    sink.show_cart();
                }
                true
            }
            Err(e) => {
                error!(variant_id, quantity, error = %e, "Error adding to cart");
                self.record_error(&e).await;
                let failure = MutationFailure::add(e.to_string());
                for sink in self.sinks().await {
                    sink.mutation_failed(&failure);
                }
                false
            }
        }
    }

    /// Sets the quantity of a cart line (1-based; 0 removes the line).
    ///
    /// Returns `true` once the server accepted the change; the cart is then
    /// re-read. On failure observers receive a [`MutationFailure`] without
    /// the alert flag.
    pub async fn update_item_quantity(&self, line: usize, quantity: u32) -> bool {
        let _guard = self.lock_mutations().await;

        match self.try_change(line, quantity).await {
            Ok(()) => {
                info!(line, quantity, "Cart line updated");
                self.fetch_cart().await;
                true
            }
            Err(e) => {
                error!(line, quantity, error = %e, "Error updating cart");
                self.record_error(&e).await;
                let failure = MutationFailure::update_quantity(e.to_string());
                for sink in self.sinks().await {
                    sink.mutation_failed(&failure);
                }
                false
            }
        }
    }

    /// Loads a product's quick-view fragment. Failures are logged and yield `None`.
    pub async fn quick_view(&self, handle: &str) -> Option<String> {
        match self.api.quick_view(handle).await {
            Ok(html) => Some(html),
            Err(e) => {
                warn!(handle, error = %e, "Error loading quick view");
                None
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn try_add(&self, variant_id: VariantId, quantity: u32) -> CartResult<()> {
        validate_variant_id(variant_id)?;
        validate_add_quantity(quantity)?;

        self.api
            .add_items(&AddItemsRequest::single(variant_id, quantity))
            .await
            .map_err(|e| CartError::AddToCart {
                variant_id,
                reason: e.to_string(),
            })
    }

    async fn try_change(&self, line: usize, quantity: u32) -> CartResult<()> {
        validate_line(line)?;

        self.api
            .change_line(&ChangeLineRequest { line, quantity })
            .await
            .map_err(|e| CartError::UpdateCart {
                line,
                reason: e.to_string(),
            })
    }

    async fn lock_mutations(&self) -> Option<MutexGuard<'_, ()>> {
        match &self.mutation_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        }
    }

    /// Snapshot of the sinks so none is called with the sinks lock held.
    async fn sinks(&self) -> Vec<Arc<dyn CartEventSink>> {
        self.sinks.read().await.clone()
    }

    async fn record_error(&self, err: &CartError) {
        self.status.write().await.last_error = Some(err.to_string());
    }
}

impl std::fmt::Debug for CartSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartSync")
            .field("money_format", &self.money_format)
            .field("serialize_mutations", &self.mutation_lock.is_some())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use aurora_core::LineItem;
    use tokio::sync::broadcast::error::TryRecvError;

    use crate::events::{CartEvent, CartOperation, ChannelSink};

    const UNIT_PRICE: i64 = 1999;

    /// In-memory storefront: writes change a server-side cart that reads return.
    #[derive(Default)]
    struct FakeCartApi {
        cart: std::sync::Mutex<CartState>,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
        get_calls: AtomicUsize,
        write_calls: AtomicUsize,
    }

    impl FakeCartApi {
        fn server_cart(&self) -> CartState {
            self.cart.lock().unwrap().clone()
        }

        fn recompute(cart: &mut CartState) {
            let mut total = 0i64;
            for item in &mut cart.items {
                let line_cents = item.price.cents() * i64::from(item.quantity);
                item.line_price = Money::from_cents(line_cents);
                total += line_cents;
            }
            cart.item_count = cart.items.iter().map(|i| i.quantity).sum();
            cart.total_price = Money::from_cents(total);
        }
    }

    #[async_trait]
    impl CartApi for FakeCartApi {
        async fn get_cart(&self) -> CartResult<CartState> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(CartError::Network("connection reset".into()));
            }
            Ok(self.server_cart())
        }

        async fn add_items(&self, request: &AddItemsRequest) -> CartResult<()> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(CartError::Http { status: 422 });
            }
            let mut cart = self.cart.lock().unwrap();
            for add in &request.items {
                match cart.items.iter_mut().find(|i| i.variant_id == add.id) {
                    Some(item) => item.quantity += add.quantity,
                    None => cart.items.push(LineItem {
                        variant_id: add.id,
                        quantity: add.quantity,
                        price: Money::from_cents(UNIT_PRICE),
                        ..Default::default()
                    }),
                }
            }
            Self::recompute(&mut cart);
            Ok(())
        }

        async fn change_line(&self, request: &ChangeLineRequest) -> CartResult<()> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(CartError::Http { status: 422 });
            }
            let mut cart = self.cart.lock().unwrap();
            let idx = request.line - 1;
            if idx >= cart.items.len() {
                return Err(CartError::Http { status: 400 });
            }
            if request.quantity == 0 {
                cart.items.remove(idx);
            } else {
                cart.items[idx].quantity = request.quantity;
            }
            Self::recompute(&mut cart);
            Ok(())
        }

        async fn quick_view(&self, handle: &str) -> CartResult<String> {
            if handle == "missing" {
                return Err(CartError::Http { status: 404 });
            }
            Ok(format!("<div class=\"quick-view\">{handle}</div>"))
        }
    }

    fn setup() -> (Arc<FakeCartApi>, CartSync, tokio::sync::broadcast::Receiver<CartEvent>) {
        let api = Arc::new(FakeCartApi::default());
        let sink = ChannelSink::new(64);
        let rx = sink.subscribe();
        let sync = CartSync::new(api.clone()).with_sink(Arc::new(sink));
        (api, sync, rx)
    }

    fn drain(rx: &mut tokio::sync::broadcast::Receiver<CartEvent>) -> Vec<CartEvent> {
        let mut events = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return events,
                Err(TryRecvError::Lagged(_)) => continue,
            }
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let (_api, sync, _rx) = setup();
        assert_eq!(sync.state().await, CartState::default());
        assert_eq!(sync.status().await.fetch_count, 0);
    }

    #[tokio::test]
    async fn test_add_item_reconciles_with_server() {
        let (api, sync, mut rx) = setup();

        assert!(sync.add_item(111, 2).await);

        let state = sync.state().await;
        assert_eq!(state, api.server_cart());
        assert_eq!(state.item_count, 2);
        assert_eq!(state.total_price, Money::from_cents(2 * UNIT_PRICE));
        assert_eq!(api.get_calls.load(Ordering::SeqCst), 1);

        let events = drain(&mut rx);
        assert_eq!(events, vec![CartEvent::Updated(state), CartEvent::ShowCart]);
    }

    #[tokio::test]
    async fn test_add_one_defaults_to_single_unit() {
        let (_api, sync, _rx) = setup();
        assert!(sync.add_one(111).await);
        assert!(sync.add_one(111).await);
        assert_eq!(sync.state().await.item_count, 2);
        assert_eq!(sync.state().await.line_count(), 1);
    }

    #[tokio::test]
    async fn test_add_item_failure_leaves_state_and_alerts() {
        let (api, sync, mut rx) = setup();
        assert!(sync.add_item(111, 1).await);
        let before = sync.state().await;
        drain(&mut rx);

        api.fail_writes.store(true, Ordering::SeqCst);
        assert!(!sync.add_item(222, 1).await);

        assert_eq!(sync.state().await, before);
        // No refetch after a failed write
        assert_eq!(api.get_calls.load(Ordering::SeqCst), 1);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        match &events[0] {
            CartEvent::MutationFailed(failure) => {
                assert_eq!(failure.operation, CartOperation::Add);
                assert!(failure.alert_user);
                assert!(failure.message.contains("422"));
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(sync.status().await.last_error.is_some());
    }

    #[tokio::test]
    async fn test_add_item_rejects_invalid_input_without_request() {
        let (api, sync, mut rx) = setup();

        assert!(!sync.add_item(111, 0).await);
        assert!(!sync.add_item(0, 1).await);

        assert_eq!(api.write_calls.load(Ordering::SeqCst), 0);
        let events = drain(&mut rx);
        assert_eq!(events.len(), 2);
        assert!(events
            .iter()
            .all(|e| matches!(e, CartEvent::MutationFailed(f) if f.alert_user)));
    }

    #[tokio::test]
    async fn test_add_succeeds_even_if_refetch_fails() {
        let (api, sync, mut rx) = setup();
        api.fail_reads.store(true, Ordering::SeqCst);

        assert!(sync.add_item(111, 1).await);

        // Stale but available: local copy did not change
        assert_eq!(sync.state().await, CartState::default());
        assert_eq!(api.server_cart().item_count, 1);
        assert_eq!(drain(&mut rx), vec![CartEvent::ShowCart]);
    }

    #[tokio::test]
    async fn test_fetch_cart_is_idempotent() {
        let (api, sync, _rx) = setup();
        api.add_items(&AddItemsRequest::single(111, 3)).await.unwrap();

        let first = sync.fetch_cart().await.unwrap();
        let second = sync.fetch_cart().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(sync.status().await.fetch_count, 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_state() {
        let (api, sync, mut rx) = setup();
        api.add_items(&AddItemsRequest::single(111, 1)).await.unwrap();
        let good = sync.fetch_cart().await.unwrap();
        drain(&mut rx);

        api.fail_reads.store(true, Ordering::SeqCst);
        assert!(sync.fetch_cart().await.is_none());

        assert_eq!(sync.state().await, good);
        assert!(drain(&mut rx).is_empty());

        let status = sync.status().await;
        assert_eq!(status.fetch_count, 1);
        assert!(status.last_synced.is_some());
        assert!(status.last_error.unwrap().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_update_item_quantity() {
        let (api, sync, mut rx) = setup();
        assert!(sync.add_item(111, 1).await);
        assert!(sync.add_item(222, 1).await);
        drain(&mut rx);

        assert!(sync.update_item_quantity(1, 5).await);
        assert_eq!(sync.state().await.item_count, 6);

        // Quantity 0 removes the line
        assert!(sync.update_item_quantity(1, 0).await);
        let state = sync.state().await;
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.line(1).unwrap().variant_id, 222);
        assert_eq!(state, api.server_cart());

        // Quantity changes never open the cart
        let events = drain(&mut rx);
        assert!(events.iter().all(|e| matches!(e, CartEvent::Updated(_))));
    }

    #[tokio::test]
    async fn test_update_failure_reports_without_alert() {
        let (_api, sync, mut rx) = setup();
        assert!(sync.add_item(111, 1).await);
        let before = sync.state().await;
        drain(&mut rx);

        // Line 3 does not exist on the server
        assert!(!sync.update_item_quantity(3, 1).await);
        assert!(!sync.update_item_quantity(0, 1).await);

        assert_eq!(sync.state().await, before);
        let events = drain(&mut rx);
        assert_eq!(events.len(), 2);
        for event in events {
            match event {
                CartEvent::MutationFailed(failure) => {
                    assert_eq!(failure.operation, CartOperation::UpdateQuantity);
                    assert!(!failure.alert_user);
                    assert_eq!(failure.user_message(), None);
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_serialized_mutations_refetch_their_own_write() {
        let api = Arc::new(FakeCartApi::default());
        let sink = ChannelSink::new(64);
        let mut rx = sink.subscribe();
        let sync = CartSync::new(api.clone())
            .with_serialized_mutations(true)
            .with_sink(Arc::new(sink));

        let (a, b) = tokio::join!(sync.add_item(111, 1), sync.add_item(222, 1));
        assert!(a && b);

        let counts: Vec<u32> = drain(&mut rx)
            .into_iter()
            .filter_map(|e| match e {
                CartEvent::Updated(cart) => Some(cart.item_count),
                _ => None,
            })
            .collect();
        assert_eq!(counts, vec![1, 2]);
        assert_eq!(sync.state().await.item_count, 2);
    }

    #[tokio::test]
    async fn test_unserialized_mutations_converge_on_last_read() {
        let (api, sync, _rx) = setup();

        let (a, b) = tokio::join!(sync.add_item(111, 1), sync.add_item(222, 1));
        assert!(a && b);

        assert_eq!(sync.state().await, api.server_cart());
        assert_eq!(sync.state().await.item_count, 2);
    }

    #[tokio::test]
    async fn test_formatted_total_uses_configured_format() {
        let api = Arc::new(FakeCartApi::default());
        let format = MoneyFormat::parse("{{amount_with_comma_separator}} €").unwrap();
        let sync = CartSync::new(api.clone()).with_money_format(format);

        assert_eq!(sync.formatted_total().await, "0,00 €");
        for _ in 0..60 {
            api.add_items(&AddItemsRequest::single(111, 1)).await.unwrap();
        }
        sync.fetch_cart().await;
        // 60 × 19.99 = 1199.40
        assert_eq!(sync.formatted_total().await, "1.199,40 €");
        assert_eq!(sync.format_price(Money::from_cents(5)), "0,05 €");
    }

    #[tokio::test]
    async fn test_late_subscriber_receives_updates() {
        let (_api, sync, _rx) = setup();
        let late = ChannelSink::new(8);
        let mut late_rx = late.subscribe();
        sync.subscribe(Arc::new(late)).await;

        sync.fetch_cart().await;
        assert!(matches!(late_rx.try_recv(), Ok(CartEvent::Updated(_))));
    }

    #[tokio::test]
    async fn test_quick_view() {
        let (_api, sync, _rx) = setup();
        assert_eq!(
            sync.quick_view("linen-shirt").await.as_deref(),
            Some("<div class=\"quick-view\">linen-shirt</div>")
        );
        assert!(sync.quick_view("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_large_quantities_reach_the_server() {
        let (api, sync, _rx) = setup();

        assert!(sync.add_item(111, 1000).await);
        assert!(sync.update_item_quantity(1, 5000).await);

        assert_eq!(api.write_calls.load(Ordering::SeqCst), 2);
        assert_eq!(sync.state().await.item_count, 5000);
    }

    /// Every read answers with a different cart: the n-th read has n items.
    #[derive(Default)]
    struct ShiftingCartApi {
        reads: AtomicU32,
    }

    #[async_trait]
    impl CartApi for ShiftingCartApi {
        async fn get_cart(&self) -> CartResult<CartState> {
            let n = self.reads.fetch_add(1, Ordering::SeqCst) + 1;
            tokio::task::yield_now().await;
            Ok(CartState {
                item_count: n,
                ..Default::default()
            })
        }

        async fn add_items(&self, _request: &AddItemsRequest) -> CartResult<()> {
            Ok(())
        }

        async fn change_line(&self, _request: &ChangeLineRequest) -> CartResult<()> {
            Ok(())
        }

        async fn quick_view(&self, _handle: &str) -> CartResult<String> {
            Ok(String::new())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_fetches_notify_in_storage_order() {
        const FETCHES: usize = 64;
        let sink = ChannelSink::new(FETCHES * 2);
        let mut rx = sink.subscribe();
        let sync = Arc::new(
            CartSync::new(Arc::new(ShiftingCartApi::default())).with_sink(Arc::new(sink)),
        );

        let tasks: Vec<_> = (0..FETCHES)
            .map(|_| {
                let sync = sync.clone();
                tokio::spawn(async move { sync.fetch_cart().await })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().is_some());
        }

        let updates: Vec<CartState> = drain(&mut rx)
            .into_iter()
            .filter_map(|event| match event {
                CartEvent::Updated(cart) => Some(cart),
                _ => None,
            })
            .collect();
        assert_eq!(updates.len(), FETCHES);
        assert_eq!(updates.last(), Some(&sync.state().await));
        assert_eq!(sync.status().await.fetch_count, FETCHES as u64);
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = StorefrontConfig::for_base_url("ftp://shop.example.com");
        assert!(CartSync::from_config(&config).is_err());
    }
}
