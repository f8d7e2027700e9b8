//! # Cart API Client
//!
//! The storefront cart endpoints, behind a trait so `CartSync` can run
//! against a real shop or an in-memory fake.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  /cart.js            ──► {items, total_price, item_count, ...}     │
//! │  POST /cart/add.js        {items: [{id, quantity}]}   ──► 2xx or error  │
//! │  POST /cart/change.js     {line, quantity}            ──► 2xx or error  │
//! │  GET  /products/{handle}?view=quick                   ──► HTML fragment │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Write endpoints answer with a cart body too, but it is ignored on purpose:
//! the caller always re-reads `/cart.js` for the authoritative state.

use std::time::Duration;

use async_trait::async_trait;
use aurora_core::validation::validate_handle;
use aurora_core::{AddItemsRequest, CartState, ChangeLineRequest};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::debug;
use url::Url;

use crate::config::StorefrontConfig;
use crate::error::CartResult;

// =============================================================================
// Cart API Trait
// =============================================================================

/// The remote cart, as seen by [`CartSync`](crate::sync::CartSync).
///
/// Any non-2xx answer must surface as an error; implementations never retry.
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Reads the current cart.
    async fn get_cart(&self) -> CartResult<CartState>;

    /// Appends items to the cart.
    async fn add_items(&self, request: &AddItemsRequest) -> CartResult<()>;

    /// Sets the quantity of one line (0 removes it).
    async fn change_line(&self, request: &ChangeLineRequest) -> CartResult<()>;

    /// Fetches the quick-view HTML fragment for a product.
    async fn quick_view(&self, handle: &str) -> CartResult<String>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// [`CartApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpCartApi {
    client: reqwest::Client,
    read_url: Url,
    add_url: Url,
    change_url: Url,
    quick_view_base: Url,
    quick_view_name: String,
}

impl HttpCartApi {
    /// Builds a client from the storefront configuration.
    pub fn new(config: &StorefrontConfig) -> CartResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.cart.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        // Url::join replaces the last segment unless the base ends in '/'
        let mut prefix = config.quick_view.path_prefix.clone();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }

        Ok(HttpCartApi {
            client: builder.build()?,
            read_url: config.endpoint(&config.cart.read_path)?,
            add_url: config.endpoint(&config.cart.add_path)?,
            change_url: config.endpoint(&config.cart.change_path)?,
            quick_view_base: config.endpoint(&prefix)?,
            quick_view_name: config.quick_view.view.clone(),
        })
    }

    /// URL of a product's quick-view fragment.
    fn quick_view_url(&self, handle: &str) -> CartResult<Url> {
        let mut url = self.quick_view_base.join(handle)?;
        url.query_pairs_mut().append_pair("view", &self.quick_view_name);
        Ok(url)
    }
}

#[async_trait]
impl CartApi for HttpCartApi {
    async fn get_cart(&self) -> CartResult<CartState> {
        debug!(url = %self.read_url, "GET cart");
        let cart = self
            .client
            .get(self.read_url.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<CartState>()
            .await?;
        Ok(cart)
    }

    async fn add_items(&self, request: &AddItemsRequest) -> CartResult<()> {
        debug!(url = %self.add_url, items = request.items.len(), "POST add");
        self.client
            .post(self.add_url.clone())
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn change_line(&self, request: &ChangeLineRequest) -> CartResult<()> {
        debug!(url = %self.change_url, line = request.line, quantity = request.quantity, "POST change");
        self.client
            .post(self.change_url.clone())
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn quick_view(&self, handle: &str) -> CartResult<String> {
        validate_handle(handle)?;
        let url = self.quick_view_url(handle.trim())?;
        debug!(url = %url, "GET quick view");
        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(html)
    }
}
