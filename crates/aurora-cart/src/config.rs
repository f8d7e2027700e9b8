//! # Storefront Configuration
//!
//! Configuration for the cart sync client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     AURORA_BASE_URL=https://shop.example.com                           │
//! │     AURORA_MONEY_FORMAT="{{amount_with_comma_separator}} €"            │
//! │     AURORA_SERIALIZE_MUTATIONS=true                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/aurora/storefront.toml (Linux)                           │
//! │     ~/Library/Application Support/com.aurora.storefront/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:9292, "${{amount}}", standard cart endpoints      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [store]
//! base_url = "https://aurora-fashion.example.com"
//! money_format = "${{amount}}"
//!
//! [cart]
//! read_path = "/cart.js"
//! add_path = "/cart/add.js"
//! change_path = "/cart/change.js"
//! serialize_mutations = false
//!
//! [quick_view]
//! path_prefix = "/products/"
//! view = "quick"
//! ```

use std::path::PathBuf;

use aurora_core::MoneyFormat;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CartError, CartResult};

// =============================================================================
// Store Settings
// =============================================================================

/// Which storefront to talk to and how it displays prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Origin of the storefront; endpoint paths are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Theme money format used for display.
    #[serde(default)]
    pub money_format: MoneyFormat,
}

fn default_base_url() -> String {
    "http://localhost:9292".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            base_url: default_base_url(),
            money_format: MoneyFormat::default(),
        }
    }
}

// =============================================================================
// Cart Settings
// =============================================================================

/// Cart endpoint paths and sync behavior.
///
/// ## Mutation Ordering
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  serialize_mutations = false (default)                                  │
/// │  ─────────────────────────────────────                                  │
/// │  add(A) ──POST──┐                                                       │
/// │  add(B) ──POST──┼──► GET ──► GET   whichever GET lands last wins        │
/// │                                                                         │
/// │  serialize_mutations = true                                             │
/// │  ──────────────────────────                                             │
/// │  add(A) ──POST──► GET ──┐                                               │
/// │                         └──► add(B) ──POST──► GET                       │
/// │  each refetch reflects its own mutation                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSettings {
    /// Cart state endpoint (GET).
    #[serde(default = "default_read_path")]
    pub read_path: String,

    /// Add-to-cart endpoint (POST).
    #[serde(default = "default_add_path")]
    pub add_path: String,

    /// Line quantity endpoint (POST).
    #[serde(default = "default_change_path")]
    pub change_path: String,

    /// Run each mutation and its refetch one at a time.
    #[serde(default)]
    pub serialize_mutations: bool,

    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_read_path() -> String {
    "/cart.js".to_string()
}

fn default_add_path() -> String {
    "/cart/add.js".to_string()
}

fn default_change_path() -> String {
    "/cart/change.js".to_string()
}

impl Default for CartSettings {
    fn default() -> Self {
        CartSettings {
            read_path: default_read_path(),
            add_path: default_add_path(),
            change_path: default_change_path(),
            serialize_mutations: false,
            request_timeout_secs: None,
        }
    }
}

// =============================================================================
// Quick View Settings
// =============================================================================

/// Where product quick-view fragments are served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickViewSettings {
    /// Path the product handle is appended to.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// Value of the `view` query parameter selecting the fragment template.
    #[serde(default = "default_view")]
    pub view: String,
}

fn default_path_prefix() -> String {
    "/products/".to_string()
}

fn default_view() -> String {
    "quick".to_string()
}

impl Default for QuickViewSettings {
    fn default() -> Self {
        QuickViewSettings {
            path_prefix: default_path_prefix(),
            view: default_view(),
        }
    }
}

// =============================================================================
// Main Storefront Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub cart: CartSettings,

    #[serde(default)]
    pub quick_view: QuickViewSettings,
}

impl StorefrontConfig {
    /// Creates a config pointing at `base_url` with every other value defaulted.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        StorefrontConfig {
            store: StoreSettings {
                base_url: base_url.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CartResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CartResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CartError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CartError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| CartError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CartResult<()> {
        let base = Url::parse(&self.store.base_url)?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(CartError::InvalidUrl(format!(
                "Base URL must start with http:// or https://, got: {}",
                self.store.base_url
            )));
        }

        for (name, path) in [
            ("read_path", &self.cart.read_path),
            ("add_path", &self.cart.add_path),
            ("change_path", &self.cart.change_path),
            ("path_prefix", &self.quick_view.path_prefix),
        ] {
            if !path.starts_with('/') {
                return Err(CartError::InvalidConfig(format!(
                    "{} must start with '/', got: {}",
                    name, path
                )));
            }
        }

        if self.cart.request_timeout_secs == Some(0) {
            return Err(CartError::InvalidConfig(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("AURORA_BASE_URL") {
            debug!(url = %url, "Overriding base URL from environment");
            self.store.base_url = url;
        }

        if let Some(template) = lookup("AURORA_MONEY_FORMAT") {
            match MoneyFormat::parse(&template) {
                Ok(format) => self.store.money_format = format,
                Err(e) => warn!(template = %template, error = %e, "Ignoring money format from environment"),
            }
        }

        if let Some(flag) = lookup("AURORA_SERIALIZE_MUTATIONS") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.cart.serialize_mutations = true,
                "0" | "false" | "no" | "off" => self.cart.serialize_mutations = false,
                _ => warn!(value = %flag, "Unknown AURORA_SERIALIZE_MUTATIONS value"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "aurora", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Resolves an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> CartResult<Url> {
        Ok(Url::parse(&self.store.base_url)?.join(path)?)
    }

    /// Returns the configured money format.
    pub fn money_format(&self) -> &MoneyFormat {
        &self.store.money_format
    }
}
