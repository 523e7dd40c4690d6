//! E-commerce store connection settings.
//!
//! The connection is configuration only: the API key is carried as an opaque
//! value and `connect` flips local state without any handshake.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app_config::AppConfig;
use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcommercePlatform {
    Shopify,
    WooCommerce,
    TiendaNube,
    Magento,
    Vtex,
    Custom,
}

impl EcommercePlatform {
    pub const ALL: [EcommercePlatform; 6] = [
        EcommercePlatform::Shopify,
        EcommercePlatform::WooCommerce,
        EcommercePlatform::TiendaNube,
        EcommercePlatform::Magento,
        EcommercePlatform::Vtex,
        EcommercePlatform::Custom,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            EcommercePlatform::Shopify => "shopify",
            EcommercePlatform::WooCommerce => "woocommerce",
            EcommercePlatform::TiendaNube => "tiendanube",
            EcommercePlatform::Magento => "magento",
            EcommercePlatform::Vtex => "vtex",
            EcommercePlatform::Custom => "custom",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            EcommercePlatform::Shopify => "Shopify",
            EcommercePlatform::WooCommerce => "WooCommerce",
            EcommercePlatform::TiendaNube => "Tienda Nube",
            EcommercePlatform::Magento => "Magento",
            EcommercePlatform::Vtex => "VTEX",
            EcommercePlatform::Custom => "API Custom",
        }
    }
}

impl FromStr for EcommercePlatform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| CoreError::UnknownPlatform(s.to_string()))
    }
}

impl std::fmt::Display for EcommercePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct StoreConnection {
    pub platform: Option<EcommercePlatform>,
    pub store_url: Option<String>,
    pub api_key: Option<String>,
    pub connected: bool,
}

impl StoreConnection {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            platform: config.store_platform,
            store_url: config.store_url.clone(),
            api_key: config.store_api_key.clone(),
            connected: false,
        }
    }

    /// Marks the store as connected. No credentials are checked or sent.
    pub fn connect(&mut self) {
        self.connected = true;
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }
}

impl std::fmt::Debug for StoreConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConnection")
            .field("platform", &self.platform)
            .field("store_url", &self.store_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("connected", &self.connected)
            .finish()
    }
}
