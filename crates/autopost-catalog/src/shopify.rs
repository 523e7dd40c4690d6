//! Catalog provider backed by a live storefront.

use async_trait::async_trait;
use autopost_core::{AppConfig, Product};

use crate::client::{RetryPolicy, ShopifyClient};
use crate::error::CatalogError;
use crate::normalize::normalize_product;
use crate::provider::CatalogProvider;

/// Fetches the full storefront catalog on every call.
///
/// Products that fail normalization are skipped with a warning; transport
/// failures fail the whole call so callers never see a partial catalog.
///
/// Prices are rounded half-up to whole currency units (`"29.99"` becomes
/// `30`). This assumes the store sells in a zero-decimal currency such as
/// CLP; stores priced in cents-bearing currencies lose their minor units.
pub struct ShopifyCatalog {
    client: ShopifyClient,
    store_url: String,
    page_limit: u32,
    inter_request_delay_ms: u64,
}

impl ShopifyCatalog {
    #[must_use]
    pub fn new(client: ShopifyClient, store_url: impl Into<String>, page_limit: u32) -> Self {
        Self {
            client,
            store_url: store_url.into(),
            page_limit,
            inter_request_delay_ms: 0,
        }
    }

    #[must_use]
    pub fn with_inter_request_delay_ms(mut self, delay_ms: u64) -> Self {
        self.inter_request_delay_ms = delay_ms;
        self
    }

    /// Builds a provider from the store settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidShopUrl`] when no store URL is
    /// configured, or [`CatalogError::Http`] if the HTTP client cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, CatalogError> {
        let store_url = config
            .store_url
            .clone()
            .ok_or_else(|| CatalogError::InvalidShopUrl {
                shop_url: String::new(),
                reason: "AUTOPOST_STORE_URL is not set".to_string(),
            })?;

        let client = ShopifyClient::new(
            config.store_request_timeout_secs,
            &config.store_user_agent,
            RetryPolicy {
                max_retries: config.store_max_retries,
                backoff_base_ms: config.store_retry_backoff_base_ms,
            },
        )?;

        Ok(Self::new(client, store_url, config.store_page_limit)
            .with_inter_request_delay_ms(config.store_inter_request_delay_ms))
    }
}

#[async_trait]
impl CatalogProvider for ShopifyCatalog {
    fn name(&self) -> &str {
        "shopify"
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let raw = self
            .client
            .fetch_all_products(&self.store_url, self.page_limit, self.inter_request_delay_ms)
            .await?;

        let fetched = raw.len();
        let products: Vec<Product> = raw
            .into_iter()
            .filter_map(|p| match normalize_product(p) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(store_url = %self.store_url, error = %e, "skipping product");
                    None
                }
            })
            .collect();

        tracing::info!(
            store_url = %self.store_url,
            fetched,
            kept = products.len(),
            "synced storefront catalog"
        );
        Ok(products)
    }
}
