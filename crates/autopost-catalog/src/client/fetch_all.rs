//! Walks every page of a storefront catalog.

use std::time::Duration;

use crate::error::CatalogError;
use crate::pagination::extract_next_cursor;
use crate::types::ShopifyProduct;

use super::{ShopifyClient, MAX_PAGES};

impl ShopifyClient {
    /// Fetches every product, following `rel="next"` cursors.
    ///
    /// Sleeps `inter_request_delay_ms` between pages. Any failing page fails
    /// the whole call; earlier pages are discarded.
    ///
    /// # Errors
    ///
    /// Whatever [`Self::fetch_products_page`] returns, or
    /// [`CatalogError::PaginationLimit`] once [`MAX_PAGES`] pages have been read
    /// and the store still reports a next page.
    pub async fn fetch_all_products(
        &self,
        store_url: &str,
        limit: u32,
        inter_request_delay_ms: u64,
    ) -> Result<Vec<ShopifyProduct>, CatalogError> {
        let pause = Duration::from_millis(inter_request_delay_ms);
        let mut products = Vec::new();
        let mut next: Option<String> = None;

        for page in 1..=MAX_PAGES {
            if page > 1 && !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }

            let (batch, link) = self
                .fetch_products_page(store_url, limit, next.as_deref())
                .await?;
            products.extend(batch.products);

            next = extract_next_cursor(link.as_deref());
            if next.is_none() {
                tracing::debug!(store_url, pages = page, products = products.len(), "catalog fetched");
                return Ok(products);
            }
        }

        Err(CatalogError::PaginationLimit {
            shop_url: store_url.to_owned(),
            max_pages: MAX_PAGES,
        })
    }
}
