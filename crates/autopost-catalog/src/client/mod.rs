//! HTTP client for a storefront's public `products.json` endpoint.

mod fetch_all;
mod origin;

use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, LINK, RETRY_AFTER};
use reqwest::{Client, Response, StatusCode};

use crate::error::CatalogError;
use crate::rate_limit::retry_with_backoff;
use crate::types::ShopifyProductsResponse;

pub use origin::extract_store_origin;
#[cfg(test)]
use origin::extract_domain;

/// Hard stop for cursor pagination; a storefront whose cursors cycle would
/// otherwise be walked forever.
pub(super) const MAX_PAGES: usize = 200;

/// Used when a 429 arrives without a usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Retry policy applied to each page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts after the first failure. `0` disables retries.
    pub max_retries: u32,
    /// Base delay; the n-th retry waits roughly `backoff_base_ms * 2^(n-1)`.
    pub backoff_base_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_base_ms: 1_000,
        }
    }
}

/// Reads products from a storefront's `products.json`, one page at a time.
///
/// 429, 5xx and transport failures are retried under the [`RetryPolicy`];
/// other failures are returned as typed [`CatalogError`]s straight away.
pub struct ShopifyClient {
    pub(super) http: Client,
    pub(super) retry: RetryPolicy,
}

impl ShopifyClient {
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the HTTP client cannot be built.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        retry: RetryPolicy,
    ) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .build()?;
        Ok(Self { http, retry })
    }

    /// Fetches one page of products and the raw `Link` header that points at
    /// the next one, if any.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::RateLimited`] when 429s outlast the retry policy.
    /// - [`CatalogError::NotFound`] on 404 (not retried).
    /// - [`CatalogError::UnexpectedStatus`] for any other non-2xx; only 5xx is retried.
    /// - [`CatalogError::Http`] on transport failure after retries.
    /// - [`CatalogError::Deserialize`] when the body is not a products page.
    pub async fn fetch_products_page(
        &self,
        store_url: &str,
        limit: u32,
        page_info: Option<&str>,
    ) -> Result<(ShopifyProductsResponse, Option<String>), CatalogError> {
        let url = Self::products_url(store_url, limit, page_info)?;
        let url = url.as_str();

        retry_with_backoff(self.retry, || async move {
            let response = self
                .http
                .get(url)
                .header(ACCEPT, "application/json")
                .send()
                .await?;
            let response = check_status(response, store_url, url)?;

            let next_link = header_string(response.headers(), &LINK);
            let body = response.text().await?;
            let page = serde_json::from_str::<ShopifyProductsResponse>(&body).map_err(|source| {
                CatalogError::Deserialize {
                    context: format!("products page from {store_url}"),
                    source,
                }
            })?;
            Ok((page, next_link))
        })
        .await
    }

    /// `{origin}/products.json?limit=N[&page_info=cursor]` for any URL on the
    /// store.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidShopUrl`] if no valid origin can be
    /// derived from `store_url`.
    fn products_url(
        store_url: &str,
        limit: u32,
        page_info: Option<&str>,
    ) -> Result<String, CatalogError> {
        let origin = extract_store_origin(store_url);
        let mut url = reqwest::Url::parse(&format!("{origin}/products.json")).map_err(|e| {
            CatalogError::InvalidShopUrl {
                shop_url: store_url.to_owned(),
                reason: e.to_string(),
            }
        })?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &limit.to_string());
            if let Some(cursor) = page_info {
                query.append_pair("page_info", cursor);
            }
        }
        Ok(url.into())
    }
}

/// Maps non-success statuses to errors, passing 2xx responses through.
fn check_status(response: Response, store_url: &str, url: &str) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let err = if status == StatusCode::TOO_MANY_REQUESTS {
        CatalogError::RateLimited {
            domain: origin::extract_domain(store_url),
            retry_after_secs: header_string(response.headers(), &RETRY_AFTER)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        }
    } else if status == StatusCode::NOT_FOUND {
        CatalogError::NotFound {
            url: url.to_owned(),
        }
    } else {
        CatalogError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        }
    };
    Err(err)
}

fn header_string(headers: &HeaderMap, name: &reqwest::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
