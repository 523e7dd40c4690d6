use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{domain} is rate limiting requests; retry in {retry_after_secs}s")]
    RateLimited {
        domain: String,
        retry_after_secs: u64,
    },

    #[error("no product listing at {url}")]
    NotFound { url: String },

    #[error("{url} answered with HTTP {status}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("product {source_product_id} cannot be imported: {reason}")]
    Normalization {
        source_product_id: String,
        reason: String,
    },

    #[error("{shop_url} still had more products after {max_pages} pages")]
    PaginationLimit { shop_url: String, max_pages: usize },

    #[error("store URL \"{shop_url}\" is not usable: {reason}")]
    InvalidShopUrl { shop_url: String, reason: String },

    #[error("catalog file error: {0}")]
    File(#[from] autopost_core::ConfigError),
}

impl CatalogError {
    /// `true` for failures that may clear up on their own: 429, transport
    /// errors, and 5xx.
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        match self {
            CatalogError::RateLimited { .. } | CatalogError::Http(_) => true,
            CatalogError::UnexpectedStatus { status, .. } => *status >= 500,
            CatalogError::Deserialize { .. }
            | CatalogError::NotFound { .. }
            | CatalogError::Normalization { .. }
            | CatalogError::PaginationLimit { .. }
            | CatalogError::InvalidShopUrl { .. }
            | CatalogError::File(_) => false,
        }
    }
}
