//! Catalog providers: the boundary through which products enter the
//! generation pipeline.

pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod provider;
mod rate_limit;
pub mod shopify;
pub mod types;

pub use client::ShopifyClient;
pub use error::CatalogError;
pub use normalize::normalize_product;
pub use provider::{CatalogProvider, FileCatalog, StaticCatalog};
pub use shopify::ShopifyCatalog;
pub use types::{ShopifyProduct, ShopifyProductsResponse, ShopifyVariant};
