//! Response types for a storefront `products.json` endpoint.
//!
//! The public endpoint omits inventory; Admin-shaped payloads and some
//! storefront apps add `inventory_quantity` per variant. Missing fields are
//! tolerated with `#[serde(default)]`.

use serde::Deserialize;

/// Top-level response from `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct ShopifyProductsResponse {
    pub products: Vec<ShopifyProduct>,
}

#[derive(Debug, Deserialize)]
pub struct ShopifyProduct {
    pub id: i64,
    pub title: String,
    pub handle: String,
    /// Category string; may be empty, which normalizes to no category.
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub variants: Vec<ShopifyVariant>,
}

#[derive(Debug, Deserialize)]
pub struct ShopifyVariant {
    pub id: i64,
    pub title: String,
    /// May be an empty string on some stores.
    #[serde(default)]
    pub sku: Option<String>,
    /// Decimal string, e.g. `"29990.00"`.
    pub price: String,
    #[serde(default = "default_available")]
    pub available: bool,
    /// 1-based; `1` is the storefront default variant.
    #[serde(default)]
    pub position: Option<i32>,
    /// Units on hand. Negative values (oversold) are treated as zero.
    #[serde(default)]
    pub inventory_quantity: Option<i64>,
}

/// Variants are assumed purchasable when the field is absent.
fn default_available() -> bool {
    true
}
