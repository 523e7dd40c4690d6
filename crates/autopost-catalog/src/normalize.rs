//! Conversion from storefront product payloads to [`autopost_core::Product`].

use std::str::FromStr;

use autopost_core::Product;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CatalogError;
use crate::types::{ShopifyProduct, ShopifyVariant};

/// Normalizes a storefront product into a catalog [`Product`].
///
/// - price comes from the default variant (position 1, else the first),
///   rounded half-up to whole currency units;
/// - stock is the sum of non-negative `inventory_quantity` over available
///   variants, `0` when no variant reports inventory;
/// - sku is the default variant's sku, or the upper-cased handle when blank;
/// - category is `product_type`, with empty strings treated as absent.
///
/// # Errors
///
/// Returns [`CatalogError::Normalization`] if the product has no variants,
/// a negative id, or a price that is unparseable or rounds to zero.
pub fn normalize_product(product: ShopifyProduct) -> Result<Product, CatalogError> {
    let source_product_id = product.id.to_string();
    let normalization_error = |reason: String| CatalogError::Normalization {
        source_product_id: source_product_id.clone(),
        reason,
    };

    let id = u64::try_from(product.id)
        .map_err(|_| normalization_error("product id is negative".to_string()))?;

    let default_variant = default_variant(&product.variants)
        .ok_or_else(|| normalization_error("product has no variants".to_string()))?;

    let price = parse_price(&default_variant.price).ok_or_else(|| {
        normalization_error(format!(
            "variant {} has unparseable price \"{}\"",
            default_variant.id, default_variant.price
        ))
    })?;
    if price == 0 {
        return Err(normalization_error(format!(
            "variant {} price must be positive",
            default_variant.id
        )));
    }

    let sku = default_variant
        .sku
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| product.handle.to_uppercase(), str::to_owned);

    let stock = total_stock(&product.variants);
    let category = product.product_type.filter(|s| !s.trim().is_empty());

    Ok(Product {
        id,
        name: product.title,
        sku,
        price,
        stock,
        category,
        color: None,
    })
}

fn default_variant(variants: &[ShopifyVariant]) -> Option<&ShopifyVariant> {
    variants
        .iter()
        .find(|v| v.position == Some(1))
        .or_else(|| variants.first())
}

fn parse_price(raw: &str) -> Option<u64> {
    Decimal::from_str(raw.trim())
        .ok()?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
}

fn total_stock(variants: &[ShopifyVariant]) -> u32 {
    let total: i64 = variants
        .iter()
        .filter(|v| v.available)
        .filter_map(|v| v.inventory_quantity)
        .map(|q| q.max(0))
        .sum();
    u32::try_from(total).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
