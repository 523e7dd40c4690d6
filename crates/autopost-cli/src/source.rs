//! Resolves the catalog provider and brand profile for a command.

use std::sync::Arc;

use autopost_catalog::client::RetryPolicy;
use autopost_catalog::{CatalogProvider, FileCatalog, ShopifyCatalog, ShopifyClient, StaticCatalog};
use autopost_core::{AppConfig, BrandProfile, EcommercePlatform};

use crate::SourceArgs;

/// Picks the provider: `--sample`, then `--shop-url`, then a configured
/// Shopify store, then the catalog file.
pub(crate) fn build_provider(
    config: &AppConfig,
    source: &SourceArgs,
) -> anyhow::Result<Arc<dyn CatalogProvider>> {
    if source.sample {
        return Ok(Arc::new(StaticCatalog::sample()));
    }

    if let Some(shop_url) = &source.shop_url {
        let client = ShopifyClient::new(
            config.store_request_timeout_secs,
            &config.store_user_agent,
            RetryPolicy {
                max_retries: config.store_max_retries,
                backoff_base_ms: config.store_retry_backoff_base_ms,
            },
        )?;
        let catalog = ShopifyCatalog::new(client, shop_url.as_str(), config.store_page_limit)
            .with_inter_request_delay_ms(config.store_inter_request_delay_ms);
        return Ok(Arc::new(catalog));
    }

    match (config.store_platform, &config.store_url) {
        (Some(EcommercePlatform::Shopify), Some(_)) => {
            Ok(Arc::new(ShopifyCatalog::from_app_config(config)?))
        }
        (Some(platform), Some(_)) => {
            tracing::warn!(
                %platform,
                "no live catalog sync for this platform, using catalog file"
            );
            Ok(Arc::new(FileCatalog::new(config.catalog_path.clone())))
        }
        _ => Ok(Arc::new(FileCatalog::new(config.catalog_path.clone()))),
    }
}

/// The brand profile from `AUTOPOST_BRAND_PATH`, or the default theme.
pub(crate) fn load_brand(config: &AppConfig) -> anyhow::Result<BrandProfile> {
    match &config.brand_path {
        Some(path) => {
            let brand = autopost_core::load_brand_profile(path)?;
            tracing::debug!(path = %path.display(), brand = %brand.brand_name, "loaded brand profile");
            Ok(brand)
        }
        None => Ok(BrandProfile::default()),
    }
}
