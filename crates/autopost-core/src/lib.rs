//! Domain types and configuration shared by the autopost crates.

pub mod app_config;
pub mod brand;
pub mod config;
pub mod format;
pub mod products;
pub mod sample;
pub mod selection;
pub mod store;
pub mod templates;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use brand::{load_brand_profile, parse_brand_profile, BrandProfile, ThemePreset, Tone};
pub use config::{load_app_config, load_app_config_from_env};
pub use format::{format_price, format_stock};
pub use products::{
    load_catalog, parse_catalog, preview_product, CatalogSummary, Product, StockLevel,
};
pub use sample::sample_catalog;
pub use selection::{BatchSize, CaptionStyle, SelectionStrategy};
pub use store::{EcommercePlatform, StoreConnection};
pub use templates::{find_template, template_or_default, PostTemplate, TemplateLayout, POST_TEMPLATES};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    FileParse(#[from] serde_yaml::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid batch size {0}; must be one of 2, 4, 6, 8")]
    InvalidBatchSize(usize),

    #[error("unknown selection strategy: {0}")]
    UnknownStrategy(String),

    #[error("unknown caption style: {0}")]
    UnknownCaptionStyle(String),

    #[error("unknown tone: {0}")]
    UnknownTone(String),

    #[error("unknown theme preset: {0}")]
    UnknownThemePreset(String),

    #[error("unknown e-commerce platform: {0}")]
    UnknownPlatform(String),
}
