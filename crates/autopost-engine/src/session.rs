//! Per-user session: owns the generation settings and the engine.
//!
//! Settings change only through the setters below. Each generation takes a
//! snapshot of them, so edits made while a generation is running apply to
//! the next one.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use autopost_catalog::CatalogProvider;
use autopost_core::{
    template_or_default, AppConfig, BatchSize, BrandProfile, CaptionStyle, CoreError,
    EcommercePlatform, PostTemplate, SelectionStrategy, StoreConnection, ThemePreset, Tone,
    POST_TEMPLATES,
};

use crate::batch::{GenerationRequest, PostBatch};
use crate::engine::PostEngine;
use crate::error::EngineError;

pub struct Session {
    brand: BrandProfile,
    store: StoreConnection,
    strategy: SelectionStrategy,
    style: CaptionStyle,
    batch_size: BatchSize,
    template: &'static PostTemplate,
    timezone: Tz,
    engine: PostEngine,
}

impl Session {
    /// A session with default settings around `engine`.
    #[must_use]
    pub fn new(engine: PostEngine, timezone: Tz) -> Self {
        Self {
            brand: BrandProfile::default(),
            store: StoreConnection::default(),
            strategy: SelectionStrategy::default(),
            style: CaptionStyle::default(),
            batch_size: BatchSize::default(),
            template: &POST_TEMPLATES[0],
            timezone,
            engine,
        }
    }

    #[must_use]
    pub fn from_app_config(
        config: &AppConfig,
        brand: BrandProfile,
        provider: Arc<dyn CatalogProvider>,
    ) -> Self {
        let engine = PostEngine::new(provider, Duration::from_millis(config.generation_delay_ms));
        let mut session = Self::new(engine, config.timezone);
        session.brand = brand;
        session.store = StoreConnection::from_app_config(config);
        session.batch_size = config.default_batch_size;
        session
    }

    #[must_use]
    pub fn brand(&self) -> &BrandProfile {
        &self.brand
    }

    #[must_use]
    pub fn store(&self) -> &StoreConnection {
        &self.store
    }

    #[must_use]
    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    #[must_use]
    pub fn caption_style(&self) -> CaptionStyle {
        self.style
    }

    #[must_use]
    pub fn batch_size(&self) -> BatchSize {
        self.batch_size
    }

    #[must_use]
    pub fn template(&self) -> &'static PostTemplate {
        self.template
    }

    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    #[must_use]
    pub fn engine(&self) -> &PostEngine {
        &self.engine
    }

    pub fn set_brand(&mut self, brand: BrandProfile) {
        self.brand = brand;
    }

    pub fn set_brand_name(&mut self, name: impl Into<String>) {
        self.brand.brand_name = name.into();
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.brand.tone = tone;
    }

    /// Switches palette, fonts and tone to `preset`, keeping the brand name
    /// and tagline.
    pub fn apply_theme(&mut self, preset: ThemePreset) {
        let mut themed = preset.profile();
        themed.brand_name = std::mem::take(&mut self.brand.brand_name);
        themed.tagline = std::mem::take(&mut self.brand.tagline);
        self.brand = themed;
    }

    pub fn set_strategy(&mut self, strategy: SelectionStrategy) {
        self.strategy = strategy;
    }

    /// Sets the strategy by id; unknown ids select the default strategy.
    pub fn select_strategy(&mut self, id: &str) {
        self.strategy = id.parse().unwrap_or_else(|e: CoreError| {
            tracing::warn!(error = %e, "falling back to default strategy");
            SelectionStrategy::default()
        });
    }

    pub fn set_caption_style(&mut self, style: CaptionStyle) {
        self.style = style;
    }

    /// Sets the caption style by id; unknown ids select `engaging`.
    pub fn select_caption_style(&mut self, id: &str) {
        self.style = id.parse().unwrap_or_else(|e: CoreError| {
            tracing::warn!(error = %e, "falling back to default caption style");
            CaptionStyle::default()
        });
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidBatchSize`] for sizes other than 2, 4, 6
    /// or 8; the current size is kept.
    pub fn set_batch_size(&mut self, size: usize) -> Result<(), CoreError> {
        self.batch_size = BatchSize::try_from(size)?;
        Ok(())
    }

    /// Sets the template by id; unknown ids select `product-hero`.
    pub fn select_template(&mut self, id: &str) {
        let template = template_or_default(id);
        if template.id != id {
            tracing::warn!(requested = id, using = template.id, "unknown template");
        }
        self.template = template;
    }

    pub fn connect_store(
        &mut self,
        platform: EcommercePlatform,
        store_url: impl Into<String>,
        api_key: Option<String>,
    ) {
        self.store = StoreConnection {
            platform: Some(platform),
            store_url: Some(store_url.into()),
            api_key,
            connected: false,
        };
        self.store.connect();
        tracing::info!(%platform, "store connected");
    }

    pub fn disconnect_store(&mut self) {
        self.store.disconnect();
    }

    /// Snapshot of the current settings for a generation at `reference`.
    #[must_use]
    pub fn request_at(&self, reference: DateTime<Tz>) -> GenerationRequest {
        GenerationRequest {
            strategy: self.strategy,
            style: self.style,
            batch_size: self.batch_size,
            template: self.template,
            brand: self.brand.clone(),
            reference,
        }
    }

    /// Snapshot of the current settings, dated now in the session's zone.
    #[must_use]
    pub fn request(&self) -> GenerationRequest {
        self.request_at(Utc::now().with_timezone(&self.timezone))
    }

    /// Generates a batch with the current settings.
    ///
    /// # Errors
    ///
    /// See [`PostEngine::generate`].
    pub async fn generate(&self) -> Result<Arc<PostBatch>, EngineError> {
        self.engine.generate(self.request()).await
    }

    /// Like [`Self::generate`], but supersedes a generation already in flight.
    ///
    /// # Errors
    ///
    /// See [`crate::GenerationHandle::wait`].
    pub async fn regenerate(&self) -> Result<Arc<PostBatch>, EngineError> {
        self.engine.restart(self.request()).await.wait().await
    }
}
