//! Batch model and the pure pipeline that builds one.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use uuid::Uuid;

use autopost_core::{
    BatchSize, BrandProfile, CaptionStyle, PostTemplate, Product, SelectionStrategy,
    TemplateLayout,
};

use crate::caption::synthesize;
use crate::ranking::rank;
use crate::scheduler::{display_date, schedule, TimeSlot};

/// Everything one generation needs, captured when it is requested.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub strategy: SelectionStrategy,
    pub style: CaptionStyle,
    pub batch_size: BatchSize,
    pub template: &'static PostTemplate,
    pub brand: BrandProfile,
    /// "Now" in the session's zone; all schedule dates derive from it.
    pub reference: DateTime<Tz>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPost {
    pub product: Product,
    pub caption: String,
    pub scheduled_date: NaiveDate,
    pub time_slot: TimeSlot,
    pub status: PostStatus,
}

impl GeneratedPost {
    #[must_use]
    pub fn display_date(&self) -> String {
        display_date(self.scheduled_date)
    }
}

/// One generation's output. Replaced wholesale by the next generation.
#[derive(Debug, Clone, Serialize)]
pub struct PostBatch {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub strategy: SelectionStrategy,
    pub style: CaptionStyle,
    pub template: PostTemplate,
    pub brand: BrandProfile,
    pub posts: Vec<GeneratedPost>,
}

/// What the template renderer receives for a single post.
#[derive(Debug, Serialize)]
pub struct RenderPayload<'a> {
    pub template_id: &'static str,
    pub layout: TemplateLayout,
    pub product: &'a Product,
    pub brand: &'a BrandProfile,
    pub caption: &'a str,
}

impl PostBatch {
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    #[must_use]
    pub fn render_payloads(&self) -> Vec<RenderPayload<'_>> {
        self.posts
            .iter()
            .map(|post| RenderPayload {
                template_id: self.template.id,
                layout: self.template.layout,
                product: &post.product,
                brand: &self.brand,
                caption: &post.caption,
            })
            .collect()
    }
}

/// Ranks `catalog`, takes the top of the ranking, and captions and schedules
/// each selected product.
///
/// A product id appearing more than once in the catalog is selected at most
/// once. An empty catalog produces an empty batch.
#[must_use]
pub fn build_batch(catalog: &[Product], request: &GenerationRequest) -> PostBatch {
    let mut seen = HashSet::new();
    let ranked: Vec<Product> = rank(catalog, request.strategy)
        .into_iter()
        .filter(|p| seen.insert(p.id))
        .collect();

    let posts = schedule(&ranked, request.batch_size, &request.reference)
        .into_iter()
        .map(|slot| GeneratedPost {
            caption: synthesize(&slot.product, &request.brand, request.style),
            product: slot.product,
            scheduled_date: slot.date,
            time_slot: slot.time_slot,
            status: PostStatus::Draft,
        })
        .collect();

    PostBatch {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        strategy: request.strategy,
        style: request.style,
        template: *request.template,
        brand: request.brand.clone(),
        posts,
    }
}
