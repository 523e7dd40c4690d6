use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use autopost_catalog::StaticCatalog;
use autopost_core::{
    sample_catalog, template_or_default, BatchSize, BrandProfile, CaptionStyle, SelectionStrategy,
};
use chrono::TimeZone;
use chrono_tz::America::Santiago;

use super::*;

const DELAY: Duration = Duration::from_millis(2_000);

/// Sample catalog that can be switched into a failing or panicking state.
struct SwitchableCatalog {
    failing: AtomicBool,
    panicking: AtomicBool,
    calls: AtomicUsize,
}

impl SwitchableCatalog {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            failing: AtomicBool::new(false),
            panicking: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl CatalogProvider for SwitchableCatalog {
    fn name(&self) -> &str {
        "switchable"
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(!self.panicking.load(Ordering::SeqCst), "provider bug");
        if self.failing.load(Ordering::SeqCst) {
            Err(CatalogError::UnexpectedStatus {
                status: 503,
                url: "https://nova.example.com/products.json".to_owned(),
            })
        } else {
            Ok(sample_catalog())
        }
    }
}

fn request(batch_size: usize) -> GenerationRequest {
    GenerationRequest {
        strategy: SelectionStrategy::StockDescending,
        style: CaptionStyle::Engaging,
        batch_size: BatchSize::try_from(batch_size).unwrap(),
        template: template_or_default("product-hero"),
        brand: BrandProfile::default(),
        reference: Santiago.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).unwrap(),
    }
}

fn sample_engine() -> PostEngine {
    PostEngine::new(Arc::new(StaticCatalog::sample()), DELAY)
}

#[tokio::test(start_paused = true)]
async fn generate_publishes_batch() {
    let engine = sample_engine();
    assert_eq!(engine.state().await, EngineState::Idle);
    assert!(engine.current_batch().await.is_none());

    let batch = engine.generate(request(4)).await.unwrap();

    assert_eq!(batch.len(), 4);
    assert_eq!(engine.state().await, EngineState::Ready);
    assert_eq!(engine.current_batch().await.unwrap().id, batch.id);
}

#[tokio::test(start_paused = true)]
async fn waits_for_the_generation_delay() {
    let catalog = SwitchableCatalog::new();
    let engine = PostEngine::new(catalog.clone(), DELAY);

    let handle = engine.start(request(4)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1_999)).await;
    assert_eq!(engine.state().await, EngineState::Generating);
    assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);

    handle.wait().await.unwrap();
    assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn second_trigger_while_generating_is_rejected() {
    let catalog = SwitchableCatalog::new();
    let engine = PostEngine::new(catalog.clone(), DELAY);

    let first = engine.start(request(4)).await.unwrap();
    assert_eq!(engine.state().await, EngineState::Generating);

    let second = engine.start(request(2)).await;
    assert!(matches!(second, Err(EngineError::AlreadyGenerating)));

    let batch = first.wait().await.unwrap();
    assert_eq!(batch.len(), 4);
    assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
    assert_eq!(engine.current_batch().await.unwrap().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn restart_supersedes_in_flight_generation() {
    let catalog = SwitchableCatalog::new();
    let engine = PostEngine::new(catalog.clone(), DELAY);

    let stale = engine.start(request(4)).await.unwrap();
    let fresh = engine.restart(request(2)).await;
    assert!(fresh.run_id() > stale.run_id());

    assert!(matches!(stale.wait().await, Err(EngineError::Superseded)));
    let batch = fresh.wait().await.unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(engine.current_batch().await.unwrap().id, batch.id);
    assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_generation_and_keeps_previous_batch() {
    let engine = sample_engine();
    let first = engine.generate(request(2)).await.unwrap();

    let handle = engine.start(request(8)).await.unwrap();
    assert!(engine.cancel().await);
    assert!(matches!(handle.wait().await, Err(EngineError::Cancelled)));

    assert_eq!(engine.state().await, EngineState::Ready);
    assert_eq!(engine.current_batch().await.unwrap().id, first.id);
    assert!(!engine.cancel().await);
}

#[tokio::test(start_paused = true)]
async fn provider_failure_keeps_previous_batch() {
    let catalog = SwitchableCatalog::new();
    let engine = PostEngine::new(catalog.clone(), DELAY);
    let first = engine.generate(request(4)).await.unwrap();

    catalog.failing.store(true, Ordering::SeqCst);
    let err = engine.generate(request(6)).await.unwrap_err();

    assert!(matches!(err, EngineError::SourceUnavailable(_)), "got: {err:?}");
    assert_eq!(engine.state().await, EngineState::Ready);
    let current = engine.current_batch().await.unwrap();
    assert_eq!(current.id, first.id);
    assert_eq!(current.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn provider_failure_from_idle_returns_to_idle() {
    let catalog = SwitchableCatalog::new();
    catalog.failing.store(true, Ordering::SeqCst);
    let engine = PostEngine::new(catalog, DELAY);

    assert!(engine.generate(request(4)).await.is_err());
    assert_eq!(engine.state().await, EngineState::Idle);
    assert!(engine.current_batch().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn new_generation_replaces_previous_batch() {
    let engine = sample_engine();
    let first = engine.generate(request(2)).await.unwrap();
    let second = engine.generate(request(6)).await.unwrap();

    assert_ne!(first.id, second.id);
    let current = engine.current_batch().await.unwrap();
    assert_eq!(current.id, second.id);
    assert_eq!(current.len(), 6);
}

#[tokio::test(start_paused = true)]
async fn previous_batch_readable_while_generating() {
    let engine = sample_engine();
    let first = engine.generate(request(2)).await.unwrap();

    let handle = engine.start(request(4)).await.unwrap();
    assert_eq!(engine.state().await, EngineState::Generating);
    assert_eq!(engine.current_batch().await.unwrap().id, first.id);

    handle.wait().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn empty_catalog_publishes_empty_batch() {
    let engine = PostEngine::new(Arc::new(StaticCatalog::default()), DELAY);
    let batch = engine.generate(request(4)).await.unwrap();
    assert!(batch.is_empty());
    assert_eq!(engine.state().await, EngineState::Ready);
}

#[tokio::test(start_paused = true)]
async fn post_actions_replace_the_published_batch() {
    let engine = sample_engine();
    assert!(matches!(engine.edit_caption(0, "x").await, Err(EngineError::NoBatch)));

    let original = engine.generate(request(4)).await.unwrap();

    let edited = engine.edit_caption(1, "Gorra nueva 🧢").await.unwrap();
    assert_eq!(edited.id, original.id);
    assert_eq!(edited.posts[1].caption, "Gorra nueva 🧢");
    assert_eq!(edited.posts[0].caption, original.posts[0].caption);
    assert_ne!(original.posts[1].caption, "Gorra nueva 🧢");

    let scheduled = engine.schedule_post(0).await.unwrap();
    assert_eq!(scheduled.posts[0].status, PostStatus::Scheduled);
    assert_eq!(scheduled.posts[1].status, PostStatus::Draft);
    assert_eq!(scheduled.posts[1].caption, "Gorra nueva 🧢");

    let err = engine.schedule_post(4).await.unwrap_err();
    assert!(matches!(err, EngineError::PostIndexOutOfRange { index: 4, len: 4 }));
}

#[tokio::test(start_paused = true)]
async fn provider_panic_returns_engine_to_idle() {
    let catalog = SwitchableCatalog::new();
    catalog.panicking.store(true, Ordering::SeqCst);
    let engine = PostEngine::new(catalog.clone(), DELAY);

    let err = engine.generate(request(4)).await.unwrap_err();
    assert!(matches!(err, EngineError::TaskFailed(ref e) if e.is_panic()));
    assert_eq!(engine.state().await, EngineState::Idle);

    catalog.panicking.store(false, Ordering::SeqCst);
    let batch = engine.generate(request(4)).await.unwrap();
    assert_eq!(batch.len(), 4);
    assert_eq!(engine.state().await, EngineState::Ready);
}

#[tokio::test(start_paused = true)]
async fn provider_panic_keeps_previous_batch() {
    let catalog = SwitchableCatalog::new();
    let engine = PostEngine::new(catalog.clone(), DELAY);
    let first = engine.generate(request(4)).await.unwrap();

    catalog.panicking.store(true, Ordering::SeqCst);
    let handle = engine.start(request(6)).await.unwrap();
    assert!(matches!(handle.wait().await, Err(EngineError::TaskFailed(_))));

    assert_eq!(engine.state().await, EngineState::Ready);
    assert_eq!(engine.current_batch().await.unwrap().id, first.id);
    assert!(engine.start(request(4)).await.is_ok());
}
