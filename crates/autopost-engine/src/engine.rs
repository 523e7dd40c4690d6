//! The generation state machine: `Idle -> Generating -> Ready`.
//!
//! At most one generation is in flight per engine. Each run waits the
//! configured delay, reads the catalog, then builds and publishes a batch.
//! Reads of the published batch stay available throughout.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use autopost_catalog::{CatalogError, CatalogProvider};
use autopost_core::Product;

use crate::batch::{build_batch, GeneratedPost, GenerationRequest, PostBatch, PostStatus};
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    Idle,
    Generating,
    Ready,
}

#[derive(Debug)]
struct InFlight {
    run_id: u64,
    cancel: CancellationToken,
    stop: Arc<OnceLock<StopReason>>,
}

#[derive(Debug, Clone, Copy)]
enum StopReason {
    Superseded,
    Cancelled,
}

impl InFlight {
    fn stop(self, reason: StopReason) {
        let _ = self.stop.set(reason);
        self.cancel.cancel();
    }
}

#[derive(Debug, Default)]
struct EngineInner {
    next_run_id: u64,
    in_flight: Option<InFlight>,
    batch: Option<Arc<PostBatch>>,
}

struct Shared {
    provider: Arc<dyn CatalogProvider>,
    delay: Duration,
    inner: Mutex<EngineInner>,
}

/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct PostEngine {
    shared: Arc<Shared>,
}

/// Resolves when its generation publishes, fails, or is stopped.
///
/// Dropping the handle does not stop the generation.
#[derive(Debug)]
pub struct GenerationHandle {
    run_id: u64,
    task: JoinHandle<Result<Arc<PostBatch>, EngineError>>,
}

impl GenerationHandle {
    #[must_use]
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// # Errors
    ///
    /// Returns the generation's own error, or [`EngineError::TaskFailed`] if
    /// the task panicked.
    pub async fn wait(self) -> Result<Arc<PostBatch>, EngineError> {
        self.task.await?
    }
}

impl PostEngine {
    #[must_use]
    pub fn new(provider: Arc<dyn CatalogProvider>, delay: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                provider,
                delay,
                inner: Mutex::new(EngineInner::default()),
            }),
        }
    }

    pub async fn state(&self) -> EngineState {
        let inner = self.shared.inner.lock().await;
        if inner.in_flight.is_some() {
            EngineState::Generating
        } else if inner.batch.is_some() {
            EngineState::Ready
        } else {
            EngineState::Idle
        }
    }

    /// The last published batch, if any.
    pub async fn current_batch(&self) -> Option<Arc<PostBatch>> {
        self.shared.inner.lock().await.batch.clone()
    }

    /// Starts a generation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyGenerating`] while another generation is
    /// in flight; the in-flight one is not affected.
    pub async fn start(&self, request: GenerationRequest) -> Result<GenerationHandle, EngineError> {
        let mut inner = self.shared.inner.lock().await;
        if inner.in_flight.is_some() {
            tracing::debug!("generation already in flight, ignoring trigger");
            return Err(EngineError::AlreadyGenerating);
        }
        Ok(self.spawn_run(&mut inner, request))
    }

    /// Starts a generation, stopping any in-flight one first. The stopped
    /// generation resolves to [`EngineError::Superseded`].
    pub async fn restart(&self, request: GenerationRequest) -> GenerationHandle {
        let mut inner = self.shared.inner.lock().await;
        if let Some(stale) = inner.in_flight.take() {
            tracing::info!(run_id = stale.run_id, "superseding in-flight generation");
            stale.stop(StopReason::Superseded);
        }
        self.spawn_run(&mut inner, request)
    }

    /// Stops the in-flight generation, if any. Returns whether one was stopped.
    pub async fn cancel(&self) -> bool {
        let mut inner = self.shared.inner.lock().await;
        match inner.in_flight.take() {
            Some(run) => {
                tracing::info!(run_id = run.run_id, "cancelling generation");
                run.stop(StopReason::Cancelled);
                true
            }
            None => false,
        }
    }

    /// Starts a generation and waits for it.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::start`] or [`GenerationHandle::wait`].
    pub async fn generate(&self, request: GenerationRequest) -> Result<Arc<PostBatch>, EngineError> {
        self.start(request).await?.wait().await
    }

    /// Replaces the caption of post `index` in the published batch.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoBatch`] or [`EngineError::PostIndexOutOfRange`].
    pub async fn edit_caption(
        &self,
        index: usize,
        caption: impl Into<String>,
    ) -> Result<Arc<PostBatch>, EngineError> {
        let caption = caption.into();
        self.update_post(index, move |post| post.caption = caption)
            .await
    }

    /// Marks post `index` of the published batch as scheduled.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoBatch`] or [`EngineError::PostIndexOutOfRange`].
    pub async fn schedule_post(&self, index: usize) -> Result<Arc<PostBatch>, EngineError> {
        self.update_post(index, |post| post.status = PostStatus::Scheduled)
            .await
    }

    async fn update_post<F>(&self, index: usize, apply: F) -> Result<Arc<PostBatch>, EngineError>
    where
        F: FnOnce(&mut GeneratedPost),
    {
        let mut inner = self.shared.inner.lock().await;
        let current = inner.batch.as_ref().ok_or(EngineError::NoBatch)?;
        let len = current.posts.len();

        let mut next = PostBatch::clone(current);
        let post = next
            .posts
            .get_mut(index)
            .ok_or(EngineError::PostIndexOutOfRange { index, len })?;
        apply(post);

        let next = Arc::new(next);
        inner.batch = Some(Arc::clone(&next));
        Ok(next)
    }

    fn spawn_run(&self, inner: &mut EngineInner, request: GenerationRequest) -> GenerationHandle {
        inner.next_run_id += 1;
        let run_id = inner.next_run_id;
        let cancel = CancellationToken::new();
        let stop = Arc::new(OnceLock::new());
        inner.in_flight = Some(InFlight {
            run_id,
            cancel: cancel.clone(),
            stop: Arc::clone(&stop),
        });

        tracing::info!(
            run_id,
            strategy = %request.strategy,
            style = %request.style,
            batch_size = %request.batch_size,
            template = request.template.id,
            "generation started"
        );

        let shared = Arc::clone(&self.shared);
        let work = tokio::spawn(run_generation(
            Arc::clone(&shared),
            run_id,
            cancel,
            stop,
            request,
        ));
        // A panicking run must still release the in-flight slot.
        let task = tokio::spawn(async move {
            match work.await {
                Ok(result) => result,
                Err(join_err) => {
                    let mut inner = shared.inner.lock().await;
                    if inner.in_flight.as_ref().map(|run| run.run_id) == Some(run_id) {
                        inner.in_flight = None;
                    }
                    tracing::error!(run_id, error = %join_err, "generation task failed");
                    Err(EngineError::TaskFailed(join_err))
                }
            }
        });

        GenerationHandle { run_id, task }
    }
}

async fn run_generation(
    shared: Arc<Shared>,
    run_id: u64,
    cancel: CancellationToken,
    stop: Arc<OnceLock<StopReason>>,
    request: GenerationRequest,
) -> Result<Arc<PostBatch>, EngineError> {
    let outcome = tokio::select! {
        () = cancel.cancelled() => None,
        products = fetch_after_delay(&shared) => Some(products),
    };
    let stopped = || match stop.get() {
        Some(StopReason::Cancelled) => EngineError::Cancelled,
        Some(StopReason::Superseded) | None => EngineError::Superseded,
    };
    let Some(products) = outcome else {
        return Err(stopped());
    };

    let batch = products.map(|products| Arc::new(build_batch(&products, &request)));

    let mut inner = shared.inner.lock().await;
    if inner.in_flight.as_ref().map(|run| run.run_id) != Some(run_id) {
        return Err(stopped());
    }
    inner.in_flight = None;

    match batch {
        Ok(batch) => {
            inner.batch = Some(Arc::clone(&batch));
            tracing::info!(run_id, batch_id = %batch.id, posts = batch.len(), "batch published");
            Ok(batch)
        }
        Err(e) => {
            tracing::warn!(
                run_id,
                provider = shared.provider.name(),
                error = %e,
                "catalog unavailable, keeping previous batch"
            );
            Err(EngineError::SourceUnavailable(e))
        }
    }
}

async fn fetch_after_delay(shared: &Shared) -> Result<Vec<Product>, CatalogError> {
    tokio::time::sleep(shared.delay).await;
    shared.provider.list_products().await
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
