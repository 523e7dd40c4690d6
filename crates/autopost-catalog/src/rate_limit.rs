//! Bounded retry with exponential backoff and jitter for catalog requests.
//!
//! Only the storefront boundary retries; ranking, captioning and scheduling
//! are pure and never do.

use std::future::Future;
use std::time::Duration;

use crate::client::RetryPolicy;
use crate::error::CatalogError;

/// Upper bound on a single backoff sleep.
const MAX_DELAY_MS: u64 = 60_000;

/// Runs `operation`, retrying up to `policy.max_retries` times on errors for
/// which [`CatalogError::is_retriable`] holds.
///
/// | Retry | Sleep before it                       |
/// |-------|---------------------------------------|
/// | 1     | base × 2⁰ ± 25 % jitter               |
/// | 2     | base × 2¹ ± 25 % jitter               |
/// | 3     | base × 2² ± 25 % jitter               |
///
/// Sleeps are capped at [`MAX_DELAY_MS`]. Non-retriable errors return
/// immediately.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, CatalogError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !err.is_retriable() || attempt >= policy.max_retries {
                    return Err(err);
                }
                attempt += 1;
                let delay_ms = backoff_delay_ms(policy.backoff_base_ms, attempt);
                tracing::warn!(
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms,
                    error = %err,
                    "transient catalog error, retrying after backoff"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

fn backoff_delay_ms(base_ms: u64, attempt: u32) -> u64 {
    let computed = base_ms.saturating_mul(1u64 << attempt.saturating_sub(1).min(10));
    let capped = computed.min(MAX_DELAY_MS);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let jittered = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
    jittered
}
