//! Post generation: ranking, caption synthesis, scheduling, and the
//! stateful engine that ties them to a catalog provider.

pub mod batch;
pub mod caption;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod scheduler;
pub mod session;

pub use batch::{build_batch, GeneratedPost, GenerationRequest, PostBatch, PostStatus, RenderPayload};
pub use caption::synthesize;
pub use engine::{EngineState, GenerationHandle, PostEngine};
pub use error::EngineError;
pub use ranking::rank;
pub use scheduler::{display_date, schedule, ScheduledSlot, TimeSlot};
pub use session::Session;
