// Stashwatch Application Layer

pub mod batch;
pub mod error;
pub mod metrics;
pub mod pipeline;

pub use batch::{spawn_batch, EvalOutcome};
pub use error::EvalError;
pub use metrics::Metrics;
pub use pipeline::EvaluationPipeline;
