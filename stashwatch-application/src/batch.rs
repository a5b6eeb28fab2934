// Batch evaluation
//
// Independent (item, filter) pairs share no mutable state, so each gets
// its own task; completions arrive on an unbounded channel. Dropping
// the receiver abandons the remaining evaluations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::warn;

use stashwatch_domain::{CurrencyRates, Filter, FormattedItem, Item, RuntimeConfig};

use crate::metrics::Metrics;
use crate::pipeline::EvaluationPipeline;

/// One completed evaluation. `matched` is `None` both for ordinary
/// non-matches and for evaluations whose collaborator failed; failures
/// are logged and counted but never abort the rest of the batch.
#[derive(Debug, Clone, Serialize)]
pub struct EvalOutcome {
    pub filter_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub matched: Option<FormattedItem>,
}

pub fn spawn_batch(
    pipeline: Arc<EvaluationPipeline>,
    pairs: Vec<(Item, Arc<Filter>)>,
    rates: Arc<CurrencyRates>,
    config: RuntimeConfig,
    metrics: Arc<Metrics>,
) -> mpsc::UnboundedReceiver<EvalOutcome> {
    let (tx, rx) = mpsc::unbounded_channel();
    for (item, filter) in pairs {
        let pipeline = pipeline.clone();
        let rates = rates.clone();
        let config = config.clone();
        let metrics = metrics.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let matched = match pipeline.evaluate(&item, &filter, &rates, &config).await {
                Ok(result) => result,
                Err(err) => {
                    metrics.record_eval_error();
                    warn!("evaluation failed for filter {}: {}", filter.id, err);
                    None
                }
            };
            metrics.record_evaluation(matched.is_some());
            let _ = tx.send(EvalOutcome {
                filter_id: filter.id.clone(),
                evaluated_at: Utc::now(),
                matched,
            });
        });
    }
    rx
}
