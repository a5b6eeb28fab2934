use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    evaluations: AtomicU64,
    matches: AtomicU64,
    eval_errors: AtomicU64,
}

impl Metrics {
    pub fn record_evaluation(&self, matched: bool) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        if matched {
            self.matches.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_eval_error(&self) {
        self.eval_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }

    pub fn matches(&self) -> u64 {
        self.matches.load(Ordering::Relaxed)
    }

    pub fn eval_errors(&self) -> u64 {
        self.eval_errors.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        format!(
            "# TYPE stashwatch_evaluations_total counter\n\
stashwatch_evaluations_total {}\n\
# TYPE stashwatch_matches_total counter\n\
stashwatch_matches_total {}\n\
# TYPE stashwatch_eval_errors_total counter\n\
stashwatch_eval_errors_total {}\n",
            self.evaluations(),
            self.matches(),
            self.eval_errors()
        )
    }
}
