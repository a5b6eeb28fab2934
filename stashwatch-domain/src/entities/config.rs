// Runtime configuration consumed by the evaluation stages

/// Read-only evaluation-time settings. Passed into the price stage
/// explicitly instead of being read from process-wide state.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// When set, currency rates are looked up under a "beta-" league key.
    pub use_beta: bool,
}
