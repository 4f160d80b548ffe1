use std::sync::Arc;

use crate::{config::Config, services::Recommender};

/// Shared application state
///
/// The recommender is never written after startup, so handlers share it
/// through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    /// Result count when a query omits `k`
    pub default_k: usize,
    /// Largest accepted `k`
    pub max_k: usize,
}

impl AppState {
    /// Creates state using the configured result limits
    pub fn new(recommender: Recommender, config: &Config) -> Self {
        Self::with_limits(recommender, config.default_k, config.max_k)
    }

    pub fn with_limits(recommender: Recommender, default_k: usize, max_k: usize) -> Self {
        Self {
            recommender: Arc::new(recommender),
            default_k,
            max_k,
        }
    }
}
