//! Application state.

use std::sync::Arc;

use ytsum_engine::{EngineResult, Summarizer, VideoSummarizer};

use crate::config::ApiConfig;

/// Shared application state.
///
/// Handlers share only this immutable bundle; nothing in it outlives or
/// coordinates individual requests.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    /// Create new application state around an existing summarizer.
    pub fn new(config: ApiConfig, summarizer: Arc<dyn Summarizer>) -> Self {
        Self { config, summarizer }
    }

    /// Create state with the environment-configured engine.
    pub fn from_env(config: ApiConfig) -> EngineResult<Self> {
        let summarizer = Arc::new(VideoSummarizer::from_env()?);
        Ok(Self::new(config, summarizer))
    }
}
