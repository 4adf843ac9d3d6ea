//! Client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Failure causes stay distinguishable here even though the flow collapses
/// them into one generic user message.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("response was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
