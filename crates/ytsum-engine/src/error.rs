//! Engine error types.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Transcript acquisition failed. The rendered message is user-visible
    /// data: the endpoint returns it in the response body rather than as a
    /// transport error.
    #[error("Error getting transcript: {0}")]
    Transcript(#[from] TranscriptError),

    #[error("AI summarization failed: {0}")]
    AiFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl EngineError {
    pub fn ai_failed(msg: impl Into<String>) -> Self {
        Self::AiFailed(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Why a transcript could not be produced.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("video page did not include caption data")]
    CaptionsUnavailable,

    #[error("no usable caption track")]
    NoCaptionTrack,

    #[error("could not parse caption payload: {0}")]
    Parse(String),
}
