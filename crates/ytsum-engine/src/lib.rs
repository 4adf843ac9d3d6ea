//! Backend core: turn a video identifier into a bullet-point summary.
//!
//! The pipeline has two stages — fetch the transcript over HTTP, then
//! summarize it with the Gemini API — plus normalization of the model
//! output into consistent markdown bullets.

pub mod error;
pub mod gemini;
pub mod summarize;
pub mod transcript;

pub use error::{EngineError, EngineResult, TranscriptError};
pub use gemini::GeminiClient;
pub use summarize::{normalize_bullets, Summarizer, VideoSummarizer};
pub use transcript::TranscriptFetcher;
