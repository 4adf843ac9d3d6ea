//! Client side of the summarization workflow.
//!
//! This crate provides:
//! - [`SummarizeClient`]: one `POST /summarize` round trip per call
//! - [`SummarizeSurface`]: explicit handles to the UI pieces the flow
//!   touches, instead of ambient shared page state
//! - [`submit`]: the Extractor → Client → Renderer flow with a tagged
//!   outcome and a guaranteed loading-indicator cleanup

pub mod client;
pub mod error;
pub mod flow;
pub mod surface;

pub use client::{SummarizeClient, SummarizeClientConfig};
pub use error::{ClientError, ClientResult};
pub use flow::{
    submit, InputError, SubmitOutcome, EMPTY_INPUT_ALERT, INVALID_URL_ALERT, REQUEST_FAILED_TEXT,
};
pub use surface::SummarizeSurface;
