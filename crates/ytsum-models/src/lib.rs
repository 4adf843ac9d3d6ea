//! Shared data models for the ytsum workspace.
//!
//! This crate provides:
//! - The `VideoId` token and the URL-based identifier extractor
//! - Wire types for the summarization endpoint

pub mod api;
pub mod extract;
pub mod video;

// Re-export common types
pub use api::{SummarizeRequest, SummarizeResponse};
pub use extract::{extract_video_id, resolve_video_id, ExtractError};
pub use video::VideoId;
