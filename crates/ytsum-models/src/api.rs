//! Wire types for the summarization endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /summarize`.
///
/// Created fresh per user action and discarded once the round trip
/// completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Video identifier; the endpoint also accepts a full video URL.
    pub video_url: String,
}

impl SummarizeRequest {
    pub fn new(video_url: impl Into<String>) -> Self {
        Self {
            video_url: video_url.into(),
        }
    }
}

/// Response of `POST /summarize`: a user-visible error message or a
/// markdown summary.
///
/// When a body carries both fields the error wins, matching the order the
/// submission flow checks them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummarizeResponse {
    Error { error: String },
    Summary { summary: String },
}

impl SummarizeResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn summary(markdown: impl Into<String>) -> Self {
        Self::Summary {
            summary: markdown.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_under_the_fixed_key() {
        let body = serde_json::to_string(&SummarizeRequest::new("abc123")).unwrap();
        assert_eq!(body, r#"{"video_url":"abc123"}"#);
    }

    #[test]
    fn error_body_deserializes_to_error() {
        let parsed: SummarizeResponse =
            serde_json::from_str(r#"{"error":"Video not found"}"#).unwrap();
        assert_eq!(parsed, SummarizeResponse::error("Video not found"));
    }

    #[test]
    fn summary_body_deserializes_to_summary() {
        let parsed: SummarizeResponse =
            serde_json::from_str(r#"{"summary":"- item"}"#).unwrap();
        assert_eq!(parsed, SummarizeResponse::summary("- item"));
    }

    #[test]
    fn error_wins_when_both_fields_are_present() {
        let parsed: SummarizeResponse =
            serde_json::from_str(r#"{"error":"nope","summary":"- item"}"#).unwrap();
        assert_eq!(parsed, SummarizeResponse::error("nope"));
    }

    #[test]
    fn unrelated_body_fails_to_deserialize() {
        assert!(serde_json::from_str::<SummarizeResponse>(r#"{"detail":"boom"}"#).is_err());
    }
}
