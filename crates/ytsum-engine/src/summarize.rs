//! Transcript-to-summary pipeline.

use async_trait::async_trait;
use tracing::info;

use ytsum_models::VideoId;

use crate::error::EngineResult;
use crate::gemini::GeminiClient;
use crate::transcript::TranscriptFetcher;

/// Anything that can produce a markdown summary for a video.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, id: &VideoId) -> EngineResult<String>;
}

fn build_prompt(transcript: &str) -> String {
    format!(
        "Create a clear summary of this transcript in bullet points.\n\
         - Use simple bullet points\n\
         - Each main point should be a level-1 bullet point\n\
         - Sub-points should use level-2 bullet points\n\
         - Keep language clear and concise\n\
         - Don't use any special formatting (bold, italic, etc.)\n\
         \n\
         Transcript:\n\
         {transcript}"
    )
}

/// Normalize model output so every non-empty line is a markdown bullet.
///
/// Existing `- ` bullets are kept, `•` bullets are converted, and any other
/// line gets a bullet prefixed.
pub fn normalize_bullets(raw: &str) -> String {
    let mut lines = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("- ") {
            lines.push(line.to_string());
        } else if let Some(rest) = line.strip_prefix('•') {
            lines.push(format!("- {}", rest.trim()));
        } else {
            lines.push(format!("- {}", line));
        }
    }
    lines.join("\n")
}

/// Summarizer backed by the transcript fetcher and Gemini.
pub struct VideoSummarizer {
    transcripts: TranscriptFetcher,
    gemini: GeminiClient,
}

impl VideoSummarizer {
    pub fn new(transcripts: TranscriptFetcher, gemini: GeminiClient) -> Self {
        Self {
            transcripts,
            gemini,
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> EngineResult<Self> {
        Ok(Self::new(TranscriptFetcher::new(), GeminiClient::from_env()?))
    }
}

#[async_trait]
impl Summarizer for VideoSummarizer {
    async fn summarize(&self, id: &VideoId) -> EngineResult<String> {
        let transcript = self.transcripts.fetch(id).await?;
        info!(video = %id, chars = transcript.len(), "transcript fetched");

        let raw = self.gemini.generate(&build_prompt(&transcript)).await?;
        Ok(normalize_bullets(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_bullets_are_kept() {
        assert_eq!(normalize_bullets("- one\n- two"), "- one\n- two");
    }

    #[test]
    fn dot_bullets_are_converted() {
        assert_eq!(normalize_bullets("• one\n•two"), "- one\n- two");
    }

    #[test]
    fn bare_lines_get_a_bullet() {
        assert_eq!(
            normalize_bullets("Main point\nAnother point"),
            "- Main point\n- Another point"
        );
    }

    #[test]
    fn blank_lines_are_dropped() {
        assert_eq!(normalize_bullets("- one\n\n\n- two"), "- one\n- two");
    }

    #[test]
    fn prompt_carries_the_transcript() {
        let prompt = build_prompt("the transcript body");
        assert!(prompt.contains("bullet points"));
        assert!(prompt.ends_with("the transcript body"));
    }
}
