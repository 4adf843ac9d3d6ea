//! Transcript acquisition over HTTP.
//!
//! Fetches the watch page, locates the caption track list embedded in the
//! player response, then downloads the track's timedtext XML and flattens
//! it into plain prose.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use ytsum_models::VideoId;

use crate::error::TranscriptError;

const DEFAULT_WATCH_BASE: &str = "https://www.youtube.com";

static TEXT_NODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("text node pattern compiles")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern compiles"));

/// One entry of the page's caption track list. Only the fields we read.
#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode", default)]
    language_code: String,
}

/// Fetches transcripts for video identifiers.
pub struct TranscriptFetcher {
    http: Client,
    watch_base: String,
}

impl Default for TranscriptFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptFetcher {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            watch_base: DEFAULT_WATCH_BASE.to_string(),
        }
    }

    /// Override the watch-page host (tests point this at a local server).
    pub fn with_watch_base(mut self, base: impl Into<String>) -> Self {
        self.watch_base = base.into();
        self
    }

    /// Fetch the transcript for `id` as one plain-text string.
    pub async fn fetch(&self, id: &VideoId) -> Result<String, TranscriptError> {
        let watch_url = format!("{}/watch?v={}", self.watch_base, id);
        let page = self.http.get(&watch_url).send().await?.text().await?;

        let tracks = parse_caption_tracks(&page)?;
        let track = pick_track(&tracks).ok_or(TranscriptError::NoCaptionTrack)?;
        debug!(lang = %track.language_code, "fetching caption track");

        let xml = self.http.get(&track.base_url).send().await?.text().await?;
        let transcript = parse_timedtext(&xml);
        if transcript.is_empty() {
            return Err(TranscriptError::Parse("caption track was empty".to_string()));
        }
        Ok(transcript)
    }
}

/// Extract the `captionTracks` JSON array from the watch page.
fn parse_caption_tracks(page: &str) -> Result<Vec<CaptionTrack>, TranscriptError> {
    const MARKER: &str = "\"captionTracks\":";

    let start = page
        .find(MARKER)
        .map(|i| i + MARKER.len())
        .ok_or(TranscriptError::CaptionsUnavailable)?;
    let json = balanced_array(&page[start..])
        .ok_or_else(|| TranscriptError::Parse("caption track list was truncated".to_string()))?;

    serde_json::from_str(json).map_err(|e| TranscriptError::Parse(e.to_string()))
}

/// Slice out a balanced `[...]` from the head of `s`.
///
/// Track entries nest arrays (display-name runs), so depth is tracked
/// instead of matching up to the first closing bracket. String literals and
/// escapes inside the JSON are honored.
fn balanced_array(s: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '[' if !in_string => depth += 1,
            ']' if !in_string => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
        if depth == 0 && !c.is_whitespace() {
            // The marker was not followed by an array.
            return None;
        }
    }
    None
}

/// Prefer an English track, else take the first one.
fn pick_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.language_code.starts_with("en"))
        .or_else(|| tracks.first())
}

/// Flatten timedtext XML into prose: segment texts joined with spaces,
/// inner markup stripped, entities decoded.
fn parse_timedtext(xml: &str) -> String {
    let mut segments = Vec::new();
    for caps in TEXT_NODE_RE.captures_iter(xml) {
        let raw = &caps[1];
        let stripped = TAG_RE.replace_all(raw, "");
        let text = decode_entities(&stripped);
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            segments.push(text);
        }
    }
    segments.join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_tracks_parse_despite_nested_arrays() {
        let page = r#"junk "captionTracks":[{"baseUrl":"https://example.com/tt?v=1","name":{"runs":[{"text":"English"}]},"languageCode":"en"}],"other":1 junk"#;
        let tracks = parse_caption_tracks(page).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].language_code, "en");
        assert_eq!(tracks[0].base_url, "https://example.com/tt?v=1");
    }

    #[test]
    fn page_without_caption_data_is_unavailable() {
        assert!(matches!(
            parse_caption_tracks("<html>no captions here</html>"),
            Err(TranscriptError::CaptionsUnavailable)
        ));
    }

    #[test]
    fn english_track_is_preferred() {
        let tracks = vec![
            CaptionTrack {
                base_url: "de".to_string(),
                language_code: "de".to_string(),
            },
            CaptionTrack {
                base_url: "en-US".to_string(),
                language_code: "en-US".to_string(),
            },
        ];
        assert_eq!(pick_track(&tracks).unwrap().base_url, "en-US");
    }

    #[test]
    fn first_track_is_the_fallback() {
        let tracks = vec![CaptionTrack {
            base_url: "fr".to_string(),
            language_code: "fr".to_string(),
        }];
        assert_eq!(pick_track(&tracks).unwrap().base_url, "fr");
    }

    #[test]
    fn timedtext_flattens_to_prose() {
        let xml = concat!(
            r#"<?xml version="1.0"?><transcript>"#,
            r#"<text start="0.0" dur="2.1">it&#39;s a &lt;b&gt;test</text>"#,
            r#"<text start="2.1" dur="1.0"><i>second</i> segment</text>"#,
            r#"</transcript>"#,
        );
        assert_eq!(parse_timedtext(xml), "it's a <b>test second segment");
    }

    #[test]
    fn empty_timedtext_yields_empty_string() {
        assert_eq!(parse_timedtext("<transcript></transcript>"), "");
    }
}
