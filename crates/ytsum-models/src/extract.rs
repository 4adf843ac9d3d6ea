//! Video identifier extraction from pasted URLs.

use url::Url;

use crate::video::VideoId;

/// Errors that can occur during identifier extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// Input did not parse as a URL at all.
    #[error("not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Extract a video identifier from a pasted URL.
///
/// - host `youtu.be`: the first path segment, leading slash removed
/// - host containing `youtube.com`: the `v` query parameter, which may be
///   absent, yielding `None`
/// - any other host: `None`
///
/// Malformed input fails with [`ExtractError::InvalidUrl`]; callers treat
/// that as invalid input, never as an operation error. No network access,
/// no side effects.
pub fn extract_video_id(input: &str) -> Result<Option<VideoId>, ExtractError> {
    let parsed = Url::parse(input.trim())?;

    let host = match parsed.host_str() {
        Some(h) => h.to_ascii_lowercase(),
        None => return Ok(None),
    };

    if host == "youtu.be" {
        let id = parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .unwrap_or("");
        if id.is_empty() {
            return Ok(None);
        }
        return Ok(Some(VideoId::from_string(id)));
    }

    if host.contains("youtube.com") {
        let id = parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| VideoId::from_string(value.into_owned()));
        return Ok(id);
    }

    Ok(None)
}

/// Server-side identifier resolution.
///
/// The submission flow has usually extracted the identifier already, so the
/// endpoint accepts both full video URLs and bare tokens: a recognized
/// YouTube URL is extracted, input that mentions a video host but yields no
/// identifier is rejected, and any other non-empty input passes through
/// unchanged as an opaque identifier.
pub fn resolve_video_id(input: &str) -> Option<VideoId> {
    match extract_video_id(input) {
        Ok(Some(id)) => Some(id),
        Ok(None) | Err(_) if looks_like_video_host(input) => None,
        Ok(None) | Err(_) => {
            let token = input.trim();
            if token.is_empty() {
                None
            } else {
                Some(VideoId::from_string(token))
            }
        }
    }
}

fn looks_like_video_host(input: &str) -> bool {
    let input = input.to_ascii_lowercase();
    input.contains("youtube.com") || input.contains("youtu.be")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_link_returns_first_path_segment() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc123").unwrap(),
            Some(VideoId::from_string("abc123"))
        );
    }

    #[test]
    fn short_link_ignores_trailing_segments_and_query() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc123/extra?t=42").unwrap(),
            Some(VideoId::from_string("abc123"))
        );
    }

    #[test]
    fn watch_url_returns_v_parameter() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=xyz789").unwrap(),
            Some(VideoId::from_string("xyz789"))
        );
    }

    #[test]
    fn watch_url_keeps_v_among_other_parameters() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PL1&v=xyz789&t=10").unwrap(),
            Some(VideoId::from_string("xyz789"))
        );
    }

    #[test]
    fn watch_url_without_v_yields_none() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/playlist?list=PL1").unwrap(),
            None
        );
    }

    #[test]
    fn unrelated_host_yields_none() {
        assert_eq!(extract_video_id("https://vimeo.com/12345").unwrap(), None);
    }

    #[test]
    fn bare_short_link_host_yields_none() {
        assert_eq!(extract_video_id("https://youtu.be/").unwrap(), None);
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        assert!(matches!(
            extract_video_id("not a url"),
            Err(ExtractError::InvalidUrl(_))
        ));
    }

    #[test]
    fn resolve_extracts_recognized_urls() {
        assert_eq!(
            resolve_video_id("https://youtu.be/abc123"),
            Some(VideoId::from_string("abc123"))
        );
    }

    #[test]
    fn resolve_passes_bare_tokens_through() {
        assert_eq!(
            resolve_video_id("dQw4w9WgXcQ"),
            Some(VideoId::from_string("dQw4w9WgXcQ"))
        );
    }

    #[test]
    fn resolve_rejects_recognized_urls_without_an_id() {
        assert_eq!(resolve_video_id("https://www.youtube.com/feed/library"), None);
    }

    #[test]
    fn resolve_rejects_scheme_less_video_urls() {
        assert_eq!(resolve_video_id("youtube.com/watch?v=abc123"), None);
    }

    #[test]
    fn resolve_rejects_empty_input() {
        assert_eq!(resolve_video_id("   "), None);
    }
}
