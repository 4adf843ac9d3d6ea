//! Engine round-trip tests against mock upstream services.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ytsum_engine::{EngineError, GeminiClient, TranscriptError, TranscriptFetcher};
use ytsum_models::VideoId;

fn watch_page_with_track(track_url: &str) -> String {
    format!(
        r#"<html><script>var ytInitialPlayerResponse = {{"captions":{{"playerCaptionsTracklistRenderer":{{"captionTracks":[{{"baseUrl":"{track_url}","name":{{"runs":[{{"text":"English (auto-generated)"}}]}},"languageCode":"en"}}]}}}}}};</script></html>"#
    )
}

#[tokio::test]
async fn transcript_round_trip_flattens_captions() {
    let server = MockServer::start().await;
    let track_url = format!("{}/api/timedtext", server.uri());

    Mock::given(method("GET"))
        .and(path("/watch"))
        .and(query_param("v", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(watch_page_with_track(&track_url)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/timedtext"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<?xml version="1.0"?><transcript><text start="0" dur="2">hello</text><text start="2" dur="2">world &#39;again&#39;</text></transcript>"#,
        ))
        .mount(&server)
        .await;

    let fetcher = TranscriptFetcher::new().with_watch_base(server.uri());
    let transcript = fetcher.fetch(&VideoId::from_string("abc123")).await.unwrap();

    assert_eq!(transcript, "hello world 'again'");
}

#[tokio::test]
async fn missing_captions_surface_as_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nothing here</html>"))
        .mount(&server)
        .await;

    let fetcher = TranscriptFetcher::new().with_watch_base(server.uri());
    let err = fetcher
        .fetch(&VideoId::from_string("abc123"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptError::CaptionsUnavailable));
}

#[tokio::test]
async fn gemini_round_trip_returns_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "- point one\n- point two"}]}}
            ]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new("test-key".to_string(), "gemini-2.5-flash".to_string())
        .with_base_url(server.uri());
    let text = client.generate("summarize this").await.unwrap();

    assert_eq!(text, "- point one\n- point two");
}

#[tokio::test]
async fn gemini_http_error_is_an_ai_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = GeminiClient::new("test-key".to_string(), "gemini-2.5-flash".to_string())
        .with_base_url(server.uri());
    let err = client.generate("summarize this").await.unwrap_err();

    assert!(matches!(err, EngineError::AiFailed(_)));
    assert!(err.to_string().contains("429"));
}
