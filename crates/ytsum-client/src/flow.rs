//! The submission flow: extract, submit, render.

use tracing::warn;

use ytsum_models::{extract_video_id, SummarizeResponse};
use ytsum_render::render_summary;

use crate::client::SummarizeClient;
use crate::surface::SummarizeSurface;

pub const EMPTY_INPUT_ALERT: &str = "Please enter a YouTube URL";
pub const INVALID_URL_ALERT: &str = "Invalid YouTube URL";
pub const REQUEST_FAILED_TEXT: &str = "An error occurred while processing your request.";

/// Outcome of one submission, tagged by cause.
///
/// The surface shows the same coarse text the workflow always showed; the
/// variants exist so callers and tests can tell the causes apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The summary was rendered into the result area.
    Summary { markdown: String, html: String },
    /// The service answered with a user-visible error message.
    ServerError { message: String },
    /// Input was rejected before any network call was made.
    InputError(InputError),
    /// The request or its response failed; generic text was shown.
    RequestError,
}

/// Why input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The input field was empty.
    Empty,
    /// The input did not parse as a URL or named no recognized video host.
    InvalidUrl,
}

/// Hides the loading indicator when the request scope exits, on any path —
/// success, handled error, or panic.
struct LoadingGuard<'a, S: SummarizeSurface + ?Sized>(&'a S);

impl<S: SummarizeSurface + ?Sized> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.0.hide_loading();
    }
}

/// Run one submission: extract the identifier from `input`, post it to the
/// summarization endpoint, and put the result onto `surface`.
///
/// Input errors block the network call and are reported via a blocking
/// alert; everything that fails during or after the call lands in the
/// result area. Each run overwrites prior content entirely.
///
/// Concurrent submissions are not coordinated: if two run at once they
/// race, and whichever settles last owns the result area.
pub async fn submit<S>(input: &str, client: &SummarizeClient, surface: &S) -> SubmitOutcome
where
    S: SummarizeSurface + ?Sized,
{
    if input.trim().is_empty() {
        surface.alert(EMPTY_INPUT_ALERT);
        return SubmitOutcome::InputError(InputError::Empty);
    }

    let video_id = match extract_video_id(input) {
        Ok(Some(id)) if !id.is_empty() => id,
        Ok(_) | Err(_) => {
            surface.alert(INVALID_URL_ALERT);
            return SubmitOutcome::InputError(InputError::InvalidUrl);
        }
    };

    surface.show_loading();
    surface.clear_result();
    let _loading = LoadingGuard(surface);

    match client.summarize(&video_id).await {
        Ok(SummarizeResponse::Error { error }) => {
            surface.set_result_text(&error);
            SubmitOutcome::ServerError { message: error }
        }
        Ok(SummarizeResponse::Summary { summary }) => {
            let html = render_summary(&summary);
            surface.set_result_html(&html);
            SubmitOutcome::Summary {
                markdown: summary,
                html,
            }
        }
        Err(err) => {
            warn!("summarize request failed: {err}");
            surface.set_result_text(REQUEST_FAILED_TEXT);
            SubmitOutcome::RequestError
        }
    }
}
