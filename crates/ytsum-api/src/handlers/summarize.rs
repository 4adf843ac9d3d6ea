//! Summarization endpoint handler.

use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

use ytsum_engine::EngineError;
use ytsum_models::{resolve_video_id, SummarizeRequest, SummarizeResponse};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Handle `POST /summarize`.
///
/// A transcript problem is an answer, not a failure: it comes back as 200
/// with a user-visible `error` field. Summarization failures are 500s,
/// which the submission flow's catch-all turns into generic text.
pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> ApiResult<Json<SummarizeResponse>> {
    let Some(video_id) = resolve_video_id(&request.video_url) else {
        return Err(ApiError::bad_request(
            "video_url must name a video or carry an identifier",
        ));
    };

    info!(video = %video_id, "summarize request");

    match state.summarizer.summarize(&video_id).await {
        Ok(summary) => Ok(Json(SummarizeResponse::summary(summary))),
        Err(err @ EngineError::Transcript(_)) => {
            warn!(video = %video_id, "transcript unavailable: {err}");
            Ok(Json(SummarizeResponse::error(err.to_string())))
        }
        Err(err) => {
            warn!(video = %video_id, "summarization failed: {err}");
            Err(err.into())
        }
    }
}
