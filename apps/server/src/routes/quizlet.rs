//! Quizlet set export endpoint

use axum::{
    extract::{Path, State},
    http::header::CACHE_CONTROL,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{saved_message, NO_DATA_MESSAGE};
use crate::services::{document, pipeline};
use crate::AppState;

/// GET /quizlet-set/:set_id
///
/// Responds as soon as the set is loaded; the document is written in the
/// background, so it may not exist yet when the response arrives. Loading runs
/// in its own task and a panic there becomes a 500.
pub async fn export_set(
    State(state): State<AppState>,
    Path(set_id): Path<String>,
) -> Result<Response> {
    let url = state.config.set_url(&set_id);
    tracing::info!("Exporting set {} from {}", set_id, url);

    let fetcher = state.fetcher.clone();
    let set = tokio::spawn(async move { pipeline::load_set(fetcher.as_ref(), &url).await })
        .await?
        .ok_or_else(|| ApiError::NotFound(NO_DATA_MESSAGE.to_string()))?;

    let output_path = state.config.output_path.clone();
    let message = saved_message(&output_path);
    document::spawn_save(set, output_path);

    Ok((
        [(CACHE_CONTROL, "public, max-age=0")],
        Json(message),
    )
        .into_response())
}
