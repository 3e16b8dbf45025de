use axum::{extract::State, response::Response};

use crate::{AppStateRef, caching::resolve_playlist, errors::ApiError, routes::raw_playlist};

/// Always the raw m3u, a stale cache is served silently when upstream fails
pub async fn get_watch(State(state): State<AppStateRef>) -> Result<Response, ApiError> {
    let resolution = resolve_playlist(&state)
        .await
        .map_err(ApiError::FetchFailed)?;

    Ok(raw_playlist(resolution.into_content()))
}
