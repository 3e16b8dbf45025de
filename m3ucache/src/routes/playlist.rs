use axum::{extract::State, response::Response};
use log::error;

use crate::{AppStateRef, errors::ApiError, routes::raw_playlist};

/// Serves whatever is cached, never touches upstream
pub async fn get_playlist(State(state): State<AppStateRef>) -> Result<Response, ApiError> {
    match state.cache.read().await {
        Ok(Some(content)) => Ok(raw_playlist(content)),
        Ok(None) => Err(ApiError::NotCached),
        Err(e) => {
            error!("Read cache: {}", e);
            Err(ApiError::NotCached)
        }
    }
}
