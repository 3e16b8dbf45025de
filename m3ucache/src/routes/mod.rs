use axum::{
    Router,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::AppStateRef;

mod api;
mod playlist;
mod watch;

/// Content type of every raw playlist response
pub const PLAYLIST_MIME: &str = "application/vnd.apple.mpegurl";

fn raw_playlist(content: String) -> Response {
    ([(header::CONTENT_TYPE, PLAYLIST_MIME)], content).into_response()
}

pub fn get_routes(app_state: &AppStateRef) -> Router {
    Router::new()
        .route("/api/api", get(api::get_api))
        .route("/api/playlist", get(playlist::get_playlist))
        .route("/api/watchM3u", get(watch::get_watch))
        .with_state(app_state.clone())
}
