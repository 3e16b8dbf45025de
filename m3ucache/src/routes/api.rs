use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use m3u_rs::format::M3uPlaylist;
use serde::Serialize;

use crate::{
    AppStateRef,
    caching::{Resolution, resolve_playlist},
    errors::ApiError,
    internal_error_with_log,
    routes::raw_playlist,
    transfer::{ClientKind, classify_client, parse_m3u_async},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistMetadata<'a> {
    source: &'a str,
    cached: bool,
    channel_count: usize,
}

#[derive(Serialize)]
struct PlaylistBody<'a> {
    success: bool,
    metadata: PlaylistMetadata<'a>,
    #[serde(flatten)]
    playlist: M3uPlaylist,
}

#[derive(Serialize)]
struct FallbackBody {
    success: bool,
    error: String,
    fallback: &'static str,
    content: M3uPlaylist,
}

/// Raw m3u for players, parsed JSON for browsers
pub async fn get_api(
    State(state): State<AppStateRef>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let resolution = resolve_playlist(&state)
        .await
        .map_err(ApiError::Unavailable)?;

    match resolution {
        Resolution::Fallback { content, cause } => {
            // the cache was read once during resolution, no second read here
            let playlist = parse_m3u_async(content)
                .await
                .map_err(internal_error_with_log!("Parse cached m3u"))?;

            Ok(Json(FallbackBody {
                success: false,
                error: cause.to_string(),
                fallback: "cached",
                content: playlist,
            })
            .into_response())
        }
        resolution => {
            if classify_client(&headers) == ClientKind::Player {
                return Ok(raw_playlist(resolution.into_content()));
            }

            let cached = resolution.is_cached();
            let playlist = parse_m3u_async(resolution.into_content())
                .await
                .map_err(internal_error_with_log!("Parse m3u"))?;

            Ok(Json(PlaylistBody {
                success: true,
                metadata: PlaylistMetadata {
                    source: state.config.upstream_url(),
                    cached,
                    channel_count: playlist.channels.len(),
                },
                playlist,
            })
            .into_response())
        }
    }
}
