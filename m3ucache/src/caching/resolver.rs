use log::{debug, error, warn};

use crate::{AppState, caching::FetchError};

/// Where the served playlist text came from
#[derive(Debug)]
pub enum Resolution {
    /// Fresh cache hit, upstream untouched
    Cached(String),
    /// Fetched from upstream and written to the cache
    Fetched(String),
    /// Upstream failed, serving whatever the cache held
    Fallback { content: String, cause: FetchError },
}

impl Resolution {
    pub fn into_content(self) -> String {
        match self {
            Self::Cached(content) | Self::Fetched(content) | Self::Fallback { content, .. } => {
                content
            }
        }
    }

    pub fn is_cached(&self) -> bool {
        !matches!(self, Self::Fetched(_))
    }
}

async fn read_cache(state: &AppState) -> Option<String> {
    match state.cache.read().await {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read cache: {}", e);
            None
        }
    }
}

fn log_fetch_failure(cause: &FetchError) {
    if cause.is_network() {
        warn!("Upstream unreachable: {}", cause);
    } else if cause.is_format() {
        warn!("Upstream sent something that is not a playlist");
    }
}

/// Fresh cache, else upstream, else stale cache.
///
/// Fails only when the upstream fetch failed and nothing is cached.
pub async fn resolve_playlist(state: &AppState) -> Result<Resolution, FetchError> {
    if state.cache.is_fresh(state.config.cache_ttl()).await {
        if let Some(content) = read_cache(state).await {
            debug!("Cache hit");
            return Ok(Resolution::Cached(content));
        }
    }

    debug!("Cache miss, fetching {}", state.config.upstream_url());
    match state.fetcher.fetch(state.config.upstream_url()).await {
        Ok(content) => {
            if let Err(e) = state.cache.write(&content).await {
                error!("Failed to update cache: {}", e);
            }
            Ok(Resolution::Fetched(content))
        }
        Err(cause) => {
            log_fetch_failure(&cause);
            match read_cache(state).await {
                Some(content) => {
                    warn!("Falling back to cached playlist");
                    Ok(Resolution::Fallback { content, cause })
                }
                None => {
                    error!("Nothing is cached, giving up");
                    Err(cause)
                }
            }
        }
    }
}
