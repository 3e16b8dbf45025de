use m3u_rs::format::M3uPlaylist;
use tokio::task::JoinError;

/// Parse on the blocking pool, channel lists can run into the tens of thousands of lines
pub async fn parse_m3u_async(content: String) -> Result<M3uPlaylist, JoinError> {
    tokio::task::spawn_blocking(move || m3u_rs::parse_playlist(content)).await
}
