use std::time::Duration;

use log::debug;
use m3u_rs::format::directives;
use reqwest::Client;
use thiserror::Error;

pub struct Fetcher {
    http_client: Client,
}

impl Fetcher {
    pub fn new(http_client: Client) -> Self {
        Fetcher { http_client }
    }

    pub fn build_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
    }

    /// Single attempt, the caller decides what to do on failure
    pub async fn fetch(&self, origin: impl AsRef<str>) -> Result<String, FetchError> {
        let origin = origin.as_ref();
        debug!("Fetching playlist from {}", origin);

        let response = self.http_client.get(origin).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::RequestNotSuccess(response.status().as_u16()));
        }

        let content = response.text().await?;
        if !content.starts_with(directives::EXTM3U) {
            return Err(FetchError::InvalidFormat);
        }

        debug!("Fetched {} bytes from {}", content.len(), origin);
        Ok(content)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    RequestNotSuccess(u16),
    #[error("Invalid M3U format")]
    InvalidFormat,
}

impl FetchError {
    /// Upstream unreachable, timed out or answered with a non-2xx status
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Request(_) | Self::RequestNotSuccess(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn fetcher() -> Fetcher {
        Fetcher::new(Fetcher::build_client("M3U-Fetcher/1.0", Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn test_fetch_ok() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/list.m3u")
            .match_header("user-agent", "M3U-Fetcher/1.0")
            .with_status(200)
            .with_body("#EXTM3U\n#EXTINF:-1,A\nhttp://example.com/a\n")
            .create_async()
            .await;

        let content = fetcher()
            .fetch(format!("{}/list.m3u", server.url()))
            .await
            .unwrap();

        assert!(content.starts_with("#EXTM3U"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_bad_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/list.m3u")
            .with_status(503)
            .create_async()
            .await;

        let err = fetcher()
            .fetch(format!("{}/list.m3u", server.url()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::RequestNotSuccess(503)));
        assert!(err.is_network());
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[tokio::test]
    async fn test_fetch_invalid_format() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/list.m3u")
            .with_status(200)
            .with_body("<html>not a playlist</html>")
            .create_async()
            .await;

        let err = fetcher()
            .fetch(format!("{}/list.m3u", server.url()))
            .await
            .unwrap_err();

        assert!(err.is_format());
        assert!(!err.is_network());
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        // reserved TEST-NET address on a closed port
        let fetcher = Fetcher::new(
            Fetcher::build_client("M3U-Fetcher/1.0", Duration::from_millis(200)).unwrap(),
        );
        let err = fetcher
            .fetch("http://192.0.2.1:9/list.m3u")
            .await
            .unwrap_err();

        assert!(err.is_network());
    }
}
