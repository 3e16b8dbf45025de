use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Result;
use log::info;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://raw.githubusercontent.com/alex4528/m3u/refs/heads/main/artl.m3u";
pub const DEFAULT_CACHE_DIR: &str = "/tmp/m3u-cache";
pub const DEFAULT_CACHE_FILE: &str = "cached_playlist.m3u";
pub const DEFAULT_USER_AGENT: &str = "M3U-Fetcher/1.0";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub listen_addr: Option<String>,
    pub upstream_url: Option<Url>,
    pub cache_dir: Option<PathBuf>,
    pub cache_file: Option<String>,
    #[serde(default)]
    pub cache_backend: CacheBackend,
    /// Seconds
    pub cache_ttl: Option<u32>,
    /// Seconds
    pub fetch_timeout: Option<u32>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    File,
    Memory,
}

impl Config {
    pub fn listen_addr(&self) -> &str {
        self.listen_addr.as_deref().unwrap_or(DEFAULT_LISTEN_ADDR)
    }

    pub fn upstream_url(&self) -> &str {
        self.upstream_url
            .as_ref()
            .map(Url::as_str)
            .unwrap_or(DEFAULT_UPSTREAM_URL)
    }

    pub fn cache_path(&self) -> PathBuf {
        let dir = self
            .cache_dir
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_CACHE_DIR));
        dir.join(self.cache_file.as_deref().unwrap_or(DEFAULT_CACHE_FILE))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl.unwrap_or(60 * 60).into()) // 1h
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout.unwrap_or(5).into()) // 5s
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = match File::open(path.as_ref()) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(
                "Config {} not found, using defaults",
                path.as_ref().display()
            );
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config: Config = serde_yaml::from_reader(file)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr(), DEFAULT_LISTEN_ADDR);
        assert_eq!(config.upstream_url(), DEFAULT_UPSTREAM_URL);
        assert_eq!(
            config.cache_path(),
            Path::new("/tmp/m3u-cache/cached_playlist.m3u")
        );
        assert_eq!(config.cache_backend, CacheBackend::File);
        assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent(), "M3U-Fetcher/1.0");
    }

    #[test]
    fn test_parse_yaml() {
        let config: Config = serde_yaml::from_str(
            r#"
listenAddr: 127.0.0.1:8080
upstreamUrl: http://example.com/list.m3u
cacheDir: /var/cache/m3u
cacheBackend: memory
cacheTtl: 60
fetchTimeout: 2
"#,
        )
        .unwrap();

        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.upstream_url(), "http://example.com/list.m3u");
        assert_eq!(
            config.cache_path(),
            Path::new("/var/cache/m3u/cached_playlist.m3u")
        );
        assert_eq!(config.cache_backend, CacheBackend::Memory);
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(2));
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config("/nonexistent/m3ucache/config.yml").unwrap();
        assert_eq!(config.listen_addr(), DEFAULT_LISTEN_ADDR);
    }
}
