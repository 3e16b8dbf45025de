use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::{
    CacheBackend, Config,
    caching::{CacheStore, Fetcher, FileCacheStore, MemoryCacheStore},
};

pub type AppStateRef = Arc<AppState>;
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: Arc<dyn CacheStore>,
    pub fetcher: Fetcher,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let cache: Arc<dyn CacheStore> = match config.cache_backend {
            CacheBackend::File => {
                let store = FileCacheStore::new(config.cache_path());
                info!("Caching playlist in {}", store.path().display());
                Arc::new(store)
            }
            CacheBackend::Memory => {
                info!("Caching playlist in memory");
                Arc::new(MemoryCacheStore::new())
            }
        };

        Self::with_cache(config, cache)
    }

    pub fn with_cache(config: Config, cache: Arc<dyn CacheStore>) -> Result<Self> {
        let http_client = Fetcher::build_client(config.user_agent(), config.fetch_timeout())?;

        Ok(Self {
            config: Arc::new(config),
            cache,
            fetcher: Fetcher::new(http_client),
        })
    }
}
