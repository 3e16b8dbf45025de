use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use async_trait::async_trait;
use log::{debug, warn};
use tempfile::{NamedTempFile, PersistError};
use thiserror::Error;
use tokio::{fs, sync::RwLock, task::JoinError};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache io error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to replace cache file: {0}")]
    Persist(#[from] PersistError),
    #[error("Cache task failed: {0}")]
    Join(#[from] JoinError),
}

/// A record written at `written` is fresh while `now - written < max_age`
pub fn is_fresh_at(written: SystemTime, now: SystemTime, max_age: Duration) -> bool {
    match now.duration_since(written) {
        Ok(age) => age < max_age,
        // written in the future, clock went backwards
        Err(_) => true,
    }
}

/// Single slot store holding the last fetched playlist text
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn last_write(&self) -> Result<Option<SystemTime>, CacheError>;

    /// Stored content, regardless of freshness
    async fn read(&self) -> Result<Option<String>, CacheError>;

    /// Replace the record and its timestamp
    async fn write(&self, content: &str) -> Result<(), CacheError>;

    async fn is_fresh(&self, max_age: Duration) -> bool {
        match self.last_write().await {
            Ok(Some(written)) => is_fresh_at(written, SystemTime::now(), max_age),
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to check cache freshness: {}", e);
                false
            }
        }
    }
}

/// File backed store, the file mtime is the write timestamp
pub struct FileCacheStore {
    path: PathBuf,
}

impl FileCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    async fn last_write(&self) -> Result<Option<SystemTime>, CacheError> {
        match fs::metadata(&self.path).await {
            Ok(metadata) => Ok(Some(metadata.modified()?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn read(&self) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, content: &str) -> Result<(), CacheError> {
        let path = self.path.clone();
        let content = content.to_owned();

        tokio::task::spawn_blocking(move || -> Result<(), CacheError> {
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
                _ => PathBuf::from("."),
            };
            std::fs::create_dir_all(&dir)?;

            // write aside, then rename over the target so readers never see a partial file
            let mut file = NamedTempFile::new_in(&dir)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;
            // temp files are created 0600, the cache is meant to be world readable
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                file.as_file()
                    .set_permissions(std::fs::Permissions::from_mode(0o644))?;
            }
            file.persist(&path)?;

            debug!("Cache written to {}", path.display());
            Ok(())
        })
        .await?
    }
}

struct MemoryRecord {
    content: String,
    written: SystemTime,
}

/// In-process store, lost on restart
#[derive(Default)]
pub struct MemoryCacheStore {
    record: RwLock<Option<MemoryRecord>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `content` as if it was written at `written`
    pub async fn write_at(&self, content: &str, written: SystemTime) {
        *self.record.write().await = Some(MemoryRecord {
            content: content.to_owned(),
            written,
        });
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn last_write(&self) -> Result<Option<SystemTime>, CacheError> {
        Ok(self.record.read().await.as_ref().map(|x| x.written))
    }

    async fn read(&self) -> Result<Option<String>, CacheError> {
        Ok(self.record.read().await.as_ref().map(|x| x.content.clone()))
    }

    async fn write(&self, content: &str) -> Result<(), CacheError> {
        self.write_at(content, SystemTime::now()).await;
        Ok(())
    }
}
