use std::{
    collections::HashSet,
    fmt,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use futures_lite::io::AsyncWriteExt;

pub const ALERT_LOG_FILE_NAME: &str = "alerts_sent.txt";

#[derive(Debug)]
pub enum AlertLogError {
    IoError(Error),
    CriticalError(String),
}

impl From<Error> for AlertLogError {
    fn from(err: Error) -> Self {
        AlertLogError::IoError(err)
    }
}

impl fmt::Display for AlertLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertLogError::IoError(e) => write!(f, "{}", e),
            AlertLogError::CriticalError(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for AlertLogError {}

/// Append-only record of announced premieres.
///
/// One dedup key per line, no header. The file only ever grows: each
/// successful delivery appends exactly one line, and nothing rewrites it.
/// Concurrent runs sharing a file are not coordinated.
pub struct AlertLogManager {
    path: PathBuf,
    keys: HashSet<String>,
}

impl AlertLogManager {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            keys: HashSet::new(),
        }
    }

    pub fn default_path() -> PathBuf {
        crate::config::data_dir().join(ALERT_LOG_FILE_NAME)
    }

    /// Reads all recorded keys.
    ///
    /// A missing file means nothing was announced yet and yields an empty
    /// set. Lines are trimmed and blank lines ignored.
    pub async fn load(self) -> Result<Self, AlertLogError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(AlertLogError::IoError(e)),
        };

        let keys = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            path: self.path,
            keys,
        })
    }

    pub fn has(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn keys(&self) -> &HashSet<String> {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durably appends one key.
    ///
    /// The line is flushed and synced to disk before this returns, so a
    /// crash right after a delivery cannot lose the record of it. Each call
    /// stands alone: a failure here leaves later calls unaffected.
    ///
    /// The key is trimmed before writing, so the in-memory set always
    /// matches what [`AlertLogManager::load`] reads back.
    pub async fn record(&mut self, key: &str) -> Result<(), AlertLogError> {
        let key = key.trim();
        if key.is_empty() || key.contains(['\n', '\r']) {
            return Err(AlertLogError::CriticalError(format!(
                "Refusing to record malformed alert key {:?}",
                key
            )));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let mut file = async_fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("{}\n", key).as_bytes()).await?;
        file.flush().await?;
        file.sync_all().await?;

        self.keys.insert(key.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = AlertLogManager::new(dir.path().join("nope.txt"))
            .load()
            .await
            .unwrap();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn malformed_key_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = AlertLogManager::new(dir.path().join("alerts.txt"));

        let err = log.record("Alpha|S1\nBeta|S2").await.unwrap_err();
        assert!(matches!(err, AlertLogError::CriticalError(_)));
        assert!(!dir.path().join("alerts.txt").exists());
    }
}
