//! Append-only response log.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Failure to open or write the response log.
#[derive(Debug, Error)]
pub enum LogWriteError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Appends raw upstream bodies to a text file, one body per line.
///
/// The file is opened for every write and closed right after, so no handle
/// outlives a single fetch. Each line is written with one `write_all` call on
/// an append-mode handle; concurrent writers may interleave lines but never
/// split one.
#[derive(Debug, Clone)]
pub struct ResponseLog {
    path: PathBuf,
}

impl ResponseLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `body` followed by a newline.
    ///
    /// Failures are logged and swallowed; the caller's request continues.
    pub async fn append(&self, body: &str) {
        if let Err(e) = self.try_append(body).await {
            tracing::warn!(error = %e, "Failed to record upstream response");
        }
    }

    /// Appends `body` followed by a newline, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns [`LogWriteError`] if the file cannot be opened or written.
    pub async fn try_append(&self, body: &str) -> Result<(), LogWriteError> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options
            .open(&self.path)
            .await
            .map_err(|source| LogWriteError::Open {
                path: self.path.clone(),
                source,
            })?;

        let mut line = String::with_capacity(body.len() + 1);
        line.push_str(body);
        line.push('\n');

        file.write_all(line.as_bytes())
            .await
            .map_err(|source| LogWriteError::Write {
                path: self.path.clone(),
                source,
            })?;

        file.flush().await.map_err(|source| LogWriteError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
