//! Whole-file I/O for the file operations.
//!
//! Inputs are read in one piece. Outputs are staged in a hidden sibling file
//! and renamed over the destination, so readers of the destination only ever
//! see the previous contents or the complete new contents. Replacing an
//! existing file keeps its permission bits.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A file path the facade reads from or writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] naming the path if the file cannot be read.
    pub async fn read(&self) -> Result<Vec<u8>> {
        let data = fs::read(&self.path).await.map_err(|e| Error::io("read", &self.path, e))?;
        debug!(path = %self.path.display(), bytes = data.len(), "read file");
        Ok(data)
    }

    /// Replaces the file's contents with `data`.
    ///
    /// Missing parent directories are created. The staging file is removed
    /// again if any step fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] for the first step that fails; the destination is
    /// left as it was.
    pub async fn write_atomic(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| Error::io("create directory", parent, e))?;
        }

        let staging = self.staging_path();
        if let Err(err) = Self::write_staged(&staging, &self.path, data).await {
            if let Err(e) = fs::remove_file(&staging).await {
                warn!(path = %staging.display(), error = %e, "failed to remove staging file");
            }
            return Err(err);
        }

        debug!(path = %self.path.display(), bytes = data.len(), "wrote file");
        Ok(())
    }

    async fn write_staged(staging: &Path, target: &Path, data: &[u8]) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create_new(true).open(staging).await.map_err(|e| Error::io("create", staging, e))?;

        if let Ok(existing) = fs::metadata(target).await {
            file.set_permissions(existing.permissions()).await.map_err(|e| Error::io("set permissions", staging, e))?;
        }

        file.write_all(data).await.map_err(|e| Error::io("write", staging, e))?;
        file.sync_all().await.map_err(|e| Error::io("sync", staging, e))?;
        drop(file);

        fs::rename(staging, target).await.map_err(|e| Error::io("replace", target, e))
    }

    fn staging_path(&self) -> PathBuf {
        let name = self.path.file_name().map_or_else(|| "output".into(), |n| n.to_string_lossy());
        self.path.with_file_name(format!(".{name}.{:016x}.tmp", rand::random::<u64>()))
    }
}
