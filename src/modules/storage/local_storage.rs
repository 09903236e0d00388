//! Local filesystem storage for generated files
//!
//! Files are created exclusively, so concurrent writers never overwrite each
//! other: when `<stem>.<ext>` is taken the next free `<stem>_<n>.<ext>` is used.

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info};

use crate::core::error::AppError;

/// Upper bound on suffixed names tried for a single stem
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Directory-backed storage client
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create the base directory and its parents if missing
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.base_dir).await.map_err(|e| {
            error!(
                "Failed to create directory {}: {}",
                self.base_dir.display(),
                e
            );
            AppError::io("Failed to create directory", &self.base_dir, e)
        })?;

        debug!("Directory ready: {}", self.base_dir.display());
        Ok(())
    }

    /// Write `data` to a new file named after `stem`, never replacing an existing one
    ///
    /// # Returns
    /// The path of the created file (base directory joined with the chosen name)
    pub async fn write_new(
        &self,
        stem: &str,
        extension: &str,
        data: &[u8],
    ) -> Result<PathBuf, AppError> {
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let file_name = if attempt == 0 {
                format!("{}.{}", stem, extension)
            } else {
                format!("{}_{}.{}", stem, attempt, extension)
            };
            let path = self.base_dir.join(file_name);

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("File exists, trying next name: {}", path.display());
                    continue;
                }
                Err(e) => {
                    error!("Failed to create file {}: {}", path.display(), e);
                    return Err(AppError::io("Failed to create file", path, e));
                }
            };

            // A partially written file stays on disk if this fails
            let written = async {
                file.write_all(data).await?;
                file.flush().await
            }
            .await;

            if let Err(e) = written {
                error!("Failed to write file {}: {}", path.display(), e);
                return Err(AppError::io("Failed to write file", path, e));
            }

            info!("File saved: path={}, size={}", path.display(), data.len());
            return Ok(path);
        }

        let path = self.base_dir.join(format!("{}.{}", stem, extension));
        error!(
            "No free file name after {} attempts for {}",
            MAX_NAME_ATTEMPTS,
            path.display()
        );
        Err(AppError::io(
            "No free file name for",
            path,
            std::io::Error::new(ErrorKind::AlreadyExists, "all candidate names are taken"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ensure_dir_creates_nested_dirs() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("a").join("b"));

        storage.ensure_dir().await.unwrap();
        assert!(storage.base_dir.is_dir());

        // idempotent
        storage.ensure_dir().await.unwrap();
        assert!(storage.base_dir.is_dir());
    }

    #[tokio::test]
    async fn test_ensure_dir_fails_when_path_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let storage = LocalStorage::new(blocker.join("qr_codes"));

        let err = storage.ensure_dir().await.unwrap_err();

        assert!(matches!(err, AppError::Io { .. }));
        assert!(err.to_string().starts_with("Failed to create directory"));
    }

    #[tokio::test]
    async fn test_write_new_uses_plain_name_first() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let path = storage
            .write_new("QRCode_20261019120000", "png", b"one")
            .await
            .unwrap();

        assert_eq!(path, tmp.path().join("QRCode_20261019120000.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"one");
    }

    #[tokio::test]
    async fn test_write_new_never_overwrites() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let stem = "QRCode_20261019120000";
        let first = storage.write_new(stem, "png", b"one").await.unwrap();
        let second = storage.write_new(stem, "png", b"two").await.unwrap();
        let third = storage.write_new(stem, "png", b"three").await.unwrap();

        assert_eq!(second, tmp.path().join("QRCode_20261019120000_1.png"));
        assert_eq!(third, tmp.path().join("QRCode_20261019120000_2.png"));
        assert_eq!(std::fs::read(&first).unwrap(), b"one");
        assert_eq!(std::fs::read(&second).unwrap(), b"two");
        assert_eq!(std::fs::read(&third).unwrap(), b"three");
    }

    #[tokio::test]
    async fn test_write_new_fails_without_directory() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("missing"));

        let err = storage
            .write_new("QRCode_x", "png", b"data")
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to create file"));
    }
}
