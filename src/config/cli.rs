use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Files relative to a base directory on local disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
    // clones share it, so appends from one process never interleave
    append_lock: Arc<Mutex<()>>,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self {
            base_path,
            append_lock: Arc::new(Mutex::new(())),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn append_file(&self, path: &str, header: &[u8], data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let _guard = self.append_lock.lock().await;

        // O_APPEND: 其他行程同時寫入也只會接在檔尾
        let (mut file, contents) = match OpenOptions::new()
            .append(true)
            .create_new(true)
            .open(&full_path)
            .await
        {
            Ok(file) => (file, [header, data].concat()),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                let file = OpenOptions::new().append(true).open(&full_path).await?;
                (file, data.to_vec())
            }
            Err(e) => return Err(e.into()),
        };

        file.write_all(&contents).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FortuneError;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        tokio_test::block_on(storage.write_file("prompts/kim.txt", "골신".as_bytes())).unwrap();
        let data = tokio_test::block_on(storage.read_file("prompts/kim.txt")).unwrap();
        assert_eq!(String::from_utf8(data).unwrap(), "골신");
    }

    #[test]
    fn test_append_writes_header_only_on_create() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        tokio_test::block_on(storage.append_file("logs/a.csv", b"h\n", b"1\n")).unwrap();
        tokio_test::block_on(storage.append_file("logs/a.csv", b"h\n", b"2\n")).unwrap();

        let data = std::fs::read_to_string(temp_dir.path().join("logs/a.csv")).unwrap();
        assert_eq!(data, "h\n1\n2\n");
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.csv"), "h\nold\n").unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        tokio_test::block_on(storage.append_file("a.csv", b"h\n", b"new\n")).unwrap();

        let data = std::fs::read_to_string(temp_dir.path().join("a.csv")).unwrap();
        assert_eq!(data, "h\nold\nnew\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        match tokio_test::block_on(storage.read_file("missing.csv")) {
            Err(FortuneError::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected NotFound, got {:?}", other.map(|d| d.len())),
        }
    }
}
