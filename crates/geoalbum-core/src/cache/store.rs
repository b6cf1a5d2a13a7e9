//! Durable tier of the photo cache: one file per cache key in a private directory.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use tokio::fs;

/// File-per-key store rooted at a directory.
#[derive(Debug)]
pub struct DiskStore {
    dir: PathBuf,
    temp_counter: AtomicU64,
}

impl DiskStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            temp_counter: AtomicU64::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Read the file for `key`. A missing file is `Ok(None)`.
    pub async fn read(&self, key: &str) -> io::Result<Option<Bytes>> {
        match fs::read(self.path_for(key)).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write `data` for `key`. Readers see either the old file or the complete new one.
    pub async fn write(&self, key: &str, data: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir).await?;

        let temp = self.temp_path(key);

        if let Err(e) = fs::write(&temp, data).await {
            let _ = fs::remove_file(&temp).await;
            return Err(e);
        }
        if let Err(e) = fs::rename(&temp, self.path_for(key)).await {
            let _ = fs::remove_file(&temp).await;
            return Err(e);
        }
        Ok(())
    }

    // Unique across processes sharing the directory, not just within this one
    fn temp_path(&self, key: &str) -> PathBuf {
        let seq = self.temp_counter.fetch_add(1, Ordering::Relaxed);
        self.dir.join(format!(".{key}.{}.{seq}.tmp", std::process::id()))
    }

    /// Delete the file for `key`. Deleting a missing file succeeds.
    pub async fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    pub async fn exists(&self, key: &str) -> bool {
        fs::try_exists(self.path_for(key)).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_read_remove() {
        let tmp = tempdir().unwrap();
        let store = DiskStore::new(tmp.path());

        assert!(store.read("a.jpg").await.unwrap().is_none());

        store.write("a.jpg", b"jpeg").await.unwrap();
        assert_eq!(store.read("a.jpg").await.unwrap().unwrap(), Bytes::from_static(b"jpeg"));
        assert!(store.exists("a.jpg").await);

        store.remove("a.jpg").await.unwrap();
        assert!(!store.exists("a.jpg").await);
        store.remove("a.jpg").await.unwrap();
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_files() {
        let tmp = tempdir().unwrap();
        let store = DiskStore::new(tmp.path().join("images"));

        store.write("b.jpg", b"one").await.unwrap();
        store.write("b.jpg", b"two").await.unwrap();

        let names: Vec<_> = std::fs::read_dir(store.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["b.jpg".to_string()]);
        assert_eq!(store.read("b.jpg").await.unwrap().unwrap(), Bytes::from_static(b"two"));
    }

    #[test]
    fn test_temp_path_names_the_process() {
        let store = DiskStore::new("/cache");
        let first = store.temp_path("a.jpg");
        let second = store.temp_path("a.jpg");

        let name = first.file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.starts_with(".a.jpg."));
        assert!(name.contains(&format!(".{}.", std::process::id())));
        assert_ne!(first, second);
    }
}
