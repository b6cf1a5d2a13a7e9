//! Path utilities for geoalbum data directories.
//!
//! Everything durable lives under one data root:
//! - `geoalbum.db`: the `SQLite` store for locations and photos
//! - `images/`: the durable tier of the photo cache, one file per cache key
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O

mod error;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "GEOALBUM_DATA_DIR";

const APP_DIR_NAME: &str = "geoalbum";
const DATABASE_FILE_NAME: &str = "geoalbum.db";
const IMAGES_DIR_NAME: &str = "images";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `GEOALBUM_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/geoalbum`)
/// 3. `./.geoalbum` relative to the working directory
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => match dirs::data_local_dir() {
            Some(dir) => dir.join(APP_DIR_NAME),
            None => env::current_dir()
                .map_err(|e| PathError::NoDataDir(e.to_string()))?
                .join(format!(".{APP_DIR_NAME}")),
        },
    };

    ensure_directory(&root)?;
    Ok(root)
}

/// Get the path to the database file inside `root`.
pub fn database_path_in(root: &Path) -> PathBuf {
    root.join(DATABASE_FILE_NAME)
}

/// Get the path to the geoalbum database file under the resolved data root.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(database_path_in(&data_root()?))
}

/// Get the durable image cache directory inside `root`, creating it.
pub fn image_cache_dir_in(root: &Path) -> Result<PathBuf, PathError> {
    let dir = root.join(IMAGES_DIR_NAME);
    ensure_directory(&dir)?;
    Ok(dir)
}

/// Get the durable image cache directory under the resolved data root.
pub fn image_cache_dir() -> Result<PathBuf, PathError> {
    image_cache_dir_in(&data_root()?)
}

/// Ensure `path` exists and is a directory, creating it (and parents) if missing.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_path_ends_with_db_name() {
        let root = PathBuf::from("/tmp/geoalbum-test");
        assert!(database_path_in(&root).ends_with("geoalbum.db"));
    }

    #[test]
    fn test_image_cache_dir_is_created() {
        let tmp = tempdir().unwrap();
        let dir = image_cache_dir_in(tmp.path()).unwrap();
        assert!(dir.is_dir());
        assert!(dir.ends_with("images"));
    }

    #[test]
    fn test_ensure_directory_rejects_file() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            ensure_directory(&file),
            Err(PathError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_ensure_directory_rejects_empty() {
        assert!(matches!(
            ensure_directory(Path::new("")),
            Err(PathError::EmptyPath)
        ));
    }
}
