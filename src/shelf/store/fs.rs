use super::KeyValueStore;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::PathBuf;

/// File-backed key-value store: every key is a `<key>.json` file in `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file holding `key`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Write to a sibling temp file, then rename over the target so a
        // crash never leaves a half-written collection behind.
        let path = self.key_path(key);
        let tmp = self.root.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value).map_err(ShelfError::Io)?;
        fs::rename(&tmp, &path).map_err(ShelfError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.read("library-books").unwrap(), None);
    }

    #[test]
    fn write_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("shelf");
        let store = FileStore::new(&root);

        store.write("library-books", "[]").unwrap();

        assert!(root.join("library-books.json").exists());
        assert_eq!(store.read("library-books").unwrap(), Some("[]".into()));
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store.write("library-books", "[]").unwrap();
        store.write("library-books", "[1]").unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
        assert_eq!(store.read("library-books").unwrap(), Some("[1]".into()));
    }
}
