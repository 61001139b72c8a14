use super::KeyValueStore;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const STORAGE_FILENAME: &str = "storage.json";

/// File-backed storage: a single JSON object of string values.
///
/// The file is read on every access and rewritten on every change, so several
/// processes see each other's writes without coordination beyond the file.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    fn load_entries(&self) -> Result<BTreeMap<String, String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(self.path(), content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load_entries()?;
        if entries.remove(key).is_some() {
            self.save_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saved::{self, FAVORITE_PROPERTIES};

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path().join("nested"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn creates_directory_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("data").join("sift");
        let mut store = FileStorage::new(&root);

        store.set("portfolio_view", "list").unwrap();
        assert!(root.join(STORAGE_FILENAME).exists());
    }

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStorage::new(dir.path());
            saved::add(&mut store, FAVORITE_PROPERTIES, "12").unwrap();
            saved::add(&mut store, FAVORITE_PROPERTIES, "7").unwrap();
        }

        let store = FileStorage::new(dir.path());
        assert_eq!(
            saved::load(&store, FAVORITE_PROPERTIES).unwrap(),
            vec!["12", "7"]
        );
    }

    #[test]
    fn remove_deletes_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStorage::new(dir.path());

        store.set("portfolio_view", "list").unwrap();
        store.remove("portfolio_view").unwrap();
        assert_eq!(store.get("portfolio_view").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORAGE_FILENAME), "[1, 2").unwrap();

        let store = FileStorage::new(dir.path());
        assert!(store.get("saved_jobs").is_err());
    }
}
