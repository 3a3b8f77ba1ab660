use std::fs;
use std::path::{Path, PathBuf};
use wordsearch_core::{ProgressStore, StoreError};

/// Progress records kept as one JSON file per storage key
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the user's local data directory
    pub fn in_data_dir() -> Self {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordsearch");
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are already ws_* slugs; keep anything odd off the filesystem
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl ProgressStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::Write(e.to_string()))?;
        fs::write(self.path_for(key), value).map_err(|e| StoreError::Write(e.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path().join("nested"));

        assert!(store.load("ws_day001").is_none());
        store.save("ws_day001", "{\"foundWords\":[]}").unwrap();
        assert_eq!(store.load("ws_day001").as_deref(), Some("{\"foundWords\":[]}"));
        assert!(tmp.path().join("nested/ws_day001.json").exists());

        store.remove("ws_day001").unwrap();
        assert!(store.load("ws_day001").is_none());
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path());
        assert!(store.remove("ws_default").is_ok());
    }

    #[test]
    fn test_odd_keys_stay_in_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.save("../escape", "{}").unwrap();
        assert!(tmp.path().join("___escape.json").exists());
        assert_eq!(store.load("../escape").as_deref(), Some("{}"));
    }
}
