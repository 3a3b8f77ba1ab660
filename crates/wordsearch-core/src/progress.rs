//! Found-word progress and the key-value stores that keep it between visits

use crate::error::StoreError;
use crate::grid::Position;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::sync::OnceLock;

/// Storage key used when the page path carries no puzzle identifier
pub const FALLBACK_STORAGE_KEY: &str = "ws_default";

/// Words and cells the player has found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    pub found_words: BTreeSet<String>,
    pub found_cells: BTreeSet<Position>,
}

/// On-disk / localStorage shape
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProgressRecord {
    found_words: Vec<String>,
    found_cells: Vec<String>,
}

impl Progress {
    pub fn is_empty(&self) -> bool {
        self.found_words.is_empty() && self.found_cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.found_words.clear();
        self.found_cells.clear();
    }

    /// Record a found word and the cells it covers
    pub fn record(&mut self, word: &str, cells: &[Position]) {
        self.found_words.insert(word.to_string());
        self.found_cells.extend(cells.iter().copied());
    }

    /// Union another progress set into this one
    pub fn merge(&mut self, other: Progress) {
        self.found_words.extend(other.found_words);
        self.found_cells.extend(other.found_cells);
    }

    /// Encode as `{"foundWords": [...], "foundCells": ["r,c", ...]}`
    pub fn to_json(&self) -> Result<String, StoreError> {
        let record = ProgressRecord {
            found_words: self.found_words.iter().cloned().collect(),
            found_cells: self.found_cells.iter().map(Position::key).collect(),
        };
        Ok(serde_json::to_string(&record)?)
    }

    /// Decode a stored record. Anything unreadable counts as no progress.
    pub fn from_json(raw: &str) -> Self {
        let record: ProgressRecord = match serde_json::from_str(raw) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring corrupt progress record");
                return Self::default();
            }
        };

        let found_cells = record
            .found_cells
            .iter()
            .filter_map(|key| {
                let pos = Position::parse_key(key);
                if pos.is_none() {
                    tracing::debug!(key = %key, "skipping malformed cell key");
                }
                pos
            })
            .collect();

        Self {
            found_words: record.found_words.into_iter().collect(),
            found_cells,
        }
    }
}

/// Key-value persistence for progress records
pub trait ProgressStore {
    /// Raw record for `key`, if one exists
    fn load(&self, key: &str) -> Option<String>;

    /// Replace the record for `key`
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the record for `key`
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same entries, like two views of one
/// browser origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw record, e.g. to simulate earlier visits
    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.insert(key, value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

fn day_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"day\d{3}").expect("valid regex"))
}

fn trial_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"trial-day\d{2}").expect("valid regex"))
}

/// Derive a per-puzzle storage key from a page path.
///
/// `/puzzles/day001/` gives `ws_day001`, `/trial/trial-day01/` gives
/// `ws_trial_day01`; anything else shares [`FALLBACK_STORAGE_KEY`].
pub fn storage_key_for_path(path: &str) -> String {
    let path = path.to_lowercase();
    if let Some(m) = day_pattern().find(&path) {
        return format!("ws_{}", m.as_str());
    }
    if let Some(m) = trial_pattern().find(&path) {
        return format!("ws_{}", m.as_str().replacen('-', "_", 1));
    }
    FALLBACK_STORAGE_KEY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Progress {
        let mut progress = Progress::default();
        progress.record(
            "CAT",
            &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
        );
        progress.record("DOG", &[Position::new(4, 9), Position::new(3, 9)]);
        progress
    }

    #[test]
    fn test_json_shape() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["foundWords"], serde_json::json!(["CAT", "DOG"]));
        assert_eq!(value["foundCells"][0], "0,0");
        assert_eq!(value["foundCells"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_save_restore_equivalent() {
        let original = sample();
        let restored = Progress::from_json(&original.to_json().unwrap());
        assert_eq!(restored, original);
    }

    #[test]
    fn test_reads_browser_written_record() {
        let raw = r#"{"foundWords":["CAT"],"foundCells":["0,0","0,1","0,2"]}"#;
        let progress = Progress::from_json(raw);
        assert!(progress.found_words.contains("CAT"));
        assert!(progress.found_cells.contains(&Position::new(0, 2)));
    }

    #[test]
    fn test_corrupt_record_is_empty() {
        assert!(Progress::from_json("{not json").is_empty());
        assert!(Progress::from_json("null").is_empty());
        assert!(Progress::from_json(r#"{"foundWords": 5}"#).is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let progress = Progress::from_json(r#"{"foundWords":["CAT"]}"#);
        assert_eq!(progress.found_words.len(), 1);
        assert!(progress.found_cells.is_empty());
    }

    #[test]
    fn test_bad_cell_keys_skipped() {
        let progress = Progress::from_json(r#"{"foundCells":["1,2","oops","3"]}"#);
        assert_eq!(
            progress.found_cells.into_iter().collect::<Vec<_>>(),
            vec![Position::new(1, 2)]
        );
    }

    #[test]
    fn test_merge() {
        let mut a = Progress::default();
        a.record("CAT", &[Position::new(0, 0)]);
        let mut b = Progress::default();
        b.record("DOG", &[Position::new(0, 0), Position::new(1, 1)]);
        a.merge(b);
        assert_eq!(a.found_words.len(), 2);
        assert_eq!(a.found_cells.len(), 2);
    }

    #[test]
    fn test_memory_store_shares_entries() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.save("ws_day001", "{}").unwrap();
        assert_eq!(store.load("ws_day001").as_deref(), Some("{}"));
        handle.remove("ws_day001").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(storage_key_for_path("/puzzles/day001/"), "ws_day001");
        assert_eq!(storage_key_for_path("/Puzzles/DAY042/index.html"), "ws_day042");
        assert_eq!(storage_key_for_path("/trial/trial-day01/"), "ws_trial_day01");
        assert_eq!(storage_key_for_path("/about/"), FALLBACK_STORAGE_KEY);
    }
}
