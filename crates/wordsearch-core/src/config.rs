use crate::error::ConfigError;
use crate::progress::storage_key_for_path;
use serde::{Deserialize, Serialize};

/// Seed used when a puzzle page doesn't provide one
pub const DEFAULT_SEED: u64 = 123456;

/// Whether the player hunts for words or is shown every answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleMode {
    #[default]
    Interactive,
    Solution,
}

/// Puzzle definition, shaped like the `PUZZLE_CONFIG` object a puzzle page
/// provides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub grid_rows: usize,
    pub grid_cols: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    pub words: Vec<String>,
    /// Explicit storage key; otherwise derived from the page path
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default)]
    pub mode: PuzzleMode,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl PuzzleConfig {
    pub fn new<S: AsRef<str>>(rows: usize, cols: usize, seed: u64, words: &[S]) -> Self {
        Self {
            title: None,
            subtitle: None,
            grid_rows: rows,
            grid_cols: cols,
            seed,
            words: words.iter().map(|w| w.as_ref().to_string()).collect(),
            storage_key: None,
            mode: PuzzleMode::Interactive,
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_rows == 0 || self.grid_cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.grid_rows,
                cols: self.grid_cols,
            });
        }
        if self.words.is_empty() {
            return Err(ConfigError::NoWords);
        }
        if let Some(idx) = self.words.iter().position(|w| w.trim().is_empty()) {
            return Err(ConfigError::BlankWord(idx));
        }
        if let Some(idx) = self.words.iter().position(|w| w.trim().chars().count() < 2) {
            return Err(ConfigError::ShortWord {
                index: idx,
                word: self.words[idx].trim().to_string(),
            });
        }
        Ok(())
    }

    /// Words uppercased, in listed order
    pub fn normalized_words(&self) -> Vec<String> {
        crate::normalize_words(&self.words)
    }

    /// Configured key, or one derived from `page_path`
    pub fn resolve_storage_key(&self, page_path: Option<&str>) -> String {
        match (&self.storage_key, page_path) {
            (Some(key), _) if !key.trim().is_empty() => key.clone(),
            (_, Some(path)) => storage_key_for_path(path),
            _ => storage_key_for_path(""),
        }
    }

    pub fn with_mode(mut self, mode: PuzzleMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.storage_key = Some(key.to_string());
        self
    }
}
