use thiserror::Error;

/// Problems with a puzzle configuration; any of these aborts initialization
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("word list is empty")]
    NoWords,

    #[error("word #{0} is blank")]
    BlankWord(usize),

    #[error("word #{index} ({word}) is too short; a selection covers at least two letters")]
    ShortWord { index: usize, word: String },

    #[error("invalid puzzle config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures writing or clearing persisted progress
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write progress: {0}")]
    Write(String),

    #[error("failed to encode progress: {0}")]
    Encode(#[from] serde_json::Error),
}
