//! Error types for linkrank

use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Corpus not found: {0}")]
    CorpusNotFound(String),

    #[error("Link graph is empty: at least one page is required")]
    EmptyGraph,

    #[error("Iteration cap exceeded after {iterations} iterations (last delta {delta:.3e})")]
    IterationCapExceeded { iterations: usize, delta: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LinkRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CorpusNotFound(_) => exit_codes::NOT_FOUND,
            Self::EmptyGraph | Self::InvalidInput(_) | Self::Config(_) => {
                exit_codes::INVALID_INPUT
            }
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
