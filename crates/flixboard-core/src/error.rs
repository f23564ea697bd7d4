use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by flixboard.
#[derive(Error, Debug)]
pub enum FlixError {
    /// A source CSV file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV document could not be parsed at the file level.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from a source file's header row.
    #[error("Missing column \"{column}\" in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A date string did not match any recognised format.
    #[error("Invalid date format: {0}")]
    DateParse(String),

    /// A JSON document (persisted settings) could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the flixboard crates.
pub type Result<T> = std::result::Result<T, FlixError>;
