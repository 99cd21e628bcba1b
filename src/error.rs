//! Error types for tree generation

use std::io;
use std::path::PathBuf;

/// Errors that can occur while building or writing a tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The target path does not exist.
    #[error("Directory '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// The target path exists but is not a directory.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A pattern file could not be read.
    #[error("Could not read pattern file {}: {source}", path.display())]
    PatternFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An exclusion pattern is not a valid regular expression.
    #[error("invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Listing or stat-ing an entry failed during traversal.
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the output file failed.
    #[error("cannot write '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Printing the document to stdout failed.
    #[error("error writing output: {0}")]
    Stdout(#[source] io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
