//! Error types for indexer setup.
//!
//! Extraction itself never fails: missing fields degrade to absent values.
//! [`IndexerError`] only covers parsing of textual field specifications and
//! loading of [`IndexerConfig`](crate::config::IndexerConfig).

use thiserror::Error;

/// Error type for field specification parsing and configuration loading.
#[derive(Error, Debug)]
pub enum IndexerError {
    /// A tag was not exactly three characters long.
    #[error("Invalid tag: {0:?}")]
    InvalidTag(String),

    /// A field specification (tag plus subfield codes) could not be parsed.
    #[error("Invalid field spec: {0}")]
    InvalidFieldSpec(String),

    /// The configuration document was malformed.
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// IO error while reading a configuration file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`IndexerError`].
pub type Result<T> = std::result::Result<T, IndexerError>;
