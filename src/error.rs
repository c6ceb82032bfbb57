//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when any phase of an extraction run fails.
pub enum ExtractError {
    #[error("Failed to read manifest '{path}'")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Manifest '{path}' is not a valid icon list")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Destination directory '{0}' does not exist. Create it first or pass --create-dest.")]
    DestinationMissing(PathBuf),

    #[error("Failed to create destination directory '{path}'")]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Source icon '{0}' was not found")]
    SourceMissing(PathBuf),

    #[error("Failed to copy '{from}' to '{to}'")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to carry file times from '{from}' over to '{to}'")]
    PreserveMetadata {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write progress output")]
    Progress(#[source] io::Error),

    #[error("Column count must be at least 1, got {0}")]
    InvalidColumns(usize),

    #[error("Failed to write table to '{path}'")]
    TableWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
