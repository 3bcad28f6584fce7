//! Error types for the room-seed crate.
//!
//! Each stage of the pipeline owns a semantic error enum built with
//! `thiserror`. The orchestrator folds them into [`RunError`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the user roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster file could not be opened or read.
    #[error("failed to read roster file at '{path}': {message}")]
    Io {
        /// Path to the roster file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The header row does not name the required column.
    #[error("roster is missing the required '{column}' column")]
    MissingColumn {
        /// Name of the missing column.
        column: &'static str,
    },

    /// A data row could not be decoded.
    #[error("invalid roster row at line {line}: {message}")]
    Parse {
        /// One-based line number of the offending record, or 0 if unknown.
        line: u64,
        /// Description of the decode failure.
        message: String,
    },
}

/// Errors raised while sizing rooms or assigning members.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The power-law distribution could not be constructed.
    #[error("invalid room size distribution: {message}")]
    InvalidDistribution {
        /// Description of the parameter error.
        message: String,
    },

    /// A room was requested with more members than the roster holds.
    #[error("room {index} has size {size} but only {available} users are available")]
    RoomTooLarge {
        /// Zero-based room index.
        index: usize,
        /// Requested size.
        size: usize,
        /// Number of users in the roster.
        available: usize,
    },
}

/// Errors that can occur when encoding, decoding, or writing a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// The manifest could not be serialized.
    #[error("failed to serialize manifest: {message}")]
    Serialize {
        /// Description of the serialization error.
        message: String,
    },

    /// The manifest JSON is malformed or missing required fields.
    #[error("invalid manifest JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The manifest file could not be written.
    #[error("failed to write manifest file at '{path}': {message}")]
    WriteError {
        /// Path that failed to be written.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The manifest path is not valid UTF-8.
    #[error("manifest path is not valid UTF-8: '{path}'")]
    NonUtf8Path {
        /// The rejected path.
        path: PathBuf,
    },
}

/// Errors surfaced by a full generator run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Settings could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },

    /// The roster could not be loaded.
    #[error("roster error: {source}")]
    Roster {
        /// Underlying roster error.
        #[from]
        #[source]
        source: RosterError,
    },

    /// Room generation failed.
    #[error("generation error: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },

    /// The manifest could not be produced.
    #[error("manifest error: {source}")]
    Manifest {
        /// Underlying manifest error.
        #[from]
        #[source]
        source: ManifestError,
    },
}
