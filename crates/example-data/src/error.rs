//! Error types for the example-data crate.
//!
//! Registry parsing, dataset generation and dataset output each have their
//! own `thiserror` enum so callers can match on the failing stage.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry lists no organizations to assign users to.
    #[error("registry contains no organizations")]
    EmptyOrganizations,

    /// An organization name is empty or whitespace-only.
    #[error("blank organization name at index {index}")]
    BlankOrganization {
        /// Index of the blank entry in the array.
        index: usize,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during user generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid username after maximum retries.
    #[error("failed to generate valid username after {max_attempts} attempts")]
    UsernameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// The registry contains no organizations for selection.
    #[error("registry contains no organizations for selection")]
    NoOrganizations,
}

/// Errors raised while writing a generated dataset to disk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The generated users could not be serialised.
    #[error("failed to serialise dataset: {message}")]
    Serialise {
        /// Description of the serialisation error.
        message: String,
    },

    /// The dataset file could not be written.
    #[error("failed to write dataset at '{path}': {message}")]
    WriteError {
        /// Path that failed to write.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
