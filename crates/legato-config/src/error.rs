//! Error types for patch operations.

use std::path::PathBuf;

use legato_midi::ParameterError;
use thiserror::Error;

/// Errors that can occur while loading, saving or building a patch.
#[derive(Debug, Error)]
pub enum PatchError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A parameter entry could not be built
    #[error("invalid parameter '{name}': {source}")]
    Parameter {
        /// Name of the parameter entry.
        name: String,
        /// Why construction failed.
        #[source]
        source: ParameterError,
    },

    /// Two parameter entries share a name
    #[error("duplicate parameter name: {0}")]
    DuplicateName(String),

    /// The patch asks for a pool without voices
    #[error("voice pool must have at least one voice")]
    EmptyVoicePool,
}

impl PatchError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PatchError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PatchError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PatchError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a parameter error for the named entry.
    pub fn parameter(name: impl Into<String>, source: ParameterError) -> Self {
        PatchError::Parameter {
            name: name.into(),
            source,
        }
    }
}
