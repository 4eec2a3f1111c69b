//! Error types for decoding, loading and querying lookup tables

use std::path::PathBuf;

/// Errors that can occur while decoding, loading or querying lookup tables
#[derive(Debug, thiserror::Error)]
pub enum LutError {
    /// File name does not follow the LUT naming grammar
    #[error("Malformed LUT file name {}: {reason}", .path.display())]
    MalformedFilename {
        /// Offending path
        path: PathBuf,
        /// Which rule of the grammar was violated
        reason: String,
    },

    /// Metadata file next to a binary payload does not exist
    #[error("Missing metadata file: {}", .path.display())]
    MissingMetadataFile {
        /// Expected metadata path
        path: PathBuf,
    },

    /// Metadata file could not be parsed into a dimension schema
    #[error("Malformed metadata in {} (line {line}): {reason}", .path.display())]
    MalformedMetadata {
        /// Metadata path
        path: PathBuf,
        /// 1-based line number, 0 when the problem concerns the whole file
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Binary payload record count does not match the declared shape
    #[error(
        "Size mismatch in {}: expected {expected} records, found {actual}",
        .path.display()
    )]
    SizeMismatch {
        /// Binary payload path
        path: PathBuf,
        /// Product of the declared dimension sizes
        expected: usize,
        /// Whole records present in the payload
        actual: usize,
    },

    /// No LUT file under the root matches the requested property
    #[error("No LUT files for property '{prop}' under {}", .path.display())]
    NoMatchingFiles {
        /// Collection root
        path: PathBuf,
        /// Requested property
        prop: String,
    },

    /// Two files resolve to the same wavelength key
    #[error(
        "Duplicate wavelength {band}: {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateWavelength {
        /// Canonical band key
        band: String,
        /// File that claimed the band first
        first: PathBuf,
        /// File that collided with it
        second: PathBuf,
    },

    /// Filesystem error with the path that caused it
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Selection names a dimension the table does not have
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    /// Selection value is not on the dimension's coordinate vector
    #[error("Coordinate {value} not found on dimension '{dim}'")]
    CoordinateNotFound {
        /// Dimension name
        dim: String,
        /// Requested label
        value: f64,
    },

    /// Positional selection past the end of a dimension
    #[error("Index {index} out of bounds for dimension '{dim}' of length {len}")]
    IndexOutOfBounds {
        /// Dimension name
        dim: String,
        /// Requested position
        index: usize,
        /// Dimension length
        len: usize,
    },

    /// The same dimension was selected twice in one call
    #[error("Dimension '{0}' selected more than once")]
    DuplicateSelection(String),
}

impl LutError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LutError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LutError>;
