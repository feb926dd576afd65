//! Custom error types for geospatial processing

use std::fmt;
use std::io;

/// Error types raised by antarctic-kit operations
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// A value could not be parsed from text
    ParseError(String),
    /// Region bounds are out of order or not finite
    InvalidRegion(String),
    /// A required table column is absent
    MissingColumn(String),
    /// Column lengths disagree
    LengthMismatch { expected: usize, found: usize },
    /// Grid axes or values are inconsistent
    InvalidGrid(String),
    /// No transform exists between two coordinate systems
    UnsupportedTransform(u32, u32),
    /// Dataset name is not in the registry
    UnknownDataset(String),
    /// HTTP download failed
    DownloadError(String),
    /// Downloaded file hash differs from the registry
    ChecksumMismatch { expected: String, found: String },
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GeoError::InvalidRegion(msg) => write!(f, "Invalid region: {}", msg),
            GeoError::MissingColumn(name) => write!(f, "Missing column: {}", name),
            GeoError::LengthMismatch { expected, found } => {
                write!(f, "Column length mismatch: expected {}, found {}", expected, found)
            },
            GeoError::InvalidGrid(msg) => write!(f, "Invalid grid: {}", msg),
            GeoError::UnsupportedTransform(from, to) => {
                write!(f, "Unsupported coordinate transformation from EPSG:{} to EPSG:{}", from, to)
            },
            GeoError::UnknownDataset(name) => write!(f, "Unknown dataset: {}", name),
            GeoError::DownloadError(msg) => write!(f, "Download failed: {}", msg),
            GeoError::ChecksumMismatch { expected, found } => {
                write!(f, "Checksum mismatch: expected {}, found {}", expected, found)
            },
            GeoError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(error: serde_json::Error) -> Self {
        GeoError::GenericError(format!("JSON serialization failed: {}", error))
    }
}

impl From<csv::Error> for GeoError {
    fn from(error: csv::Error) -> Self {
        GeoError::ParseError(format!("CSV error: {}", error))
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

/// Result type for antarctic-kit operations
pub type GeoResult<T> = Result<T, GeoError>;
