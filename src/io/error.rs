//! Error types and path context for growth runs and their I/O

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::position::Position;

/// Main error type for all fallible operations
///
/// The growth loop itself cannot fail; these errors come from configuration,
/// seed loading and snapshot output.
#[derive(Debug)]
pub enum AlgorithmError {
    /// Failed to load a seed image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Seed data doesn't meet the engine's requirements
    InvalidSourceData {
        /// Description of what's wrong with the seed data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Seed position lies outside the canvas
    SeedOutOfBounds {
        /// The offending seed
        position: Position,
        /// Canvas width
        width: usize,
        /// Canvas height
        height: usize,
    },

    /// Failed to save a snapshot to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SeedOutOfBounds {
                position,
                width,
                height,
            } => {
                write!(f, "Seed {position} lies outside the {width}x{height} canvas")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for results in this crate
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Attaches the path an I/O or image operation was working on
pub trait WithPath<T> {
    /// Map an image error into `ImageExport` for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn export_path(self, path: &Path) -> Result<T>;

    /// Map an error into the variant appropriate for `operation` on `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, image::ImageError> {
    fn export_path(self, path: &Path) -> Result<T> {
        self.map_err(|source| AlgorithmError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
    }

    fn with_path(self, path: &Path, _operation: &'static str) -> Result<T> {
        self.map_err(|source| AlgorithmError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn export_path(self, path: &Path) -> Result<T> {
        self.with_path(path, "export")
    }

    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<image::ImageError> for AlgorithmError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
