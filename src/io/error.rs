//! Error types for acquisition, classification, and assembly operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all reconstruction operations
#[derive(Debug)]
pub enum StitchError {
    /// A tile could not be fetched or decoded
    ///
    /// Both network failures and corrupt bytes map here; a single
    /// unavailable tile aborts the whole reconstruction with no retry.
    TileUnavailable {
        /// 1-based index of the failed tile
        index: u32,
        /// Description of the fetch or decode failure
        reason: String,
    },

    /// A tile's dimensions differ from the first acquired tile
    DimensionMismatch {
        /// 1-based index of the offending tile
        index: u32,
        /// Dimensions of the first tile (width, height)
        expected: (u32, u32),
        /// Dimensions of the offending tile (width, height)
        actual: (u32, u32),
    },

    /// No tiles remained to assemble
    ///
    /// Raised when zero tiles were acquired, or when border filtering
    /// removed every tile from the sequence.
    EmptyTileSet,

    /// Reconstruction parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save the assembled canvas
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

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileUnavailable { index, reason } => {
                write!(f, "Tile {index} is unavailable: {reason}")
            }
            Self::DimensionMismatch {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Tile {index} is {}x{} but the first tile was {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::EmptyTileSet => {
                write!(f, "No tiles available to assemble")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reconstruction results
pub type Result<T> = std::result::Result<T, StitchError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StitchError {
    StitchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a tile unavailability error
pub fn tile_unavailable(index: u32, reason: &impl ToString) -> StitchError {
    StitchError::TileUnavailable {
        index,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        let err = StitchError::DimensionMismatch {
            index: 7,
            expected: (64, 64),
            actual: (64, 32),
        };
        assert_eq!(err.to_string(), "Tile 7 is 64x32 but the first tile was 64x64");

        let err = tile_unavailable(3, &"HTTP status 404");
        assert_eq!(err.to_string(), "Tile 3 is unavailable: HTTP status 404");
    }

    #[test]
    fn test_filesystem_source_is_exposed() {
        let err = StitchError::FileSystem {
            path: PathBuf::from("cache"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
