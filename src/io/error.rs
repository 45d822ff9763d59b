//! Error types and context management for maze construction and queries

use std::fmt;
use std::path::{Path, PathBuf};

/// Structural problem found while decoding a string-grid map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapDefect {
    /// Map must alternate horizontal and vertical rows, starting and ending horizontal
    EvenLength {
        /// Number of rows supplied
        rows: usize,
    },
    /// A single horizontal row describes no cells
    NoRows,
    /// The first horizontal row is empty, so the width would be zero
    EmptyRow,
    /// A row disagrees with the width inferred from the first row
    InconsistentLength {
        /// Length required for this row
        expected: usize,
        /// Length actually found
        found: usize,
    },
}

impl fmt::Display for MapDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvenLength { rows } => {
                write!(f, "odd-length array required (got {rows} rows)")
            }
            Self::NoRows => write!(f, "map must describe at least one cell row"),
            Self::EmptyRow => write!(f, "first horizontal row must not be empty"),
            Self::InconsistentLength { expected, found } => {
                write!(
                    f,
                    "inconsistent element length (expected {expected}, found {found})"
                )
            }
        }
    }
}

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// String-grid map failed validation
    MalformedMap {
        /// Zero-based map row that failed, when the defect is row-specific
        row: Option<usize>,
        /// What was wrong with the map
        defect: MapDefect,
    },

    /// Requested maze dimensions are unusable
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Why the dimensions were rejected
        reason: &'static str,
    },

    /// Caller-supplied wall array has the wrong shape
    WallShape {
        /// Which array was rejected (`horiz` or `vert`)
        array: &'static str,
        /// Shape required by the other array (rows, cols)
        expected: (usize, usize),
        /// Shape supplied (rows, cols)
        found: (usize, usize),
    },

    /// Position lies outside the maze
    ///
    /// Positions are `[i, j]`: column first, then row.
    OutOfBounds {
        /// Offending position
        position: [usize; 2],
        /// Maze width
        width: usize,
        /// Maze height
        height: usize,
    },

    /// Direction vector is not a unit step along exactly one axis
    InvalidDirection {
        /// Horizontal component
        i: i32,
        /// Vertical component
        j: i32,
    },

    /// Textual parameter could not be parsed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Error raised while handling a specific map file
    MapFile {
        /// File the map was read from
        path: PathBuf,
        /// Underlying map error
        source: Box<MazeError>,
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

    /// Some maps in a batch failed to load or answer a movement query
    BatchFailed {
        /// Number of maps that failed
        failed: usize,
        /// Number of maps processed
        total: usize,
    },
}

impl MazeError {
    /// Check whether this error (or the error it wraps) is a map validation failure
    pub fn is_malformed_map(&self) -> bool {
        match self {
            Self::MalformedMap { .. } => true,
            Self::MapFile { source, .. } => source.is_malformed_map(),
            _ => false,
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedMap {
                row: Some(row),
                defect,
            } => write!(f, "Malformed map at row {row}: {defect}"),
            Self::MalformedMap { row: None, defect } => write!(f, "Malformed map: {defect}"),
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => write!(f, "Invalid maze dimensions {width}x{height}: {reason}"),
            Self::WallShape {
                array,
                expected,
                found,
            } => write!(
                f,
                "Wall array '{array}' has shape {}x{}, expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            Self::OutOfBounds {
                position,
                width,
                height,
            } => write!(
                f,
                "Position ({}, {}) is outside the {width}x{height} maze",
                position[0], position[1]
            ),
            Self::InvalidDirection { i, j } => {
                write!(f, "Direction ({i}, {j}) is not a unit step along one axis")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}"),
            Self::MapFile { path, source } => write!(f, "{}: {source}", path.display()),
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(
                f,
                "File system error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::BatchFailed { failed, total } => {
                write!(f, "{failed} of {total} maps failed to load or query")
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MapFile { source, .. } => Some(source.as_ref()),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Attaches the originating file to errors raised while handling it
pub trait WithPath<T> {
    /// Wrap map-level errors with the file they came from
    ///
    /// # Errors
    ///
    /// Propagates the original error, wrapped in [`MazeError::MapFile`] unless it
    /// already names a path
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<MazeError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| match e.into() {
            // File system errors already carry their own path
            error @ (MazeError::FileSystem { .. } | MazeError::MapFile { .. }) => error,
            error => MazeError::MapFile {
                path: path.to_path_buf(),
                source: Box::new(error),
            },
        })
    }
}

/// Create a malformed map error for a specific row
pub const fn malformed_row(row: usize, defect: MapDefect) -> MazeError {
    MazeError::MalformedMap {
        row: Some(row),
        defect,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system_error(
    path: &Path,
    operation: &'static str,
    source: std::io::Error,
) -> MazeError {
    MazeError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
