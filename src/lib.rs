//! Rectangular grid maze stored as horizontal and vertical wall flags
//!
//! The maze decodes from a human-readable string-grid map, encodes back to it,
//! and answers whether an agent at a cell facing a heading can move forward or
//! backward without crossing a wall.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Maze storage, map format, and movement queries
pub mod maze;

pub use io::error::{MapDefect, MazeError, Result};
pub use maze::{DEFAULT_MAP, Direction, Maze, Position, default_map};
