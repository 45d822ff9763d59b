//! Maze data structure and queries
//!
//! This module contains:
//! - Wall-flag storage and constructors
//! - The string-grid map format and the built-in map
//! - Positions, headings, and movement queries

/// String-grid map decoding, encoding, and the built-in map
pub mod map;
/// Positions, headings, and wall-aware movement queries
pub mod movement;
/// Wall-flag storage and constructors
pub mod walls;

pub use map::{DEFAULT_MAP, default_map};
pub use movement::{Direction, Position};
pub use walls::Maze;
