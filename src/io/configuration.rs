//! Map format glyphs and runtime configuration defaults

// String-grid glyphs
/// Glyph written for a horizontal wall segment
pub const HORIZONTAL_WALL_GLYPH: char = '-';
/// Glyph written for a vertical wall segment
pub const VERTICAL_WALL_GLYPH: char = '|';
/// Glyph for an open boundary; every other character decodes as a wall
pub const OPEN_GLYPH: char = ' ';

// Safety limit to prevent excessive memory allocation
/// Maximum allowed maze width or height
pub const MAX_MAZE_DIMENSION: usize = 10_000;

/// Extension of map files picked up when scanning a directory
pub const MAP_FILE_EXTENSION: &str = "maze";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log level used when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
