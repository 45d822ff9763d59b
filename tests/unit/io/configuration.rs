//! Tests for map glyphs and configuration constants

#[cfg(test)]
mod tests {
    use wallmaze::io::configuration::{
        DEFAULT_LOG_LEVEL, HORIZONTAL_WALL_GLYPH, MAP_FILE_EXTENSION, MAX_MAZE_DIMENSION,
        OPEN_GLYPH, PROGRESS_BAR_WIDTH, VERTICAL_WALL_GLYPH,
    };

    // Tests the canonical wall glyphs
    // Verified by swapping the horizontal and vertical glyphs
    #[test]
    fn test_wall_glyphs() {
        assert_eq!(HORIZONTAL_WALL_GLYPH, '-');
        assert_eq!(VERTICAL_WALL_GLYPH, '|');
    }

    // Tests the open glyph is a space and differs from both wall glyphs
    // Verified by changing the open glyph to '.'
    #[test]
    fn test_open_glyph() {
        assert_eq!(OPEN_GLYPH, ' ');
        assert_ne!(OPEN_GLYPH, HORIZONTAL_WALL_GLYPH);
        assert_ne!(OPEN_GLYPH, VERTICAL_WALL_GLYPH);
    }

    // Tests maximum maze dimension value
    // Verified by reducing dimension limit
    #[test]
    fn test_max_maze_dimension() {
        assert_eq!(MAX_MAZE_DIMENSION, 10_000);
    }

    // Tests map file extension
    // Verified by adding a leading dot
    #[test]
    fn test_map_file_extension() {
        assert_eq!(MAP_FILE_EXTENSION, "maze");
    }

    // Tests progress bar width
    // Verified by changing width value
    #[test]
    fn test_progress_bar_width() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }

    // Tests the default log level only surfaces warnings and errors
    // Verified by changing the level to info
    #[test]
    fn test_default_log_level() {
        assert_eq!(DEFAULT_LOG_LEVEL, log::LevelFilter::Warn);
    }
}
