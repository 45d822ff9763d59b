//! String-grid map format
//!
//! A map of a `W` x `H` maze is `2H + 1` strings. Even rows describe
//! horizontal walls and hold `W` characters; odd rows describe vertical walls
//! and hold `W + 1` characters. A space is an open boundary and any other
//! character is a wall, whatever the glyph.

use std::fmt;
use std::str::FromStr;

use log::debug;
use ndarray::{Array2, ArrayView1};

use crate::io::configuration::{HORIZONTAL_WALL_GLYPH, OPEN_GLYPH, VERTICAL_WALL_GLYPH};
use crate::io::error::{MapDefect, MazeError, Result, malformed_row};
use crate::maze::walls::{Maze, check_dimensions};

/// Built-in 10x9 map, fully enclosed with internal walls
pub const DEFAULT_MAP: [&str; 19] = [
    "----------",
    "||      | |",
    "  ------- ",
    "| |    | ||",
    "   -----  ",
    "|| |  | |||",
    "    ---   ",
    "||| |  ||||",
    "     -    ",
    "||||  | |||",
    "    --    ",
    "||||   | ||",
    "   ----   ",
    "||| |   | |",
    "  ------  ",
    "|| |     ||",
    " -------- ",
    "| |       |",
    "----------",
];

/// Built-in map rows
pub const fn default_map() -> &'static [&'static str] {
    &DEFAULT_MAP
}

impl Maze {
    /// Decode a string-grid map
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MalformedMap`] if the map has an even number of
    /// rows, no cell rows, an empty first row, or any row whose length
    /// disagrees with the width taken from the first row. Returns
    /// [`MazeError::InvalidDimensions`] if the width or height exceeds
    /// [`MAX_MAZE_DIMENSION`](crate::io::configuration::MAX_MAZE_DIMENSION)
    pub fn from_map<S: AsRef<str>>(map: &[S]) -> Result<Self> {
        if map.len() % 2 != 1 {
            return Err(MazeError::MalformedMap {
                row: None,
                defect: MapDefect::EvenLength { rows: map.len() },
            });
        }
        if map.len() == 1 {
            return Err(MazeError::MalformedMap {
                row: None,
                defect: MapDefect::NoRows,
            });
        }

        let width = map.first().map_or(0, |row| row.as_ref().chars().count());
        if width == 0 {
            return Err(malformed_row(0, MapDefect::EmptyRow));
        }
        let height = (map.len() - 1) / 2;
        check_dimensions(width, height)?;

        let mut horiz = Vec::with_capacity((height + 1) * width);
        let mut vert = Vec::with_capacity(height * (width + 1));

        for (index, row) in map.iter().enumerate() {
            let target = if index % 2 == 0 { &mut horiz } else { &mut vert };
            let expected = if index % 2 == 0 { width } else { width + 1 };
            let before = target.len();
            target.extend(row.as_ref().chars().map(|c| c != OPEN_GLYPH));

            let found = target.len() - before;
            if found != expected {
                return Err(malformed_row(
                    index,
                    MapDefect::InconsistentLength { expected, found },
                ));
            }
        }

        debug!("Decoded {width}x{height} maze from {} map rows", map.len());

        let (horiz_len, vert_len) = (horiz.len(), vert.len());
        let horiz = Array2::from_shape_vec((height + 1, width), horiz).map_err(|_shape_error| {
            MazeError::WallShape {
                array: "horiz",
                expected: (height + 1, width),
                found: (1, horiz_len),
            }
        })?;
        let vert = Array2::from_shape_vec((height, width + 1), vert).map_err(|_shape_error| {
            MazeError::WallShape {
                array: "vert",
                expected: (height, width + 1),
                found: (1, vert_len),
            }
        })?;

        Ok(Self::from_parts(width, height, horiz, vert))
    }

    /// Build the maze described by [`DEFAULT_MAP`]
    ///
    /// # Errors
    ///
    /// Never fails for the shipped map; the `Result` mirrors [`Maze::from_map`]
    pub fn default_maze() -> Result<Self> {
        Self::from_map(DEFAULT_MAP.as_slice())
    }

    /// Encode as a string-grid map using `-` and `|` for walls
    pub fn to_map(&self) -> Vec<String> {
        let mut rows = Vec::with_capacity(2 * self.height() + 1);
        let mut horiz_rows = self.horiz().rows().into_iter();

        for vert_row in self.vert().rows() {
            if let Some(horiz_row) = horiz_rows.next() {
                rows.push(encode_row(horiz_row, HORIZONTAL_WALL_GLYPH));
            }
            rows.push(encode_row(vert_row, VERTICAL_WALL_GLYPH));
        }
        if let Some(last) = horiz_rows.next() {
            rows.push(encode_row(last, HORIZONTAL_WALL_GLYPH));
        }

        rows
    }
}

fn encode_row(row: ArrayView1<'_, bool>, glyph: char) -> String {
    row.iter()
        .map(|&wall| if wall { glyph } else { OPEN_GLYPH })
        .collect()
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_map().join("\n"))
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parse newline-separated map rows
    ///
    /// Accepts `\r\n` line endings and a single trailing newline. Trailing
    /// spaces are significant.
    fn from_str(s: &str) -> Result<Self> {
        let body = s
            .strip_suffix('\n')
            .map_or(s, |rest| rest.strip_suffix('\r').unwrap_or(rest));
        let rows: Vec<&str> = body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self::from_map(&rows)
    }
}
