//! Cell positions, headings, and wall-aware movement queries

use std::fmt;
use std::str::FromStr;

use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::maze::walls::Maze;

/// Cell coordinates: `i` is the column, `j` the row (growing downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column index
    pub i: usize,
    /// Row index
    pub j: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.i, self.j)
    }
}

impl FromStr for Position {
    type Err = MazeError;

    /// Parse `i,j`
    fn from_str(s: &str) -> Result<Self> {
        let (i, j) = s
            .split_once(',')
            .ok_or_else(|| invalid_parameter("position", &s, &"expected 'i,j'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| invalid_parameter("position", &s, &e))
        };
        Ok(Self::new(parse(i)?, parse(j)?))
    }
}

/// Unit heading along one grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0
    North,
    /// Toward the last row
    South,
    /// Toward the last column
    East,
    /// Toward column 0
    West,
}

impl Direction {
    /// All four headings
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Convert a raw `(i, j)` step into a heading
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDirection`] unless exactly one component is
    /// non-zero and that component is `1` or `-1`
    pub const fn from_offset(i: i32, j: i32) -> Result<Self> {
        match (i, j) {
            (1, 0) => Ok(Self::East),
            (-1, 0) => Ok(Self::West),
            (0, 1) => Ok(Self::South),
            (0, -1) => Ok(Self::North),
            _ => Err(MazeError::InvalidDirection { i, j }),
        }
    }

    /// Step as `(i, j)`
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// Opposite heading
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Whether the heading moves along the column axis
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "up" | "n" => Ok(Self::North),
            "south" | "down" | "s" => Ok(Self::South),
            "east" | "right" | "e" => Ok(Self::East),
            "west" | "left" | "w" => Ok(Self::West),
            _ => Err(invalid_parameter(
                "heading",
                &s,
                &"expected north, south, east or west",
            )),
        }
    }
}

impl Maze {
    /// Check whether the boundary crossed by stepping from `pos` toward `dir` is walled
    ///
    /// Stepping east consults the vertical wall at column `i + 1`, west the one
    /// at column `i`; south consults the horizontal wall at row `j + 1`, north
    /// the one at row `j`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `pos` is not a cell of this maze
    pub fn has_wall(&self, pos: Position, dir: Direction) -> Result<bool> {
        self.check_position(pos)?;

        let wall = match dir {
            Direction::East => self.vert().get([pos.j, pos.i + 1]),
            Direction::West => self.vert().get([pos.j, pos.i]),
            Direction::South => self.horiz().get([pos.j + 1, pos.i]),
            Direction::North => self.horiz().get([pos.j, pos.i]),
        };

        // Shapes are fixed at construction, so an in-bounds cell always has all four sides
        Ok(wall.copied().unwrap_or(true))
    }

    /// True if an agent at `pos` facing `dir` can step forward without crossing a wall
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `pos` is not a cell of this maze
    pub fn can_move_forward(&self, pos: Position, dir: Direction) -> Result<bool> {
        self.has_wall(pos, dir).map(|wall| !wall)
    }

    /// True if an agent at `pos` facing `dir` can step backward without crossing a wall
    ///
    /// Identical to moving forward along the reversed heading.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `pos` is not a cell of this maze
    pub fn can_move_backward(&self, pos: Position, dir: Direction) -> Result<bool> {
        self.can_move_forward(pos, dir.reverse())
    }

    /// Cell adjacent to `pos` in direction `dir`, ignoring walls
    ///
    /// Returns `None` when the step would leave the grid or `pos` itself is outside it.
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        if self.check_position(pos).is_err() {
            return None;
        }
        let next = match dir {
            Direction::North => Position::new(pos.i, pos.j.checked_sub(1)?),
            Direction::South => Position::new(pos.i, pos.j + 1),
            Direction::East => Position::new(pos.i + 1, pos.j),
            Direction::West => Position::new(pos.i.checked_sub(1)?, pos.j),
        };
        self.check_position(next).ok().map(|()| next)
    }

    /// Headings an agent at `pos` can move along
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `pos` is not a cell of this maze
    pub fn open_directions(&self, pos: Position) -> Result<Vec<Direction>> {
        let mut open = Vec::with_capacity(Direction::ALL.len());
        for dir in Direction::ALL {
            if self.can_move_forward(pos, dir)? {
                open.push(dir);
            }
        }
        Ok(open)
    }

    fn check_position(&self, pos: Position) -> Result<()> {
        if pos.i < self.width() && pos.j < self.height() {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                position: [pos.i, pos.j],
                width: self.width(),
                height: self.height(),
            })
        }
    }
}
