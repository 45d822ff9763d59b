//! Wall-flag storage for rectangular mazes
//!
//! A maze of `width` x `height` cells keeps two boolean arrays indexed
//! `[row, column]`. `horiz` holds the `height + 1` horizontal boundaries
//! (row 0 is the top edge, row `height` the bottom edge) and `vert` holds the
//! `width + 1` vertical boundaries of each cell row (column 0 is the left edge).

use log::debug;
use ndarray::{Array2, ArrayViewMut2};
use num_traits::Zero;

use crate::io::configuration::MAX_MAZE_DIMENSION;
use crate::io::error::{MazeError, Result};

/// Rectangular maze described by its wall segments
///
/// Every constructor checks the array shapes, so `horiz` is always
/// `(height + 1, width)` and `vert` is always `(height, width + 1)`.
/// Cloning deep-copies both arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    horiz: Array2<bool>,
    vert: Array2<bool>,
}

impl Maze {
    /// Build a maze with every wall slot set to `fill_walls`
    ///
    /// A `height` of `None` or `Some(0)` produces a square maze.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if `width` is zero or either
    /// dimension exceeds [`MAX_MAZE_DIMENSION`]
    pub fn uniform(width: usize, height: Option<usize>, fill_walls: bool) -> Result<Self> {
        let height = height.filter(|&h| h != 0).unwrap_or(width);
        check_dimensions(width, height)?;

        debug!("Building uniform {width}x{height} maze (walls: {fill_walls})");

        Ok(Self {
            width,
            height,
            horiz: Array2::from_elem((height + 1, width), fill_walls),
            vert: Array2::from_elem((height, width + 1), fill_walls),
        })
    }

    /// Adopt caller-built wall arrays
    ///
    /// Dimensions are taken from `vert`, which must be `(height, width + 1)`;
    /// `horiz` must then be `(height + 1, width)`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::WallShape`] if the arrays disagree, or
    /// [`MazeError::InvalidDimensions`] if the implied maze is empty or too large
    pub fn from_walls(horiz: Array2<bool>, vert: Array2<bool>) -> Result<Self> {
        let (height, vert_cols) = vert.dim();
        let width = vert_cols.saturating_sub(1);
        check_dimensions(width, height)?;

        let expected = (height + 1, width);
        if horiz.dim() != expected {
            return Err(MazeError::WallShape {
                array: "horiz",
                expected,
                found: horiz.dim(),
            });
        }

        Ok(Self {
            width,
            height,
            horiz,
            vert,
        })
    }

    /// Adopt numeric wall flags, treating any non-zero value as a wall
    ///
    /// # Errors
    ///
    /// Same conditions as [`Maze::from_walls`]
    pub fn from_flags<T: Zero>(horiz: &Array2<T>, vert: &Array2<T>) -> Result<Self> {
        Self::from_walls(horiz.map(|v| !v.is_zero()), vert.map(|v| !v.is_zero()))
    }

    /// Number of cells horizontally
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cells vertically
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Horizontal wall flags, shape `(height + 1, width)`
    pub const fn horiz(&self) -> &Array2<bool> {
        &self.horiz
    }

    /// Vertical wall flags, shape `(height, width + 1)`
    pub const fn vert(&self) -> &Array2<bool> {
        &self.vert
    }

    /// Mutable view of the horizontal walls for programmatic edits
    pub fn horiz_mut(&mut self) -> ArrayViewMut2<'_, bool> {
        self.horiz.view_mut()
    }

    /// Mutable view of the vertical walls for programmatic edits
    pub fn vert_mut(&mut self) -> ArrayViewMut2<'_, bool> {
        self.vert.view_mut()
    }

    /// Number of wall segments present, interior and boundary
    pub fn wall_count(&self) -> usize {
        self.horiz.iter().chain(self.vert.iter()).filter(|&&w| w).count()
    }

    /// Check whether every boundary segment of the grid is walled
    pub fn is_enclosed(&self) -> bool {
        let last_row = self.height;
        let last_col = self.width;
        let top_bottom = self
            .horiz
            .rows()
            .into_iter()
            .enumerate()
            .filter(|(j, _)| *j == 0 || *j == last_row)
            .all(|(_, row)| row.iter().all(|&w| w));
        let sides = self.vert.rows().into_iter().all(|row| {
            row.get(0).copied().unwrap_or(false) && row.get(last_col).copied().unwrap_or(false)
        });
        top_bottom && sides
    }

    /// Assemble a maze from arrays whose shapes the caller has already checked
    pub(crate) const fn from_parts(
        width: usize,
        height: usize,
        horiz: Array2<bool>,
        vert: Array2<bool>,
    ) -> Self {
        Self {
            width,
            height,
            horiz,
            vert,
        }
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidDimensions {
            width,
            height,
            reason: "width and height must be positive",
        });
    }
    if width > MAX_MAZE_DIMENSION || height > MAX_MAZE_DIMENSION {
        return Err(MazeError::InvalidDimensions {
            width,
            height,
            reason: "dimension exceeds the supported maximum",
        });
    }
    Ok(())
}
