//! Dense two-dimensional boolean cell grid.

use std::fmt;

use crate::error::ValidationError;
use crate::validate::validate;

/// One generation of cells: `height` rows of `width` booleans.
///
/// Cells are stored in a single contiguous row-major allocation, so a
/// grid is one heap block regardless of its row count. Dimensions are
/// fixed at construction and a grid is never empty: every constructor
/// goes through [`validate`] or an equivalent dimension check.
///
/// `true` means alive, `false` means dead.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Build a grid from nested rows, validating that they form a
    /// non-empty rectangle.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, ValidationError> {
        validate(rows)?;
        let height = rows.len();
        let width = rows[0].as_ref().len();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            cells.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// An all-dead grid with `width` columns and `height` rows.
    ///
    /// Returns `Err(ValidationError::ZeroDimension)` if either dimension
    /// is zero.
    pub fn dead(width: usize, height: usize) -> Result<Self, ValidationError> {
        if width == 0 || height == 0 {
            return Err(ValidationError::ZeroDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// An all-dead grid with the listed `(row, col)` cells set alive.
    ///
    /// Coordinates outside the grid are ignored.
    pub fn from_live_cells(
        width: usize,
        height: usize,
        live: &[(usize, usize)],
    ) -> Result<Self, ValidationError> {
        let mut grid = Self::dead(width, height)?;
        for &(row, col) in live {
            if row < height && col < width {
                grid.set(row, col, true);
            }
        }
        Ok(grid)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cell state at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.height && col < self.width {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Whether the cell at `(row, col)` is alive.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        self.cells[self.index(row, col)]
    }

    /// Set the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        let i = self.index(row, col);
        self.cells[i] = alive;
    }

    /// Borrow row `r` as a slice.
    pub fn row(&self, r: usize) -> &[bool] {
        let start = r * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, bool> {
        self.cells.chunks_exact(self.width)
    }

    /// Iterate mutably over rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, bool> {
        self.cells.chunks_exact_mut(self.width)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// Overwrite every cell with `other`'s.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn copy_from(&mut self, other: &Grid) {
        assert_eq!(
            self.dims(),
            other.dims(),
            "copy_from between grids of different dimensions"
        );
        self.cells.copy_from_slice(&other.cells);
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = ValidationError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
