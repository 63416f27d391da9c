//! Dense row-major grid of climate cells.

use crate::{BoardError, ClimateCell};

/// The four orthogonal neighbor offsets, in `(dx, dy)` form.
pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// A `width x height` board of [`ClimateCell`]s, indexed by `(x, y)`.
///
/// Cells are stored row-major: `index = x + width * y`. Every cell always holds
/// a complete value; edits go through read-modify-write of whole cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClimateGrid {
    width: usize,
    height: usize,
    cells: Vec<ClimateCell>,
}

impl ClimateGrid {
    /// Creates a grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: usize, height: usize, fill: ClimateCell) -> Result<Self, BoardError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; width * height],
        })
    }

    /// Wraps an existing row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] for a zero dimension and
    /// [`BoardError::SizeMismatch`] if `cells.len() != width * height`.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<ClimateCell>,
    ) -> Result<Self, BoardError> {
        check_dimensions(width, height)?;
        if cells.len() != width * height {
            return Err(BoardError::SizeMismatch {
                width,
                height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid by evaluating `f(x, y)` for every cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either dimension is zero.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> ClimateCell,
    ) -> Result<Self, BoardError> {
        check_dimensions(width, height)?;
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns `true` if `(x, y)` addresses a cell on this board.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Reads the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board.
    pub fn get(&self, x: usize, y: usize) -> ClimateCell {
        self.cells[self.index(x, y)]
    }

    /// Overwrites the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board.
    pub fn set(&mut self, x: usize, y: usize, cell: ClimateCell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Replaces the cell at `(x, y)` with `f(old)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board.
    pub fn update(&mut self, x: usize, y: usize, f: impl FnOnce(ClimateCell) -> ClimateCell) {
        let cell = self.get(x, y);
        self.set(x, y, f(cell));
    }

    /// Returns the coordinates of the cell offset by `(dx, dy)` from `(x, y)`,
    /// or `None` if that falls off the board. No wraparound.
    pub fn offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.contains(nx, ny).then_some((nx, ny))
    }

    /// Iterates the in-bounds orthogonal neighbors of `(x, y)`.
    pub fn orthogonal_neighbors(
        &self,
        x: usize,
        y: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        ORTHOGONAL
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(x, y, dx, dy))
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[ClimateCell] {
        &self.cells
    }

    /// Iterates `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, ClimateCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) outside {}x{} board",
            self.width,
            self.height
        );
        x + self.width * y
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), BoardError> {
    if width == 0 || height == 0 {
        return Err(BoardError::InvalidDimensions { width, height });
    }
    Ok(())
}
