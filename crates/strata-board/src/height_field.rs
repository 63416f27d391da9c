//! Quantized terrain heights derived from cell altitude.

use crate::{BoardError, CELL_MAX, ClimateGrid};

/// Row-major grid of terrain heights, one per board cell.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl HeightField {
    /// Snaps every cell's altitude to one of `levels` evenly spaced steps and
    /// scales the result by `vertical_scale`.
    ///
    /// `q = round(altitude / 100 * (levels - 1)) / (levels - 1)`, height `q * vertical_scale`.
    /// Halves round to even. With `levels <= 1` the field is flat at zero.
    pub fn build(grid: &ClimateGrid, levels: u32, vertical_scale: f32) -> Self {
        let values = if levels <= 1 {
            vec![0.0; grid.cells().len()]
        } else {
            let steps = (levels - 1) as f32;
            grid.cells()
                .iter()
                .map(|cell| {
                    let altitude = cell.altitude as f32 / CELL_MAX as f32;
                    let quantized = (altitude * steps).round_ties_even() / steps;
                    quantized * vertical_scale
                })
                .collect()
        };

        Self {
            width: grid.width(),
            height: grid.height(),
            values,
        }
    }

    /// Wraps a row-major buffer of heights.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] for a zero dimension and
    /// [`BoardError::SizeMismatch`] if `values.len() != width * height`.
    pub fn from_values(width: usize, height: usize, values: Vec<f32>) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        if values.len() != width * height {
            return Err(BoardError::SizeMismatch {
                width,
                height,
                actual: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
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

    /// Height at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the field.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(
            x < self.width && y < self.height,
            "height ({x}, {y}) outside {}x{} field",
            self.width,
            self.height
        );
        self.values[x + self.width * y]
    }

    /// Height at the cell nearest to a possibly out-of-range signed coordinate.
    pub fn get_clamped(&self, x: isize, y: isize) -> f32 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.values[cx + self.width * cy]
    }

    /// Row-major view of all heights.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Highest value in the field.
    pub fn max_height(&self) -> f32 {
        self.values.iter().copied().fold(f32::MIN, f32::max)
    }
}
