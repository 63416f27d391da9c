//! Board-space coordinates shared by the mesh builders and scene placement.
//!
//! The board is centred on the origin: column `x` of a `width`-wide board sits
//! at `x - width / 2 + 0.5` (integer halving), with rows mapped onto z the same way.

use glam::Vec3;
use strata_board::HeightField;

/// Dimensions of a height field plus a skirt border of `border` cells per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderedGrid {
    /// Interior (height field) width.
    pub width: usize,
    /// Interior (height field) height.
    pub height: usize,
    /// Border cells added on every side.
    pub border: usize,
}

impl BorderedGrid {
    /// Bordered grid around `field`.
    ///
    /// # Panics
    ///
    /// Panics if the bordered size cannot be indexed with `u32`.
    pub fn new(field: &HeightField, border: usize) -> Self {
        let grid = Self {
            width: field.width(),
            height: field.height(),
            border,
        };
        let side = |n: usize| border.checked_mul(2)?.checked_add(n)?.checked_add(2);
        let span = side(grid.width).and_then(|w| w.checked_mul(side(grid.height)?));
        assert!(
            span.is_some_and(|n| n <= u32::MAX as usize),
            "{}x{} field with border {border} is too large to index",
            grid.width,
            grid.height
        );
        grid
    }

    /// Width including both borders.
    pub fn bordered_width(&self) -> usize {
        self.width + 2 * self.border
    }

    /// Height including both borders.
    pub fn bordered_height(&self) -> usize {
        self.height + 2 * self.border
    }

    /// Interior cell whose height a bordered coordinate reuses.
    pub fn interior(&self, bx: isize, by: isize) -> (isize, isize) {
        (bx - self.border as isize, by - self.border as isize)
    }

    /// Board-space position of the bordered vertex `(bx, by)` at elevation `y`.
    pub fn position(&self, bx: isize, by: isize, y: f32) -> Vec3 {
        centered(bx, by, self.bordered_width(), self.bordered_height(), y)
    }
}

/// Board-space centre of cell `(x, y)` on an unbordered `width x height` board.
pub fn cell_center(x: usize, y: usize, width: usize, height: usize, elevation: f32) -> Vec3 {
    centered(x as isize, y as isize, width, height, elevation)
}

fn centered(x: isize, z: isize, width: usize, height: usize, y: f32) -> Vec3 {
    let half_w = (width / 2) as isize;
    let half_h = (height / 2) as isize;
    Vec3::new((x - half_w) as f32 + 0.5, y, (z - half_h) as f32 + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_board_is_centred() {
        assert_eq!(cell_center(0, 0, 4, 4, 0.0), Vec3::new(-1.5, 0.0, -1.5));
        assert_eq!(cell_center(3, 3, 4, 4, 2.0), Vec3::new(1.5, 2.0, 1.5));
    }

    #[test]
    fn test_odd_board_uses_integer_halving() {
        // 5 / 2 == 2, so the middle column lands at +0.5.
        assert_eq!(cell_center(2, 0, 5, 1, 0.0).x, 0.5);
    }

    #[test]
    fn test_border_expands_dimensions() {
        let field = HeightField::from_values(3, 2, vec![0.0; 6]).unwrap();
        let grid = BorderedGrid::new(&field, 1);
        assert_eq!(grid.bordered_width(), 5);
        assert_eq!(grid.bordered_height(), 4);
        assert_eq!(grid.interior(0, 0), (-1, -1));
        assert_eq!(grid.position(0, 0, 1.0), Vec3::new(-1.5, 1.0, -1.5));
    }

    #[test]
    #[should_panic(expected = "too large to index")]
    fn test_oversized_border_panics_with_message() {
        let field = HeightField::from_values(1, 1, vec![0.0]).unwrap();
        BorderedGrid::new(&field, usize::MAX / 2);
    }

    #[test]
    #[should_panic(expected = "too large to index")]
    fn test_border_beyond_u32_indexing_panics() {
        let field = HeightField::from_values(2, 2, vec![0.0; 4]).unwrap();
        BorderedGrid::new(&field, 40_000);
    }
}
