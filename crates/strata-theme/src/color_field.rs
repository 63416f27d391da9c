//! Per-cell texture colours: biome colour shaded by altitude, with optional
//! 2x2 corner detail that bleeds colour down slopes.

use strata_board::{BiomeMap, CELL_MAX, ClimateGrid, HeightField};

use crate::{BiomeTheme, Color};

/// Share of a higher neighbour's biome colour blended into a corner.
pub const SLOPE_BLEND: f32 = 0.5;
/// Share of the altitude shade blended into every texel.
pub const SHADE_BLEND: f32 = 0.33;
/// Texels per cell side in high-detail mode.
pub const HD_BLOCK: usize = 2;

/// Neighbour offsets checked for each corner, highest priority first. The
/// diagonal comes first, then the two orthogonal cells sharing the corner.
/// Negative `dy` is north.
const CORNERS: [[(isize, isize); 3]; 4] = [
    [(-1, -1), (0, -1), (-1, 0)], // NW
    [(1, -1), (0, -1), (1, 0)],   // NE
    [(-1, 1), (0, 1), (-1, 0)],   // SW
    [(1, 1), (0, 1), (1, 0)],     // SE
];

/// Row-major texture colours for a board.
///
/// In low-detail mode there is one texel per cell. In high-detail mode every
/// cell owns a 2x2 block: texels `(2x, 2y)`, `(2x+1, 2y)`, `(2x, 2y+1)` and
/// `(2x+1, 2y+1)` of a `2 * width` wide texture hold its NW, NE, SW and SE corners.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorField {
    width: usize,
    height: usize,
    high_detail: bool,
    colors: Vec<Color>,
}

impl ColorField {
    /// Builds the colour field for `grid`.
    ///
    /// # Panics
    ///
    /// Panics if `heights` or `biomes` do not have the grid's dimensions.
    pub fn build(
        grid: &ClimateGrid,
        heights: &HeightField,
        biomes: &BiomeMap,
        theme: &BiomeTheme,
        high_detail: bool,
    ) -> Self {
        let (width, height) = grid.dimensions();
        assert!(
            (heights.width(), heights.height()) == (width, height)
                && (biomes.width(), biomes.height()) == (width, height),
            "colour inputs disagree with the {width}x{height} board"
        );

        let block = if high_detail { HD_BLOCK } else { 1 };
        let mut colors = vec![Color::BLACK; width * height * block * block];

        for (x, y, cell) in grid.iter() {
            let base = theme.color_of(biomes.get(x, y));
            let shade = Color::grey(cell.altitude as f32 / CELL_MAX as f32);

            if !high_detail {
                colors[x + width * y] = base.lerp(shade, SHADE_BLEND);
                continue;
            }

            let own_height = heights.get(x, y);
            let higher = |(dx, dy): (isize, isize)| {
                grid.offset(x, y, dx, dy)
                    .filter(|&(nx, ny)| heights.get(nx, ny) > own_height)
            };

            let origin = x * HD_BLOCK + width * y * HD_BLOCK * HD_BLOCK;
            let stride = width * HD_BLOCK;
            let slots = [origin, origin + 1, origin + stride, origin + stride + 1];
            for (slot, candidates) in slots.into_iter().zip(CORNERS) {
                let corner = candidates
                    .into_iter()
                    .find_map(&higher)
                    .map_or(base, |(nx, ny)| {
                        base.lerp(theme.color_of(biomes.get(nx, ny)), SLOPE_BLEND)
                    });
                colors[slot] = corner.lerp(shade, SHADE_BLEND);
            }
        }

        tracing::debug!(width, height, high_detail, "built colour field");
        Self {
            width,
            height,
            high_detail,
            colors,
        }
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether each cell owns a 2x2 block.
    pub fn is_high_detail(&self) -> bool {
        self.high_detail
    }

    /// Texture dimensions in texels.
    pub fn texture_size(&self) -> (usize, usize) {
        let block = if self.high_detail { HD_BLOCK } else { 1 };
        (self.width * block, self.height * block)
    }

    /// Texels in row-major order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Texels as tightly packed RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}
