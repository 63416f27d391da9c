//! Per-cell biome classification of a whole board.

use super::{Biome, classify};
use crate::ClimateGrid;

/// Row-major grid of classified biomes, one per board cell.
#[derive(Clone, Debug)]
pub struct BiomeMap {
    width: usize,
    height: usize,
    biomes: Vec<Biome>,
}

impl BiomeMap {
    /// Classifies every cell of `grid`.
    pub fn classify(grid: &ClimateGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            biomes: grid.cells().iter().map(classify).collect(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Biome of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the map.
    pub fn get(&self, x: usize, y: usize) -> Biome {
        assert!(
            x < self.width && y < self.height,
            "biome ({x}, {y}) outside {}x{} map",
            self.width,
            self.height
        );
        self.biomes[x + self.width * y]
    }

    /// Row-major view of all biomes.
    pub fn biomes(&self) -> &[Biome] {
        &self.biomes
    }
}
