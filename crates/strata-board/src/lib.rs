//! Climate board model: the cell grid, its generators and brush edits, biome
//! classification, the quantized height field and redraw diffing.

mod cell;
mod diff;
mod diffusion;
mod edit;
mod error;
mod generation;
mod grid;
mod height_field;
mod water;

pub mod biome;

pub use biome::{
    AltitudeBiome, Biome, BiomeMap, MoistureBiome, TemperatureBiome, altitude_category, classify,
};
pub use cell::{CELL_MAX, CELL_MIN, ClimateCell};
pub use diff::BoardDiff;
pub use diffusion::{DIFFUSION_COEFFICIENT, diffuse};
pub use edit::{BrushAction, NEIGHBOR_ALTITUDE_DELTA};
pub use error::BoardError;
pub use generation::{NoiseParams, generate, random, uniform};
pub use grid::ClimateGrid;
pub use height_field::HeightField;
pub use water::water_level;
