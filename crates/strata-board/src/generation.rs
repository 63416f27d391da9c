//! Board generators: offset Perlin fields, seeded uniform noise and flat boards.

use glam::Vec2;
use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{BoardError, CELL_MAX, ClimateCell, ClimateGrid};

/// Parameters for noise-driven board generation.
///
/// Every field samples the same Perlin source at `(x / scale, (y + offset) / scale)`.
/// The large per-field offsets keep the fields from correlating.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParams {
    /// Seed for the Perlin permutation table.
    pub seed: u32,
    /// Spatial scale in cells per noise unit. Default: 10.
    pub scale: f64,
    /// Noise-space row offset for altitude.
    pub altitude_offset: f64,
    /// Noise-space row offset for moisture.
    pub moisture_offset: f64,
    /// Noise-space row offset for temperature.
    pub temperature_offset: f64,
    /// Noise-space row offset for the eastward wind component.
    pub east_wind_offset: f64,
    /// Noise-space row offset for the southward wind component.
    pub south_wind_offset: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: 0,
            scale: 10.0,
            altitude_offset: 2234.0,
            moisture_offset: 3234.0,
            temperature_offset: 4234.0,
            east_wind_offset: 5234.0,
            south_wind_offset: 6234.0,
        }
    }
}

impl NoiseParams {
    /// Default parameters with the given seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

/// Generates a board from five offset Perlin fields (three climate fields and
/// two wind components).
///
/// # Errors
///
/// Returns [`BoardError::InvalidDimensions`] if either dimension is zero.
pub fn generate(
    width: usize,
    height: usize,
    params: &NoiseParams,
) -> Result<ClimateGrid, BoardError> {
    let perlin = Perlin::new(params.seed);
    let sample = |x: usize, y: usize, offset: f64| -> f64 {
        let raw = perlin.get([x as f64 / params.scale, (y as f64 + offset) / params.scale]);
        // Perlin output is in [-1, 1]; remap to the unit interval.
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    };
    let to_field = |v: f64| (v * CELL_MAX as f64) as i32;

    let grid = ClimateGrid::from_fn(width, height, |x, y| {
        let wind = Vec2::new(
            (sample(x, y, params.east_wind_offset) - 0.5) as f32,
            (sample(x, y, params.south_wind_offset) - 0.5) as f32,
        );
        ClimateCell::new(
            to_field(sample(x, y, params.altitude_offset)),
            to_field(sample(x, y, params.moisture_offset)),
            to_field(sample(x, y, params.temperature_offset)),
        )
        .with_wind(wind)
    })?;

    tracing::debug!(width, height, seed = params.seed, "generated noise board");
    Ok(grid)
}

/// Generates a board of independent uniform samples from a seeded ChaCha8 stream.
///
/// # Errors
///
/// Returns [`BoardError::InvalidDimensions`] if either dimension is zero.
pub fn random(width: usize, height: usize, seed: u64) -> Result<ClimateGrid, BoardError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grid = ClimateGrid::from_fn(width, height, |_, _| {
        let altitude = rng.random_range(0..=CELL_MAX);
        let moisture = rng.random_range(0..=CELL_MAX);
        let temperature = rng.random_range(0..=CELL_MAX);
        let wind = Vec2::new(rng.random_range(-0.5..=0.5), rng.random_range(-0.5..=0.5));
        ClimateCell::new(altitude, moisture, temperature).with_wind(wind)
    })?;

    tracing::debug!(width, height, seed, "generated random board");
    Ok(grid)
}

/// Creates a board where every cell equals `cell`.
///
/// # Errors
///
/// Returns [`BoardError::InvalidDimensions`] if either dimension is zero.
pub fn uniform(width: usize, height: usize, cell: ClimateCell) -> Result<ClimateGrid, BoardError> {
    ClimateGrid::new(width, height, cell)
}
