//! Board-wide water level from total moisture and altitude bands.

use crate::{AltitudeBiome, CELL_MAX, ClimateGrid, altitude_category};

/// Number of altitude bands water can fill.
const WATER_LEVELS: usize = AltitudeBiome::CONCRETE.len();

/// Computes the height of the board's water plane, in altitude bands.
///
/// All moisture on the board is pooled and poured into the bands from the
/// lowest up. Each cell offers one tile of capacity to its own band and every
/// band above it, and a tile holds [`CELL_MAX`] units. A band that overflows
/// adds a full `1.0` and passes the excess upward; the first band that does not
/// overflow adds its fill ratio and filling stops.
pub fn water_level(grid: &ClimateGrid) -> f32 {
    let mut total_water = 0.0_f32;
    let mut tiles_per_level = [0usize; WATER_LEVELS];

    for cell in grid.cells() {
        total_water += cell.moisture as f32;
        let band = altitude_category(cell.altitude).band().unwrap_or(0);
        for tiles in &mut tiles_per_level[band..] {
            *tiles += 1;
        }
    }

    let mut level = 0.0;
    for tiles in tiles_per_level {
        if tiles == 0 {
            // No ground this low: the surface rises through the band for free.
            level += 1.0;
            continue;
        }
        let capacity = (tiles * CELL_MAX as usize) as f32;
        let fill = total_water / capacity;
        if fill > 1.0 {
            level += 1.0;
            total_water -= capacity;
        } else {
            level += fill;
            break;
        }
    }
    level
}
