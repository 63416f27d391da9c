//! Explicit diffusion of moisture and temperature across the board.

use crate::{ClimateCell, ClimateGrid};

/// Weight given to each present orthogonal neighbor in one diffusion step.
///
/// A cell's new value is `old + k * sum(neighbor - old)` over the neighbors that
/// exist, so edge and corner cells keep more of their own value than interior
/// cells do. That asymmetry is part of the model and is not renormalized.
pub const DIFFUSION_COEFFICIENT: f32 = 0.125;

/// Runs one diffusion step over moisture and temperature.
///
/// Reads only from `grid` and writes a new board, so the result does not
/// depend on visiting order. Altitude and wind are carried over unchanged.
pub fn diffuse(grid: &ClimateGrid) -> ClimateGrid {
    let mut next = grid.clone();
    for (x, y, cell) in grid.iter() {
        let mut moisture_flux = 0.0_f32;
        let mut temperature_flux = 0.0_f32;
        for (nx, ny) in grid.orthogonal_neighbors(x, y) {
            let neighbor = grid.get(nx, ny);
            moisture_flux += (neighbor.moisture - cell.moisture) as f32;
            temperature_flux += (neighbor.temperature - cell.temperature) as f32;
        }

        let step = |old: i32, flux: f32| (old as f32 + DIFFUSION_COEFFICIENT * flux).round() as i32;
        next.set(
            x,
            y,
            ClimateCell {
                moisture: step(cell.moisture, moisture_flux),
                temperature: step(cell.temperature, temperature_flux),
                ..cell
            }
            .clamped(),
        );
    }
    next
}
