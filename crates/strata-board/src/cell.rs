//! A single climate sample on the board.

use glam::Vec2;

/// Lowest value any climate field can hold.
pub const CELL_MIN: i32 = 0;
/// Highest value any climate field can hold.
pub const CELL_MAX: i32 = 100;

/// One board node: altitude, moisture and temperature in `[0, 100]`, plus wind.
///
/// Equality ignores wind.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClimateCell {
    /// Ground elevation.
    pub altitude: i32,
    /// Available water.
    pub moisture: i32,
    /// Heat.
    pub temperature: i32,
    /// Prevailing wind, each component roughly in `[-0.5, 0.5]`.
    pub wind: Vec2,
}

impl ClimateCell {
    /// Creates a calm cell (zero wind).
    pub const fn new(altitude: i32, moisture: i32, temperature: i32) -> Self {
        Self {
            altitude,
            moisture,
            temperature,
            wind: Vec2::ZERO,
        }
    }

    /// Returns a copy with the given wind.
    pub fn with_wind(self, wind: Vec2) -> Self {
        Self { wind, ..self }
    }

    /// Returns a copy with every field clamped into `[CELL_MIN, CELL_MAX]`.
    pub fn clamped(self) -> Self {
        Self {
            altitude: self.altitude.clamp(CELL_MIN, CELL_MAX),
            moisture: self.moisture.clamp(CELL_MIN, CELL_MAX),
            temperature: self.temperature.clamp(CELL_MIN, CELL_MAX),
            wind: self.wind,
        }
    }

    /// Returns `true` if every field lies in `[CELL_MIN, CELL_MAX]`.
    pub fn is_in_range(&self) -> bool {
        let range = CELL_MIN..=CELL_MAX;
        range.contains(&self.altitude)
            && range.contains(&self.moisture)
            && range.contains(&self.temperature)
    }
}

impl PartialEq for ClimateCell {
    fn eq(&self, other: &Self) -> bool {
        self.altitude == other.altitude
            && self.moisture == other.moisture
            && self.temperature == other.temperature
    }
}

impl Eq for ClimateCell {}
