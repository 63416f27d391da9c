//! Maps a climate cell onto the three biome axes.

use super::{AltitudeBiome, Biome, MoistureBiome, TemperatureBiome};
use crate::ClimateCell;

/// Divisor that brings a climate field into `[0, 1]`.
const CELL_SCALE: f32 = 100.0;

/// Classifies a cell into a concrete biome.
///
/// Hotter cells need more moisture to reach the same moisture band: the
/// effective moisture is `moisture - temperature / 3`. Values outside
/// `[0, 100]` extrapolate into the outermost bands.
pub fn classify(cell: &ClimateCell) -> Biome {
    let scaled_temp = cell.temperature as f32 / CELL_SCALE;
    let scaled_moist = cell.moisture as f32 / CELL_SCALE;
    let moisture_offset = scaled_moist - scaled_temp / 3.0;

    let moisture = if moisture_offset < 0.0 {
        MoistureBiome::Dry
    } else if moisture_offset < 0.33 {
        MoistureBiome::Moist
    } else if moisture_offset < 0.66 {
        MoistureBiome::Wet
    } else {
        MoistureBiome::Water
    };

    let temperature = if scaled_temp < 0.33 {
        TemperatureBiome::Cold
    } else if scaled_temp < 0.66 {
        TemperatureBiome::Temperate
    } else {
        TemperatureBiome::Tropical
    };

    Biome::new(moisture, temperature, altitude_category(cell.altitude))
}

/// Altitude band for a raw altitude value.
pub fn altitude_category(altitude: i32) -> AltitudeBiome {
    let scaled = altitude as f32 / CELL_SCALE;
    if scaled < 0.25 {
        AltitudeBiome::Valley
    } else if scaled < 0.5 {
        AltitudeBiome::Plain
    } else if scaled < 0.75 {
        AltitudeBiome::Hill
    } else {
        AltitudeBiome::Mountain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hot_parched_lowland_is_dry_tropical_valley() {
        let biome = classify(&ClimateCell::new(10, 5, 90));
        assert!(biome.same_axes(&Biome::new(
            MoistureBiome::Dry,
            TemperatureBiome::Tropical,
            AltitudeBiome::Valley
        )));
    }

    #[test]
    fn test_classification_never_emits_any() {
        for alt in (0..=100).step_by(5) {
            for moist in (0..=100).step_by(5) {
                for temp in (0..=100).step_by(5) {
                    let biome = classify(&ClimateCell::new(alt, moist, temp));
                    assert!(biome.is_concrete(), "wildcard emitted for ({alt}, {moist}, {temp})");
                }
            }
        }
    }

    #[test]
    fn test_temperature_suppresses_moisture() {
        // Same moisture, hotter cell falls into a drier band.
        let cool = classify(&ClimateCell::new(50, 40, 0));
        let hot = classify(&ClimateCell::new(50, 40, 100));
        assert_eq!(cool.moisture, MoistureBiome::Wet);
        assert_eq!(hot.moisture, MoistureBiome::Moist);
    }

    #[test]
    fn test_band_edges_are_half_open() {
        assert_eq!(altitude_category(24), AltitudeBiome::Valley);
        assert_eq!(altitude_category(25), AltitudeBiome::Plain);
        assert_eq!(altitude_category(50), AltitudeBiome::Hill);
        assert_eq!(altitude_category(75), AltitudeBiome::Mountain);
        assert_eq!(classify(&ClimateCell::new(0, 0, 32)).temperature, TemperatureBiome::Cold);
        assert_eq!(classify(&ClimateCell::new(0, 0, 33)).temperature, TemperatureBiome::Temperate);
        assert_eq!(classify(&ClimateCell::new(0, 0, 66)).temperature, TemperatureBiome::Tropical);
    }

    #[test]
    fn test_out_of_range_values_extrapolate() {
        let biome = classify(&ClimateCell::new(250, 300, -40));
        assert_eq!(biome.altitude, AltitudeBiome::Mountain);
        assert_eq!(biome.moisture, MoistureBiome::Water);
        assert_eq!(biome.temperature, TemperatureBiome::Cold);
    }
}
