//! Biome classification: categorical moisture/temperature/altitude axes with
//! wildcard matching, the per-cell classifier and a classified board map.

mod category;
mod classifier;
mod map;

pub use category::{AltitudeBiome, Biome, MoistureBiome, TemperatureBiome};
pub use classifier::{altitude_category, classify};
pub use map::BiomeMap;
