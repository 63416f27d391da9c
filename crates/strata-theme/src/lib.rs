//! Biome presentation: the colour type, the biome theme with its doodad cache,
//! and the per-cell colour field that becomes the board texture.

mod color;
mod color_field;
mod theme;

pub use color::Color;
pub use color_field::{ColorField, HD_BLOCK, SHADE_BLEND, SLOPE_BLEND};
pub use theme::{BiomeTheme, Doodad, DoodadSpec, GAP_COLOR, ThemeBiome, ThemeColors, ThemeError};
