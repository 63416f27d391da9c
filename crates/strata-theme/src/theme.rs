//! Biome theme: display colours and doodads per biome.
//!
//! Lookups walk a fixed priority list of reference biomes and return the first
//! wildcard match. Reference biomes overlap (a moist cold hill matches both
//! tundra and boreal), so the order of [`ThemeBiome::PRIORITY`] decides the
//! result and must not be re-sorted.

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};
use strata_board::{AltitudeBiome as A, Biome, MoistureBiome as M, TemperatureBiome as T};
use strata_mesh::{MeshData, generate_pyramid};
use thiserror::Error;

use crate::Color;

/// Colour returned for a biome no theme entry matches. Kept out of every palette
/// so coverage holes stay visible.
pub const GAP_COLOR: Color = Color::MAGENTA;

/// Errors raised when editing a theme.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    /// A palette entry equals the reserved gap colour.
    #[error("{biome:?} uses the reserved gap colour")]
    ReservedColor {
        /// Entry that used the reserved colour.
        biome: ThemeBiome,
    },
}

/// Named reference biomes of the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeBiome {
    Desert,
    IceShelf,
    Tundra,
    RainForest,
    DeepWater,
    ShallowWater,
    Forest,
    MountainForest,
    Swamp,
    Plains,
    Boreal,
    MountainBoreal,
}

impl ThemeBiome {
    /// Lookup order for colours. First match wins.
    pub const PRIORITY: [Self; 12] = [
        Self::Desert,
        Self::IceShelf,
        Self::Tundra,
        Self::RainForest,
        Self::DeepWater,
        Self::ShallowWater,
        Self::Forest,
        Self::MountainForest,
        Self::Swamp,
        Self::Plains,
        Self::Boreal,
        Self::MountainBoreal,
    ];

    /// Entries that carry a doodad, in lookup order.
    pub const DOODADS: [Self; 3] = [Self::Boreal, Self::MountainBoreal, Self::MountainForest];

    /// The wildcard biome this entry stands for.
    pub const fn reference(self) -> Biome {
        match self {
            Self::Desert => Biome::new(M::Dry, T::Any, A::Any),
            Self::IceShelf => Biome::new(M::Water, T::Any, A::Any),
            Self::Tundra => Biome::new(M::Moist, T::Cold, A::Any),
            Self::RainForest => Biome::new(M::Wet, T::Tropical, A::Any),
            Self::DeepWater => Biome::new(M::Wet, T::Any, A::Valley),
            Self::ShallowWater => Biome::new(M::Wet, T::Any, A::Plain),
            Self::Forest => Biome::new(M::Wet, T::Any, A::Hill),
            Self::MountainForest => Biome::new(M::Wet, T::Any, A::Mountain),
            Self::Swamp => Biome::new(M::Moist, T::Any, A::Valley),
            Self::Plains => Biome::new(M::Moist, T::Any, A::Plain),
            Self::Boreal => Biome::new(M::Moist, T::Any, A::Hill),
            Self::MountainBoreal => Biome::new(M::Moist, T::Any, A::Mountain),
        }
    }

    /// Doodad shape for this entry, if it has one.
    pub const fn doodad_spec(self) -> Option<DoodadSpec> {
        match self {
            Self::Boreal => Some(DoodadSpec::new(1.5, 0.28)),
            Self::MountainBoreal => Some(DoodadSpec::new(1.0, 0.3)),
            Self::MountainForest => Some(DoodadSpec::new(0.7, 0.32)),
            _ => None,
        }
    }

    fn doodad_slot(self) -> Option<usize> {
        Self::DOODADS.iter().position(|&entry| entry == self)
    }
}

/// First entry of `order` whose reference biome matches `biome`.
fn first_match(order: &[ThemeBiome], biome: Biome) -> Option<ThemeBiome> {
    order.iter().copied().find(|entry| entry.reference() == biome)
}

/// The theme palette, one colour per reference biome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub desert: Color,
    pub ice_shelf: Color,
    pub tundra: Color,
    pub rain_forest: Color,
    pub deep_water: Color,
    pub shallow_water: Color,
    pub forest: Color,
    pub mountain_forest: Color,
    pub swamp: Color,
    pub plains: Color,
    pub boreal: Color,
    pub mountain_boreal: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            desert: Color::rgb(1.0, 0.85, 0.5),
            ice_shelf: Color::rgb(1.0, 1.0, 1.0),
            tundra: Color::rgb(0.7, 0.65, 0.75),
            rain_forest: Color::rgb(0.25, 0.5, 0.0),
            deep_water: Color::rgb(0.0, 0.25, 1.0),
            shallow_water: Color::rgb(0.0, 0.5, 1.0),
            forest: Color::rgb(0.0, 0.75, 0.25),
            mountain_forest: Color::rgb(0.5, 0.5, 0.25),
            swamp: Color::rgb(0.25, 0.25, 0.15),
            plains: Color::rgb(0.5, 0.75, 0.25),
            boreal: Color::rgb(0.25, 0.5, 0.5),
            mountain_boreal: Color::rgb(0.65, 0.75, 0.75),
        }
    }
}

impl ThemeColors {
    /// Colour of one entry.
    pub fn get(&self, biome: ThemeBiome) -> Color {
        match biome {
            ThemeBiome::Desert => self.desert,
            ThemeBiome::IceShelf => self.ice_shelf,
            ThemeBiome::Tundra => self.tundra,
            ThemeBiome::RainForest => self.rain_forest,
            ThemeBiome::DeepWater => self.deep_water,
            ThemeBiome::ShallowWater => self.shallow_water,
            ThemeBiome::Forest => self.forest,
            ThemeBiome::MountainForest => self.mountain_forest,
            ThemeBiome::Swamp => self.swamp,
            ThemeBiome::Plains => self.plains,
            ThemeBiome::Boreal => self.boreal,
            ThemeBiome::MountainBoreal => self.mountain_boreal,
        }
    }

    /// Checks that no entry uses [`GAP_COLOR`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ReservedColor`] naming the first offending entry.
    pub fn validate(&self) -> Result<(), ThemeError> {
        match ThemeBiome::PRIORITY
            .iter()
            .find(|&&biome| self.get(biome) == GAP_COLOR)
        {
            Some(&biome) => Err(ThemeError::ReservedColor { biome }),
            None => Ok(()),
        }
    }
}

/// Size of a pyramid doodad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoodadSpec {
    pub height: f32,
    pub base_size: f32,
}

impl DoodadSpec {
    pub const fn new(height: f32, base_size: f32) -> Self {
        Self { height, base_size }
    }
}

/// A doodad ready for placement: its colour, size and pyramid mesh.
#[derive(Clone, Debug)]
pub struct Doodad {
    pub color: Color,
    pub height: f32,
    pub base_size: f32,
    pub mesh: MeshData,
}

impl Doodad {
    fn build(color: Color, spec: DoodadSpec) -> Self {
        Self {
            color,
            height: spec.height,
            base_size: spec.base_size,
            mesh: generate_pyramid(spec.height, spec.base_size),
        }
    }
}

/// Palette plus lazily built doodads.
#[derive(Debug, Default)]
pub struct BiomeTheme {
    colors: ThemeColors,
    doodads: [OnceCell<Doodad>; 3],
}

impl BiomeTheme {
    /// Creates a theme with the given palette.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ReservedColor`] if any entry uses [`GAP_COLOR`].
    pub fn new(colors: ThemeColors) -> Result<Self, ThemeError> {
        colors.validate()?;
        Ok(Self {
            colors,
            doodads: Default::default(),
        })
    }

    /// Current palette.
    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    /// Replaces the palette and drops cached doodads so they pick up the new colours.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ReservedColor`] and leaves the theme untouched if
    /// any entry uses [`GAP_COLOR`].
    pub fn set_colors(&mut self, colors: ThemeColors) -> Result<(), ThemeError> {
        colors.validate()?;
        self.colors = colors;
        self.reset_doodads();
        Ok(())
    }

    /// Entry that decides the colour of `biome`.
    pub fn entry_of(&self, biome: Biome) -> Option<ThemeBiome> {
        first_match(&ThemeBiome::PRIORITY, biome)
    }

    /// Display colour of `biome`, or [`GAP_COLOR`] when no entry matches.
    pub fn color_of(&self, biome: Biome) -> Color {
        self.entry_of(biome)
            .map_or(GAP_COLOR, |entry| self.colors.get(entry))
    }

    /// Doodad for `biome`, built on first request and cached until the next reset.
    ///
    /// Doodad entries are matched on their own, independent of the colour
    /// priority list.
    pub fn doodad_of(&self, biome: Biome) -> Option<&Doodad> {
        self.doodad(self.doodad_entry_of(biome)?)
    }

    /// Entry whose doodad `biome` carries, if any.
    pub fn doodad_entry_of(&self, biome: Biome) -> Option<ThemeBiome> {
        first_match(&ThemeBiome::DOODADS, biome)
    }

    /// Cached doodad of a theme entry; `None` for entries without one.
    pub fn doodad(&self, entry: ThemeBiome) -> Option<&Doodad> {
        let slot = entry.doodad_slot()?;
        let spec = entry.doodad_spec()?;
        Some(self.doodads[slot].get_or_init(|| {
            tracing::debug!(?entry, "building doodad");
            Doodad::build(self.colors.get(entry), spec)
        }))
    }

    /// Number of doodads currently cached.
    pub fn cached_doodads(&self) -> usize {
        self.doodads.iter().filter(|cell| cell.get().is_some()).count()
    }

    /// Clears the doodad cache.
    pub fn reset_doodads(&mut self) {
        for cell in &mut self.doodads {
            cell.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use strata_board::{AltitudeBiome, MoistureBiome, TemperatureBiome};

    use super::*;

    fn concrete_biomes() -> impl Iterator<Item = Biome> {
        MoistureBiome::CONCRETE.into_iter().flat_map(|m| {
            TemperatureBiome::CONCRETE.into_iter().flat_map(move |t| {
                AltitudeBiome::CONCRETE
                    .into_iter()
                    .map(move |a| Biome::new(m, t, a))
            })
        })
    }

    #[test]
    fn test_default_palette_colors() {
        let theme = BiomeTheme::default();
        assert_eq!(
            theme.color_of(Biome::new(M::Dry, T::Cold, A::Hill)),
            Color::rgb(1.0, 0.85, 0.5)
        );
        assert_eq!(
            theme.color_of(Biome::new(M::Wet, T::Temperate, A::Valley)),
            Color::rgb(0.0, 0.25, 1.0)
        );
    }

    #[test]
    fn test_higher_priority_wildcard_wins() {
        let theme = BiomeTheme::default();
        // A moist cold hill matches both Tundra and Boreal; Tundra is listed first.
        let biome = Biome::new(M::Moist, T::Cold, A::Hill);
        assert_eq!(theme.entry_of(biome), Some(ThemeBiome::Tundra));
        assert_eq!(theme.color_of(biome), theme.colors().tundra);
        // A wet tropical valley is rain forest, not deep water.
        let biome = Biome::new(M::Wet, T::Tropical, A::Valley);
        assert_eq!(theme.entry_of(biome), Some(ThemeBiome::RainForest));
    }

    #[test]
    fn test_every_concrete_biome_is_covered() {
        let theme = BiomeTheme::default();
        for biome in concrete_biomes() {
            assert_ne!(theme.color_of(biome), GAP_COLOR, "{biome:?} fell through the theme");
        }
    }

    #[test]
    fn test_first_match_skips_unlisted_entries() {
        // The full priority list covers every concrete biome, so gaps only show on sublists.
        let biome = Biome::new(M::Moist, T::Temperate, A::Plain);
        assert_eq!(first_match(&[ThemeBiome::Desert, ThemeBiome::Tundra], biome), None);
        assert_eq!(
            first_match(&[ThemeBiome::Desert, ThemeBiome::Plains], biome),
            Some(ThemeBiome::Plains)
        );
    }

    #[test]
    fn test_default_palette_avoids_gap_color() {
        assert!(ThemeColors::default().validate().is_ok());
    }

    #[test]
    fn test_doodads_only_for_listed_entries() {
        let theme = BiomeTheme::default();
        let boreal = theme.doodad_of(Biome::new(M::Moist, T::Temperate, A::Hill)).unwrap();
        assert_eq!(boreal.height, 1.5);
        assert_eq!(boreal.base_size, 0.28);
        assert_eq!(boreal.color, theme.colors().boreal);
        assert_eq!(boreal.mesh.vertex_count(), 4);

        let forest = theme.doodad_of(Biome::new(M::Wet, T::Cold, A::Mountain)).unwrap();
        assert_eq!(forest.height, 0.7);
        assert!(theme.doodad_of(Biome::new(M::Dry, T::Cold, A::Valley)).is_none());
        assert!(theme.doodad_of(Biome::new(M::Wet, T::Cold, A::Hill)).is_none());
    }

    #[test]
    fn test_doodad_matching_ignores_color_priority() {
        let theme = BiomeTheme::default();
        // Coloured as tundra but still carries the boreal doodad.
        let biome = Biome::new(M::Moist, T::Cold, A::Hill);
        assert_eq!(theme.entry_of(biome), Some(ThemeBiome::Tundra));
        assert_eq!(theme.doodad_of(biome).unwrap().height, 1.5);
    }

    #[test]
    fn test_doodads_are_cached_until_reset() {
        let mut theme = BiomeTheme::default();
        let hill = Biome::new(M::Moist, T::Temperate, A::Hill);
        assert_eq!(theme.cached_doodads(), 0);
        let first: *const Doodad = theme.doodad_of(hill).unwrap();
        let second: *const Doodad = theme.doodad_of(hill).unwrap();
        assert_eq!(first, second, "second request should hit the cache");
        assert_eq!(theme.cached_doodads(), 1);

        theme.reset_doodads();
        assert_eq!(theme.cached_doodads(), 0);
    }

    #[test]
    fn test_set_colors_refreshes_doodads() {
        let mut theme = BiomeTheme::default();
        let hill = Biome::new(M::Moist, T::Temperate, A::Hill);
        let _ = theme.doodad_of(hill);

        let colors = ThemeColors {
            boreal: Color::rgb(0.1, 0.2, 0.3),
            ..ThemeColors::default()
        };
        theme.set_colors(colors).unwrap();
        assert_eq!(theme.cached_doodads(), 0);
        assert_eq!(theme.doodad_of(hill).unwrap().color, Color::rgb(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_set_colors_rejects_gap_color() {
        let mut theme = BiomeTheme::default();
        let colors = ThemeColors {
            swamp: GAP_COLOR,
            ..ThemeColors::default()
        };
        assert_eq!(
            theme.set_colors(colors),
            Err(ThemeError::ReservedColor {
                biome: ThemeBiome::Swamp
            })
        );
        assert_eq!(theme.colors(), &ThemeColors::default());
        assert!(BiomeTheme::new(ThemeColors {
            plains: GAP_COLOR,
            ..ThemeColors::default()
        })
        .is_err());
    }
}
