//! Snapshot comparison that decides which derived products need rebuilding.

use crate::{ClimateGrid, classify};

/// What changed between two board snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardDiff {
    /// Any cell's altitude, moisture or temperature differs.
    pub cells_changed: bool,
    /// Any cell's altitude differs.
    pub height_changed: bool,
    /// Any cell classifies into a different biome.
    pub biome_changed: bool,
}

impl BoardDiff {
    /// Everything changed; used for a first draw or a forced redraw.
    pub const ALL: Self = Self {
        cells_changed: true,
        height_changed: true,
        biome_changed: true,
    };

    /// Compares two snapshots cell by cell, stopping once every flag is set.
    ///
    /// Snapshots of different dimensions report everything as changed.
    pub fn compare(old: &ClimateGrid, new: &ClimateGrid) -> Self {
        if old.dimensions() != new.dimensions() {
            return Self::ALL;
        }

        let mut diff = Self::default();
        for (before, after) in old.cells().iter().zip(new.cells()) {
            if before == after {
                continue;
            }
            diff.cells_changed = true;
            if before.altitude != after.altitude {
                diff.height_changed = true;
            }
            if !diff.biome_changed && !classify(before).same_axes(&classify(after)) {
                diff.biome_changed = true;
            }
            if diff == Self::ALL {
                break;
            }
        }
        diff
    }

    /// Nothing changed: the whole redraw can be skipped.
    pub fn is_unchanged(&self) -> bool {
        !self.cells_changed
    }

    /// Terrain geometry depends only on altitude.
    pub fn needs_mesh(&self) -> bool {
        self.height_changed
    }

    /// Texture colors depend on biome and altitude shading.
    pub fn needs_texture(&self) -> bool {
        self.height_changed || self.biome_changed
    }

    /// Doodads and clouds sit on biome cells at terrain height.
    pub fn needs_placements(&self) -> bool {
        self.height_changed || self.biome_changed
    }

    /// Water level depends on every cell's moisture and altitude band.
    pub fn needs_water(&self) -> bool {
        self.cells_changed
    }
}
