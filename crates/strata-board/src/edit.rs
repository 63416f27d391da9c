//! Terraforming brush edits.

use crate::{ClimateCell, ClimateGrid};

/// Altitude change applied to each in-bounds orthogonal neighbor of a
/// raised or lowered cell, so single edits do not leave one-cell spikes.
pub const NEIGHBOR_ALTITUDE_DELTA: i32 = 2;

/// A brush edit applied to one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BrushAction {
    /// Add moisture.
    Wet,
    /// Remove moisture.
    Dry,
    /// Add heat.
    Hot,
    /// Remove heat.
    Cold,
    /// Raise the ground; neighbors rise by [`NEIGHBOR_ALTITUDE_DELTA`].
    Raise,
    /// Lower the ground; neighbors sink by [`NEIGHBOR_ALTITUDE_DELTA`].
    Lower,
}

impl BrushAction {
    /// Every action, in keyboard order.
    pub const ALL: [Self; 6] = [
        Self::Wet,
        Self::Dry,
        Self::Hot,
        Self::Cold,
        Self::Raise,
        Self::Lower,
    ];

    /// The action that undoes this one on the target cell.
    pub fn inverse(self) -> Self {
        match self {
            Self::Wet => Self::Dry,
            Self::Dry => Self::Wet,
            Self::Hot => Self::Cold,
            Self::Cold => Self::Hot,
            Self::Raise => Self::Lower,
            Self::Lower => Self::Raise,
        }
    }

    fn apply(self, cell: ClimateCell, delta: i32) -> ClimateCell {
        let edited = match self {
            Self::Wet => ClimateCell {
                moisture: cell.moisture.saturating_add(delta),
                ..cell
            },
            Self::Dry => ClimateCell {
                moisture: cell.moisture.saturating_sub(delta),
                ..cell
            },
            Self::Hot => ClimateCell {
                temperature: cell.temperature.saturating_add(delta),
                ..cell
            },
            Self::Cold => ClimateCell {
                temperature: cell.temperature.saturating_sub(delta),
                ..cell
            },
            Self::Raise => ClimateCell {
                altitude: cell.altitude.saturating_add(delta),
                ..cell
            },
            Self::Lower => ClimateCell {
                altitude: cell.altitude.saturating_sub(delta),
                ..cell
            },
        };
        edited.clamped()
    }

    fn spreads_to_neighbors(self) -> bool {
        matches!(self, Self::Raise | Self::Lower)
    }
}

impl ClimateGrid {
    /// Applies `action` with strength `magnitude` to the cell at `(x, y)` in place.
    ///
    /// The edited field is clamped to `[0, 100]`. Raise and Lower also move
    /// each in-bounds orthogonal neighbor by [`NEIGHBOR_ALTITUDE_DELTA`];
    /// neighbors off the board are skipped.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board.
    pub fn apply_brush(&mut self, x: usize, y: usize, action: BrushAction, magnitude: i32) {
        self.update(x, y, |cell| action.apply(cell, magnitude));

        if action.spreads_to_neighbors() {
            let neighbors: Vec<_> = self.orthogonal_neighbors(x, y).collect();
            for (nx, ny) in neighbors {
                self.update(nx, ny, |cell| action.apply(cell, NEIGHBOR_ALTITUDE_DELTA));
            }
        }
    }

    /// Returns a copy of this board with the brush edit applied.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board.
    pub fn mutate(&self, x: usize, y: usize, action: BrushAction, magnitude: i32) -> ClimateGrid {
        let mut next = self.clone();
        next.apply_brush(x, y, action, magnitude);
        next
    }
}
