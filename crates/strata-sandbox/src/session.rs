//! Editing session: the live board, the brush, the cursor and stroke pacing.

use std::fmt;
use std::time::{Duration, Instant};

use strata_board::{
    Biome, BoardError, BrushAction, ClimateCell, ClimateGrid, NoiseParams, classify, diffuse,
    generate, random, uniform,
};
use strata_config::{BoardConfig, BrushConfig, GeneratorKind};

/// Creates a fresh board as described by `config`.
///
/// Perlin seeds are 32-bit; only the low bits of `config.seed` are used there.
///
/// # Errors
///
/// Returns [`BoardError::InvalidDimensions`] for an empty board.
pub fn new_board(config: &BoardConfig) -> Result<ClimateGrid, BoardError> {
    let (width, height) = (config.width, config.height);
    let grid = match config.generator {
        GeneratorKind::Perlin => generate(width, height, &NoiseParams::with_seed(config.seed as u32))?,
        GeneratorKind::Random => random(width, height, config.seed)?,
        GeneratorKind::Uniform => uniform(width, height, ClimateCell::new(50, 50, 50))?,
    };
    tracing::info!(width, height, generator = ?config.generator, "created board");
    Ok(grid)
}

/// What a stroke does at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    /// Apply a brush edit.
    Paint(BrushAction),
    /// Report the cell without changing it.
    Inspect,
}

/// Current tool and strength.
#[derive(Clone, Debug, PartialEq)]
pub struct Brush {
    tool: Tool,
    magnitude: i32,
    step: i32,
    min: i32,
    max: i32,
}

impl Brush {
    /// A Wet brush with the configured strength and limits.
    pub fn from_config(config: &BrushConfig) -> Self {
        let (min, max) = (config.min.min(config.max), config.min.max(config.max));
        Self {
            tool: Tool::Paint(BrushAction::Wet),
            magnitude: config.magnitude.clamp(min, max),
            step: config.step.max(1),
            min,
            max,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn magnitude(&self) -> i32 {
        self.magnitude
    }

    /// Sets the strength, clamped to the brush limits.
    pub fn set_magnitude(&mut self, magnitude: i32) {
        self.magnitude = magnitude.clamp(self.min, self.max);
    }

    /// Strengthens the brush by one step.
    pub fn increase(&mut self) {
        self.set_magnitude(self.magnitude.saturating_add(self.step));
    }

    /// Weakens the brush by one step.
    pub fn decrease(&mut self) {
        self.set_magnitude(self.magnitude.saturating_sub(self.step));
    }
}

/// Allows one stroke per interval while painting is held down.
#[derive(Clone, Debug)]
pub struct PaintThrottle {
    interval: Duration,
    last_stroke: Option<Instant>,
}

impl PaintThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_stroke: None,
        }
    }

    /// Returns `true` and records the stroke if `interval` has passed since the last one.
    pub fn try_stroke(&mut self, now: Instant) -> bool {
        let ready = self
            .last_stroke
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if ready {
            self.last_stroke = Some(now);
        }
        ready
    }
}

/// A cell and its biome, as reported by the Inspect tool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellReport {
    pub x: usize,
    pub y: usize,
    pub cell: ClimateCell,
    pub biome: Biome,
}

impl fmt::Display for CellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) altitude {} moisture {} temperature {}: {:?} {:?} {:?}",
            self.x,
            self.y,
            self.cell.altitude,
            self.cell.moisture,
            self.cell.temperature,
            self.biome.moisture,
            self.biome.temperature,
            self.biome.altitude
        )
    }
}

/// Result of [`Session::paint`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeOutcome {
    /// The cursor is off the board.
    NoCursor,
    /// Too soon after the previous stroke.
    Throttled,
    /// The brush edited the cell under the cursor.
    Painted { x: usize, y: usize, action: BrushAction },
    /// The cell under the cursor was inspected.
    Inspected(CellReport),
}

/// Live editing state around one board.
#[derive(Clone, Debug)]
pub struct Session {
    grid: ClimateGrid,
    brush: Brush,
    cursor: Option<(usize, usize)>,
    throttle: PaintThrottle,
}

impl Session {
    pub fn new(grid: ClimateGrid, brush: &BrushConfig) -> Self {
        Self {
            grid,
            brush: Brush::from_config(brush),
            cursor: None,
            throttle: PaintThrottle::new(Duration::from_millis(brush.paint_interval_ms)),
        }
    }

    pub fn grid(&self) -> &ClimateGrid {
        &self.grid
    }

    /// Swaps in a new board and clears the cursor.
    pub fn replace_grid(&mut self, grid: ClimateGrid) {
        self.grid = grid;
        self.cursor = None;
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    /// Cell under a board-space hit point `(x, z)`, clamped onto the board.
    ///
    /// The board is centred on the origin; the integer part of
    /// `x + width / 2` picks the column.
    pub fn cursor_from_point(&self, x: f32, z: f32) -> (usize, usize) {
        let snap = |v: f32, side: usize| -> usize {
            let index = (v + (side / 2) as f32) as i64;
            index.clamp(0, side as i64 - 1) as usize
        };
        (snap(x, self.grid.width()), snap(z, self.grid.height()))
    }

    /// Moves the cursor to the cell under a hit point.
    pub fn point_at(&mut self, x: f32, z: f32) -> (usize, usize) {
        let cell = self.cursor_from_point(x, z);
        if self.cursor != Some(cell) {
            tracing::trace!(x = cell.0, y = cell.1, "cursor moved");
        }
        self.cursor = Some(cell);
        cell
    }

    /// Takes the cursor off the board.
    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    /// Applies the current tool at the cursor, at most once per paint interval.
    pub fn paint(&mut self, now: Instant) -> StrokeOutcome {
        let Some((x, y)) = self.cursor else {
            return StrokeOutcome::NoCursor;
        };
        if !self.throttle.try_stroke(now) {
            return StrokeOutcome::Throttled;
        }

        match self.brush.tool {
            Tool::Paint(action) => {
                self.grid.apply_brush(x, y, action, self.brush.magnitude);
                tracing::debug!(x, y, ?action, magnitude = self.brush.magnitude, "painted");
                StrokeOutcome::Painted { x, y, action }
            }
            Tool::Inspect => match self.inspect() {
                Some(report) => {
                    tracing::info!("{report}");
                    StrokeOutcome::Inspected(report)
                }
                None => StrokeOutcome::NoCursor,
            },
        }
    }

    /// The cell and biome under the cursor.
    pub fn inspect(&self) -> Option<CellReport> {
        let (x, y) = self.cursor?;
        let cell = self.grid.get(x, y);
        Some(CellReport {
            x,
            y,
            cell,
            biome: classify(&cell),
        })
    }

    /// Replaces the board with one diffusion step.
    pub fn diffuse(&mut self) {
        self.grid = diffuse(&self.grid);
    }
}
