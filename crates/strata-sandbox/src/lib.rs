//! Headless Strata sandbox: turns a climate board into drawable products and
//! drives an editing session against it.

pub mod display;
pub mod session;

pub use display::{
    BoardDisplay, CloudPlacement, CubePlacement, DoodadPlacement, DrawOutcome, Rebuilt,
    TerrainMesh, WaterPlane,
};
pub use session::{Brush, CellReport, PaintThrottle, Session, StrokeOutcome, Tool, new_board};
