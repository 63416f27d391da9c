//! Board display: builds the drawable products of a board and rebuilds only
//! what an edit invalidated.

use glam::Vec3;
use strata_board::{BiomeMap, BoardDiff, ClimateGrid, HeightField, MoistureBiome, water_level};
use strata_config::{DisplayConfig, TerrainStyle};
use strata_mesh::layout::cell_center;
use strata_mesh::{MeshData, build_bottom_skirt, build_top_surface};
use strata_theme::{BiomeTheme, Color, ColorField, ThemeBiome, ThemeColors, ThemeError};

/// Height of clouds above the ground they shade.
const CLOUD_ALTITUDE: f32 = 5.0;
/// Drop of the water plane so it does not z-fight with zero-height ground.
const WATER_LEVEL_OFFSET: f32 = 0.1;

/// Top surface and the skirt sealing it from below.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    pub top: MeshData,
    pub bottom: MeshData,
}

/// One box per cell, used by [`TerrainStyle::Cubes`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubePlacement {
    pub position: Vec3,
    pub scale: Vec3,
    pub color: Color,
}

/// A doodad instance. The mesh lives in the theme cache under `entry`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoodadPlacement {
    pub entry: ThemeBiome,
    pub position: Vec3,
    pub color: Color,
}

/// A cloud box over a wet or water cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudPlacement {
    pub position: Vec3,
    pub scale: Vec3,
}

/// The water box covering the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaterPlane {
    pub level: f32,
    pub position: Vec3,
    pub scale: Vec3,
}

impl WaterPlane {
    fn for_board(grid: &ClimateGrid) -> Self {
        let level = water_level(grid);
        Self {
            level,
            position: Vec3::new(0.0, level / 2.0 - WATER_LEVEL_OFFSET, 0.0),
            scale: Vec3::new(grid.width() as f32 + 1.0, level, grid.height() as f32 + 1.0),
        }
    }
}

/// Which products a draw rebuilt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rebuilt {
    /// Terrain mesh, or the cubes in cube style.
    pub terrain: bool,
    pub texture: bool,
    /// Doodads and clouds.
    pub placements: bool,
    pub water: bool,
}

impl Rebuilt {
    const ALL: Self = Self {
        terrain: true,
        texture: true,
        placements: true,
        water: true,
    };
}

/// Result of [`BoardDisplay::draw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The board matched the last drawn one; nothing was touched.
    Skipped,
    /// At least one product was rebuilt.
    Drawn(Rebuilt),
}

/// Owns the theme and every product derived from the last drawn board.
#[derive(Debug)]
pub struct BoardDisplay {
    options: DisplayConfig,
    theme: BiomeTheme,
    last: Option<ClimateGrid>,
    mesh: Option<TerrainMesh>,
    texture: Option<ColorField>,
    cubes: Vec<CubePlacement>,
    doodads: Vec<DoodadPlacement>,
    clouds: Vec<CloudPlacement>,
    water: Option<WaterPlane>,
}

impl BoardDisplay {
    pub fn new(options: DisplayConfig, theme: BiomeTheme) -> Self {
        Self {
            options,
            theme,
            last: None,
            mesh: None,
            texture: None,
            cubes: Vec::new(),
            doodads: Vec::new(),
            clouds: Vec::new(),
            water: None,
        }
    }

    /// Draws `grid`, rebuilding only the products that changed since the last draw.
    ///
    /// The first draw after construction or [`BoardDisplay::invalidate`]
    /// builds everything.
    pub fn draw(&mut self, grid: &ClimateGrid) -> DrawOutcome {
        let diff = match &self.last {
            Some(last) => BoardDiff::compare(last, grid),
            None => BoardDiff::ALL,
        };
        if diff.is_unchanged() {
            tracing::trace!("board unchanged, skipping draw");
            return DrawOutcome::Skipped;
        }

        let rebuilt = Rebuilt {
            terrain: diff.needs_mesh() || (self.is_cube_style() && diff.needs_texture()),
            texture: diff.needs_texture(),
            placements: diff.needs_placements(),
            water: diff.needs_water(),
        };

        if rebuilt.terrain || rebuilt.texture || rebuilt.placements {
            let heights =
                HeightField::build(grid, self.options.levels, self.options.vertical_scale);
            let biomes = BiomeMap::classify(grid);

            if rebuilt.texture {
                self.texture = Some(ColorField::build(
                    grid,
                    &heights,
                    &biomes,
                    &self.theme,
                    self.options.hd_texture,
                ));
            }
            if rebuilt.terrain {
                self.rebuild_terrain(grid, &heights, &biomes);
            }
            if rebuilt.placements {
                self.rebuild_placements(&heights, &biomes);
            }
        }
        if rebuilt.water {
            self.water = Some(WaterPlane::for_board(grid));
        }

        self.last = Some(grid.clone());
        tracing::debug!(?rebuilt, "drew board");
        DrawOutcome::Drawn(rebuilt)
    }

    /// Redraws the last board from scratch, if there is one.
    pub fn redraw(&mut self) -> Option<DrawOutcome> {
        let last = self.last.take()?;
        self.invalidate();
        Some(self.draw(&last))
    }

    /// Forces a complete rebuild on the next draw and drops cached doodads.
    pub fn invalidate(&mut self) {
        self.last = None;
        self.theme.reset_doodads();
    }

    /// Replaces the display options. The next draw rebuilds everything.
    pub fn set_options(&mut self, options: DisplayConfig) {
        self.options = options;
        self.invalidate();
    }

    /// Replaces the theme palette. The next draw rebuilds everything.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ReservedColor`] and keeps the current palette if
    /// any entry uses the gap colour.
    pub fn set_theme_colors(&mut self, colors: ThemeColors) -> Result<(), ThemeError> {
        self.theme.set_colors(colors)?;
        self.invalidate();
        Ok(())
    }

    fn is_cube_style(&self) -> bool {
        self.options.style == TerrainStyle::Cubes
    }

    fn rebuild_terrain(&mut self, grid: &ClimateGrid, heights: &HeightField, biomes: &BiomeMap) {
        match self.options.style {
            TerrainStyle::Mesh => {
                self.cubes.clear();
                self.mesh = Some(TerrainMesh {
                    top: build_top_surface(heights, self.options.border),
                    bottom: build_bottom_skirt(heights, self.options.border),
                });
            }
            TerrainStyle::Cubes => {
                self.mesh = None;
                let colors = ColorField::build(grid, heights, biomes, &self.theme, false);
                let (width, height) = grid.dimensions();
                self.cubes = (0..height)
                    .flat_map(|y| (0..width).map(move |x| (x, y)))
                    .map(|(x, y)| {
                        let h = heights.get(x, y);
                        CubePlacement {
                            position: cell_center(x, y, width, height, h / 2.0),
                            scale: Vec3::new(1.0, h, 1.0),
                            color: colors.colors()[x + width * y],
                        }
                    })
                    .collect();
            }
        }
    }

    fn rebuild_placements(&mut self, heights: &HeightField, biomes: &BiomeMap) {
        let (width, height) = (heights.width(), heights.height());
        self.doodads.clear();
        self.clouds.clear();

        for y in 0..height {
            for x in 0..width {
                let biome = biomes.get(x, y);
                let ground = heights.get(x, y);

                if self.options.draw_doodads
                    && let Some(entry) = self.theme.doodad_entry_of(biome)
                    && let Some(doodad) = self.theme.doodad(entry)
                {
                    self.doodads.push(DoodadPlacement {
                        entry,
                        position: cell_center(x, y, width, height, ground + doodad.height / 2.0),
                        color: doodad.color,
                    });
                }

                if self.options.draw_clouds {
                    let scale = match biome.moisture {
                        MoistureBiome::Wet => Vec3::new(0.75, 0.25, 0.75),
                        MoistureBiome::Water => Vec3::new(1.0, 0.5, 1.0),
                        _ => continue,
                    };
                    self.clouds.push(CloudPlacement {
                        position: cell_center(x, y, width, height, ground / 2.0 + CLOUD_ALTITUDE),
                        scale,
                    });
                }
            }
        }
    }

    pub fn options(&self) -> &DisplayConfig {
        &self.options
    }

    pub fn theme(&self) -> &BiomeTheme {
        &self.theme
    }

    /// Terrain mesh, present in mesh style after the first draw.
    pub fn mesh(&self) -> Option<&TerrainMesh> {
        self.mesh.as_ref()
    }

    /// Board texture, present after the first draw.
    pub fn texture(&self) -> Option<&ColorField> {
        self.texture.as_ref()
    }

    pub fn cubes(&self) -> &[CubePlacement] {
        &self.cubes
    }

    pub fn doodads(&self) -> &[DoodadPlacement] {
        &self.doodads
    }

    pub fn clouds(&self) -> &[CloudPlacement] {
        &self.clouds
    }

    pub fn water(&self) -> Option<&WaterPlane> {
        self.water.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use strata_board::{BrushAction, ClimateCell, classify};

    use super::*;

    fn display() -> BoardDisplay {
        BoardDisplay::new(DisplayConfig::default(), BiomeTheme::default())
    }

    fn board() -> ClimateGrid {
        // Moist temperate plain everywhere.
        ClimateGrid::new(4, 4, ClimateCell::new(40, 40, 50)).unwrap()
    }

    #[test]
    fn test_first_draw_builds_everything() {
        let mut display = display();
        assert_eq!(display.draw(&board()), DrawOutcome::Drawn(Rebuilt::ALL));
        let mesh = display.mesh().unwrap();
        assert!(mesh.top.is_complete() && mesh.bottom.is_complete());
        assert_eq!(display.texture().unwrap().texture_size(), (8, 8));
        assert!(display.water().is_some());
    }

    #[test]
    fn test_identical_board_is_skipped() {
        let mut display = display();
        let grid = board();
        display.draw(&grid);
        assert_eq!(display.draw(&grid.clone()), DrawOutcome::Skipped);
    }

    #[test]
    fn test_moisture_only_edit_rebuilds_water() {
        let mut display = display();
        let grid = board();
        display.draw(&grid);

        let edited = grid.mutate(1, 1, BrushAction::Wet, 1);
        assert_eq!(classify(&edited.get(1, 1)), classify(&grid.get(1, 1)));
        let expected = Rebuilt {
            water: true,
            ..Rebuilt::default()
        };
        assert_eq!(display.draw(&edited), DrawOutcome::Drawn(expected));
    }

    #[test]
    fn test_altitude_edit_rebuilds_terrain() {
        let mut display = display();
        let grid = board();
        display.draw(&grid);
        let edited = grid.mutate(2, 2, BrushAction::Raise, 30);
        assert_eq!(display.draw(&edited), DrawOutcome::Drawn(Rebuilt::ALL));
    }

    #[test]
    fn test_biome_edit_keeps_mesh() {
        let mut display = display();
        let grid = board();
        display.draw(&grid);
        // Drying the cell turns it into desert without touching altitude.
        let edited = grid.mutate(0, 0, BrushAction::Dry, 40);
        let DrawOutcome::Drawn(rebuilt) = display.draw(&edited) else {
            panic!("biome edit should redraw");
        };
        assert!(!rebuilt.terrain);
        assert!(rebuilt.texture && rebuilt.placements && rebuilt.water);
    }

    #[test]
    fn test_invalidate_forces_full_rebuild() {
        let mut display = display();
        let grid = board();
        display.draw(&grid);
        display.invalidate();
        assert_eq!(display.draw(&grid), DrawOutcome::Drawn(Rebuilt::ALL));
        assert_eq!(display.redraw(), Some(DrawOutcome::Drawn(Rebuilt::ALL)));
    }

    #[test]
    fn test_cube_style_places_one_box_per_cell() {
        let options = DisplayConfig {
            style: TerrainStyle::Cubes,
            ..DisplayConfig::default()
        };
        let mut display = BoardDisplay::new(options, BiomeTheme::default());
        let grid = ClimateGrid::new(3, 2, ClimateCell::new(100, 40, 50)).unwrap();
        display.draw(&grid);

        assert!(display.mesh().is_none());
        assert_eq!(display.cubes().len(), 6);
        let first = display.cubes()[0];
        assert_eq!(first.scale, Vec3::new(1.0, 4.0, 1.0));
        assert_eq!(first.position, Vec3::new(-0.5, 2.0, -0.5));
    }

    #[test]
    fn test_doodads_follow_theme() {
        let mut display = display();
        // Moist temperate hill carries the boreal doodad.
        let grid = ClimateGrid::new(2, 2, ClimateCell::new(60, 40, 50)).unwrap();
        display.draw(&grid);

        assert_eq!(display.doodads().len(), 4);
        let doodad = display.doodads()[0];
        assert_eq!(doodad.entry, ThemeBiome::Boreal);
        // Height 60 on 5 levels snaps to 2.0; the boreal pyramid is 1.5 tall.
        assert_eq!(doodad.position, Vec3::new(-0.5, 2.75, -0.5));
        assert!(display.clouds().is_empty(), "moist cells have no clouds");
    }

    #[test]
    fn test_clouds_over_wet_and_water_cells() {
        let mut display = display();
        let wet = ClimateCell::new(0, 60, 50);
        let water = ClimateCell::new(0, 100, 0);
        let grid = ClimateGrid::from_cells(2, 1, vec![wet, water]).unwrap();
        display.draw(&grid);

        let clouds = display.clouds();
        assert_eq!(clouds.len(), 2);
        assert_eq!(clouds[0].scale, Vec3::new(0.75, 0.25, 0.75));
        assert_eq!(clouds[1].scale, Vec3::new(1.0, 0.5, 1.0));
        assert_eq!(clouds[0].position.y, CLOUD_ALTITUDE);
    }

    #[test]
    fn test_disabled_placements_stay_empty() {
        let options = DisplayConfig {
            draw_doodads: false,
            draw_clouds: false,
            ..DisplayConfig::default()
        };
        let mut display = BoardDisplay::new(options, BiomeTheme::default());
        display.draw(&ClimateGrid::new(2, 2, ClimateCell::new(60, 60, 50)).unwrap());
        assert!(display.doodads().is_empty());
        assert!(display.clouds().is_empty());
    }

    #[test]
    fn test_water_plane_geometry() {
        let mut display = display();
        let grid = ClimateGrid::new(5, 3, ClimateCell::new(10, 50, 50)).unwrap();
        display.draw(&grid);
        let water = display.water().unwrap();
        assert_eq!(water.level, 0.5);
        assert_eq!(water.scale, Vec3::new(6.0, 0.5, 4.0));
        assert!((water.position.y - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_theme_change_invalidates() {
        let mut display = display();
        let grid = board();
        display.draw(&grid);
        let colors = ThemeColors {
            plains: Color::rgb(0.9, 0.9, 0.1),
            ..ThemeColors::default()
        };
        display.set_theme_colors(colors).unwrap();
        assert_eq!(display.draw(&grid), DrawOutcome::Drawn(Rebuilt::ALL));
        assert!(display.set_theme_colors(ThemeColors {
            plains: strata_theme::GAP_COLOR,
            ..ThemeColors::default()
        })
        .is_err());
    }
}
