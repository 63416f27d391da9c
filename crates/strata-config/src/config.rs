//! Sandbox configuration with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strata_theme::ThemeColors;

use crate::error::ConfigError;

/// Top-level sandbox configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Board size and generation.
    pub board: BoardConfig,
    /// Terrain presentation.
    pub display: DisplayConfig,
    /// Terraforming brush.
    pub brush: BrushConfig,
    /// Biome palette.
    pub theme: ThemeColors,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// How a fresh board is filled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Offset Perlin fields.
    #[default]
    Perlin,
    /// Independent uniform samples per cell.
    Random,
    /// Every cell at mid range.
    Uniform,
}

/// How terrain is drawn.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TerrainStyle {
    /// One continuous mesh with a skirt.
    #[default]
    Mesh,
    /// One box per cell.
    Cubes,
}

/// Board configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Generator seed.
    pub seed: u64,
    /// Generator used for new boards.
    pub generator: GeneratorKind,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of height steps.
    pub levels: u32,
    /// Height of the top step in world units.
    pub vertical_scale: f32,
    /// Border rings around the top surface.
    pub border: usize,
    /// Use 2x2 texels per cell.
    pub hd_texture: bool,
    /// Mesh or cubes.
    pub style: TerrainStyle,
    /// Place biome doodads.
    pub draw_doodads: bool,
    /// Place clouds over wet cells.
    pub draw_clouds: bool,
}

/// Brush configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrushConfig {
    /// Starting brush strength.
    pub magnitude: i32,
    /// Strength change per adjustment.
    pub step: i32,
    /// Weakest allowed strength.
    pub min: i32,
    /// Strongest allowed strength.
    pub max: i32,
    /// Minimum time between strokes while the button is held.
    pub paint_interval_ms: u64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            seed: 0,
            generator: GeneratorKind::Perlin,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            levels: 5,
            vertical_scale: 4.0,
            border: 1,
            hd_texture: true,
            style: TerrainStyle::Mesh,
            draw_doodads: true,
            draw_clouds: true,
        }
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            magnitude: 10,
            step: 5,
            min: 5,
            max: 100,
            paint_interval_ms: 200,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for the sandbox, e.g. `~/.config/strata`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("strata"))
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    ///
    /// Out-of-range values in a loaded file are repaired, see [`Config::sanitize`].
    ///
    /// # Errors
    ///
    /// Fails on I/O or RON errors, and with [`ConfigError::InvalidTheme`] when
    /// the palette uses the reserved gap colour.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let mut config = Self::read(&config_path)?;
            config.sanitize();
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created or the file cannot be written.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load_or_create`], except that a missing file is an error.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let mut new_config = Self::read(&config_dir.join("config.ron"))?;
        new_config.sanitize();

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.theme.validate()?;
        Ok(config)
    }

    /// Repairs values the sandbox cannot run with, logging each change.
    ///
    /// Zero board sides become 1, an inverted brush range is swapped, the
    /// starting magnitude is clamped into the range, and a non-positive step becomes 1.
    pub fn sanitize(&mut self) {
        if self.board.width == 0 || self.board.height == 0 {
            log::warn!(
                "Board size {}x{} has an empty side; using at least 1",
                self.board.width,
                self.board.height
            );
            self.board.width = self.board.width.max(1);
            self.board.height = self.board.height.max(1);
        }

        let brush = &mut self.brush;
        if brush.min > brush.max {
            log::warn!("Brush range [{}, {}] is inverted; swapping", brush.min, brush.max);
            std::mem::swap(&mut brush.min, &mut brush.max);
        }
        let clamped = brush.magnitude.clamp(brush.min, brush.max);
        if clamped != brush.magnitude {
            log::warn!(
                "Brush magnitude {} outside [{}, {}]; clamped to {clamped}",
                brush.magnitude,
                brush.min,
                brush.max
            );
            brush.magnitude = clamped;
        }
        if brush.step <= 0 {
            log::warn!("Brush step {} is not positive; using 1", brush.step);
            brush.step = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use strata_theme::Color;

    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 32"));
        assert!(ron_str.contains("levels: 5"));
        assert!(ron_str.contains("paint_interval_ms: 200"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(board: (width: 8), display: (hd_texture: false))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.board.width, 8);
        assert_eq!(config.board.height, 32);
        assert!(!config.display.hd_texture);
        assert_eq!(config.brush, BrushConfig::default());
        assert_eq!(config.theme, ThemeColors::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_enum_fields_parse() {
        let ron_str = "(board: (generator: Random), display: (style: Cubes))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.board.generator, GeneratorKind::Random);
        assert_eq!(config.display.style, TerrainStyle::Cubes);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.board.width = 48;
        config.board.seed = 1234;
        config.theme.plains = Color::rgb(0.4, 0.8, 0.2);

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.display.levels = 9;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.display.levels), Some(9));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_gap_color_in_palette_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.theme.desert = strata_theme::GAP_COLOR;
        config.save(dir.path()).unwrap();

        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::InvalidTheme(_))));
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_sanitize_repairs_brush_and_board() {
        let mut config = Config::default();
        config.board.width = 0;
        config.brush.min = 50;
        config.brush.max = 10;
        config.brush.magnitude = 200;
        config.brush.step = 0;
        config.sanitize();

        assert_eq!(config.board.width, 1);
        assert_eq!((config.brush.min, config.brush.max), (10, 50));
        assert_eq!(config.brush.magnitude, 50);
        assert_eq!(config.brush.step, 1);
    }

    #[test]
    fn test_sanitize_keeps_valid_config() {
        let mut config = Config::default();
        config.sanitize();
        assert_eq!(config, Config::default());
    }
}
