//! Command-line overrides for the sandbox configuration.

use std::path::PathBuf;

use clap::Args;

use crate::{Config, GeneratorKind};

/// Command-line arguments shared by Strata binaries.
///
/// CLI values override settings loaded from `config.ron`. Binaries embed this
/// with `#[command(flatten)]`.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    /// Board width in cells.
    #[arg(long)]
    pub width: Option<usize>,

    /// Board height in cells.
    #[arg(long)]
    pub height: Option<usize>,

    /// Generator seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fill the board with seeded uniform noise instead of Perlin fields.
    #[arg(long)]
    pub random: bool,

    /// Number of height quantization steps.
    #[arg(long)]
    pub levels: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config, then repair any bad values.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.board.width = w;
        }
        if let Some(h) = args.height {
            self.board.height = h;
        }
        if let Some(seed) = args.seed {
            self.board.seed = seed;
        }
        if args.random {
            self.board.generator = GeneratorKind::Random;
        }
        if let Some(levels) = args.levels {
            self.display.levels = levels;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        self.sanitize();
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CliArgs,
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(64),
            seed: Some(7),
            levels: Some(3),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.board.width, 64);
        assert_eq!(config.board.seed, 7);
        assert_eq!(config.display.levels, 3);
        // Non-overridden fields retain defaults
        assert_eq!(config.board.height, 32);
        assert_eq!(config.board.generator, GeneratorKind::Perlin);
    }

    #[test]
    fn test_cli_no_override() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_width_override_is_repaired() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs {
            width: Some(0),
            ..Default::default()
        });
        assert_eq!(config.board.width, 1);
    }

    #[test]
    fn test_parse_flags() {
        let cli = TestCli::try_parse_from([
            "strata",
            "--width",
            "16",
            "--random",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.args.width, Some(16));
        assert!(cli.args.random);
        assert_eq!(cli.args.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.args.config, None);
    }
}
