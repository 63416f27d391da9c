//! Strata sandbox: generates a climate board, optionally runs a scripted
//! editing session against it, and exports the board texture.
//!
//! Run with: `cargo run -p strata-sandbox -- --strokes 20 --texture-out board.png`

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_board::BrushAction;
use strata_config::{CliArgs, Config, default_config_dir};
use strata_sandbox::{BoardDisplay, DrawOutcome, Session, StrokeOutcome, Tool, new_board};
use strata_theme::BiomeTheme;
use tracing::info;

/// CLI arguments for the sandbox binary.
#[derive(Parser, Debug)]
#[command(name = "strata-sandbox", about = "Headless climate board sandbox")]
struct SandboxArgs {
    #[command(flatten)]
    config: CliArgs,

    /// Number of random brush strokes to apply.
    #[arg(long, default_value_t = 0)]
    strokes: usize,

    /// Number of diffusion steps to run after the strokes.
    #[arg(long, default_value_t = 0)]
    diffuse_steps: usize,

    /// Write the final board texture to this PNG file.
    #[arg(long)]
    texture_out: Option<PathBuf>,

    /// Directory for the JSON log file (debug builds only).
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = SandboxArgs::parse();

    let mut config = match args.config.config.clone().or_else(default_config_dir) {
        Some(dir) => Config::load_or_create(&dir)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(&args.config);

    strata_log::init_logging(args.log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    info!(
        "Board: {}x{} | seed {} | {:?}",
        config.board.width, config.board.height, config.board.seed, config.board.generator
    );

    let theme = BiomeTheme::new(config.theme.clone())?;
    let mut display = BoardDisplay::new(config.display.clone(), theme);
    let mut session = Session::new(new_board(&config.board)?, &config.brush);
    report("initial draw", display.draw(session.grid()));

    run_strokes(&mut session, &mut display, &config, args.strokes);

    for step in 0..args.diffuse_steps {
        session.diffuse();
        report(&format!("diffusion step {}", step + 1), display.draw(session.grid()));
    }

    if let Some(water) = display.water() {
        info!("Water level: {:.2}", water.level);
    }

    if let Some(path) = args.texture_out {
        let texture = display.texture().ok_or("board was never drawn")?;
        let (width, height) = texture.texture_size();
        let image = image::RgbaImage::from_raw(width as u32, height as u32, texture.to_rgba8())
            .ok_or("texture buffer does not match its dimensions")?;
        image.save(&path)?;
        info!("Wrote {}x{} texture to {}", width, height, path.display());
    }

    Ok(())
}

/// Applies `count` seeded random strokes, one paint interval apart, redrawing after each.
fn run_strokes(session: &mut Session, display: &mut BoardDisplay, config: &Config, count: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(config.board.seed);
    let interval = Duration::from_millis(config.brush.paint_interval_ms);
    let half_w = config.board.width as f32 / 2.0;
    let half_h = config.board.height as f32 / 2.0;
    let mut now = Instant::now();

    for stroke in 0..count {
        let action = BrushAction::ALL[rng.random_range(0..BrushAction::ALL.len())];
        session.brush_mut().set_tool(Tool::Paint(action));
        session.point_at(
            rng.random_range(-half_w..half_w),
            rng.random_range(-half_h..half_h),
        );

        match session.paint(now) {
            StrokeOutcome::Painted { x, y, action } => {
                let label = format!("stroke {} {action:?} at ({x}, {y})", stroke + 1);
                report(&label, display.draw(session.grid()));
            }
            other => info!("stroke {}: {other:?}", stroke + 1),
        }
        now += interval;
    }
}

fn report(label: &str, outcome: DrawOutcome) {
    match outcome {
        DrawOutcome::Skipped => info!("{label}: unchanged, skipped redraw"),
        DrawOutcome::Drawn(rebuilt) => info!(
            "{label}: terrain={} texture={} placements={} water={}",
            rebuilt.terrain, rebuilt.texture, rebuilt.placements, rebuilt.water
        ),
    }
}
