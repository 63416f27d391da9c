//! Configuration for the Strata sandbox.
//!
//! Settings persist to disk as RON, tolerate missing and unknown fields, and
//! can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BoardConfig, BrushConfig, Config, DebugConfig, DisplayConfig, GeneratorKind, TerrainStyle,
    default_config_dir,
};
pub use error::ConfigError;
