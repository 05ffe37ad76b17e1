use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// A solid box resting on a box floor
    Cube,
    /// Diffuse, glass and metal spheres on a ground sphere
    Spheres,
    /// The sphere trio with a hollow glass sphere
    Glass,
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "A CPU path tracer that writes PPM images")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "cube")]
    pub scene: SceneKind,

    /// JSON camera settings replacing the scene's camera; missing fields use defaults
    #[arg(long)]
    pub camera: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum bounces per camera ray
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for a reproducible render
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file path
    #[arg(short, long, default_value = "image.ppm")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
