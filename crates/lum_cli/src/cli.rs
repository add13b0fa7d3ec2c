use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
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

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Monte Carlo path tracer for triangles and spheres")]
pub struct Args {
    /// JSON scene description (renders the built-in demo scene if omitted)
    #[arg(long)]
    pub scene: Option<String>,

    /// Output PNG path
    #[arg(short, long, default_value = "image.png")]
    pub output: String,

    /// Samples per pixel
    #[arg(short, long, default_value_t = 1000)]
    pub samples: u32,

    /// Image width for the demo scene
    #[arg(long, default_value_t = 300)]
    pub width: u32,

    /// Image height for the demo scene
    #[arg(long, default_value_t = 300)]
    pub height: u32,

    /// Number of lanes pixels are strided across
    #[arg(long, default_value_t = lum_renderer::DEFAULT_LANES)]
    pub lanes: usize,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Diffuse bounces per path
    #[arg(long, default_value_t = 3)]
    pub max_depth: u32,

    /// Disable the fill light added at the last bounce
    #[arg(long)]
    pub no_ambient_fill: bool,

    /// Use radius squared in the sphere discriminant
    #[arg(long)]
    pub squared_radius: bool,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lumen"]);
        assert_eq!(args.samples, 1000);
        assert_eq!(args.width, 300);
        assert_eq!(args.lanes, 2000);
        assert_eq!(args.output, "image.png");
        assert!(args.scene.is_none());
        assert!(!args.squared_radius);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "lumen", "--scene", "room.json", "-s", "16", "--threads", "2",
            "--no-ambient-fill", "--log-level", "debug",
        ]);
        assert_eq!(args.scene.as_deref(), Some("room.json"));
        assert_eq!(args.samples, 16);
        assert_eq!(args.threads, Some(2));
        assert!(args.no_ambient_fill);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
