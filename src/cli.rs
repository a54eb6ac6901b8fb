use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "raypath")]
#[command(about = "A ray tracer in Rust, following The Ray Tracer Challenge")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Simulate the motion of a projectile under the influence of gravity and wind
    Projectile(ProjectileArgs),
}

/// Flags configuring the projectile simulation
#[derive(clap::Args)]
pub struct ProjectileArgs {
    /// Point from which the projectile is launched (x,y,z)
    #[arg(short = 'l', long, help = "Point from which the projectile is launched (x,y,z)")]
    pub launch_point: String,

    /// Launch velocity vector of the projectile (x,y,z)
    #[arg(short = 'v', long, help = "Launch velocity vector of the projectile (x,y,z)")]
    pub velocity: String,

    /// Wind vector (x,y)
    #[arg(short = 'w', long, help = "Wind vector (x,y)")]
    pub wind: String,

    /// Gravity constant
    #[arg(short = 'g', long, default_value = "9.81", help = "Gravity constant")]
    pub gravity: f64,
}
