use clap::Parser;
use log::info;

mod cli;
mod logger;
mod projectile;

use cli::{Args, Command};
use logger::init_logger;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("RayPath - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    match &args.command {
        Command::Projectile(projectile_args) => {
            if let Err(e) = projectile::run(projectile_args) {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
