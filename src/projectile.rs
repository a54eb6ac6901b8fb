//! Projectile simulation command.
//!
//! Reads the launch point, velocity, wind and gravity flags, turns them into
//! tuples and prints the resulting configuration.

use log::debug;
use thiserror::Error;

use raypath::parser::{parse_tuple, ParseTupleError, TupleFormat};
use raypath::tuple::{vector, Tuple};

use crate::cli::ProjectileArgs;

/// A projectile flag that could not be parsed as a tuple.
///
/// Carries the partially recovered tuple so the user can see which
/// components were understood.
#[derive(Debug, Error)]
#[error("invalid {flag}: {source} (recovered {partial})")]
pub struct ProjectileError {
    flag: &'static str,
    partial: Tuple,
    source: ParseTupleError,
}

fn flag_error(flag: &'static str) -> impl FnOnce(ParseTupleError) -> ProjectileError {
    move |source| ProjectileError {
        flag,
        partial: source.partial(),
        source,
    }
}

/// Parse the projectile flags and print the simulation configuration.
pub fn run(args: &ProjectileArgs) -> Result<(), ProjectileError> {
    let launch_point = parse_tuple(&args.launch_point, TupleFormat::point_3d())
        .map_err(flag_error("launch point"))?;
    let velocity =
        parse_tuple(&args.velocity, TupleFormat::vector_3d()).map_err(flag_error("velocity"))?;
    let wind = parse_tuple(&args.wind, TupleFormat::vector_2d()).map_err(flag_error("wind"))?;

    // Gravity pulls along negative z
    let gravity = vector(0.0, 0.0, -args.gravity);

    debug!(
        "parsed projectile configuration: launch={launch_point} velocity={velocity} wind={wind}"
    );

    println!("Projectile Simulation:");
    println!("\tLaunch Point: {launch_point}");
    println!("\tVelocity    : {velocity}");
    println!("\tWind        : {wind}");
    println!("\tGravity     : {gravity}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProjectileArgs;

    fn args(launch_point: &str, velocity: &str, wind: &str) -> ProjectileArgs {
        ProjectileArgs {
            launch_point: launch_point.to_string(),
            velocity: velocity.to_string(),
            wind: wind.to_string(),
            gravity: 9.81,
        }
    }

    #[test]
    fn accepts_well_formed_flags() {
        assert!(run(&args("(0,0,0)", "(1,2,3)", "(0.5,0)")).is_ok());
    }

    #[test]
    fn reports_the_offending_flag() {
        let err = run(&args("nonsense", "(1,2,3)", "(0.5,0)")).unwrap_err();
        assert!(err.to_string().starts_with("invalid launch point:"));

        let err = run(&args("(0,0,0)", "(1,2)", "(0.5,0)")).unwrap_err();
        assert!(err.to_string().starts_with("invalid velocity:"));
        // The recovered partial shows up in the message for diagnostics
        assert!(err.to_string().contains("recovered"));
    }
}
