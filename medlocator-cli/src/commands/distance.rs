//! `medlocator distance` - straight-line distance from a point to a hospital.

use crate::commands::resolve_hospital;
use crate::error::CliError;
use medlocator::geo;
use medlocator::registry::Registry;

pub fn run(hospital: &str, lat: f64, lon: f64) -> Result<(), CliError> {
    geo::validate_coords(lat, lon)?;

    let registry = Registry::builtin();
    let record = resolve_hospital(&registry, hospital)?;

    let distance = geo::distance_km(lat, lon, record.latitude, record.longitude);
    println!(
        "{} km from {:.4}, {:.4} to {}",
        geo::format_distance_km(distance),
        lat,
        lon,
        record.name
    );

    Ok(())
}
