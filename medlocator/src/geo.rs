//! Great-circle distance and coordinate validation.
//!
//! Provides the haversine distance used for the straight-line "route"
//! estimate between the user and a hospital. This is a point-to-point
//! estimate over the Earth's surface, not a road-network distance.

use std::f64::consts::PI;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Valid latitude range in degrees.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range in degrees.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Errors that can occur validating geographic coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordError {
    #[error("latitude out of range [-90, 90]: {0}")]
    InvalidLatitude(f64),
    #[error("longitude out of range [-180, 180]: {0}")]
    InvalidLongitude(f64),
}

/// Validate that a coordinate pair lies in the standard lat/lon domain.
#[inline]
pub fn validate_coords(lat: f64, lon: f64) -> Result<(), CoordError> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    Ok(())
}

/// Great-circle distance between two points, in kilometers.
///
/// Haversine formula with a spherical Earth of radius [`EARTH_RADIUS_KM`].
/// All angle inputs are in degrees. Callers are responsible for passing
/// coordinates in the standard domain (the compiled-in registry guarantees
/// this for hospital records).
#[inline]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1) * PI / 180.0;
    let d_lon = (lon2 - lon1) * PI / 180.0;
    let lat1_rad = lat1 * PI / 180.0;
    let lat2_rad = lat2 * PI / 180.0;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Format a distance for display, rounded to one decimal place.
#[inline]
pub fn format_distance_km(km: f64) -> String {
    format!("{:.1}", km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    // Builtin registry coordinates used as fixtures below.
    const MULAGO: (f64, f64) = (0.3476, 32.5825);
    const MENGO: (f64, f64) = (0.2997, 32.5569);

    #[test]
    fn test_distance_identity_is_zero() {
        for record in Registry::builtin().iter() {
            let d = distance_km(
                record.latitude,
                record.longitude,
                record.latitude,
                record.longitude,
            );
            assert_eq!(d, 0.0, "non-zero self distance for {}", record.name);
        }
    }

    #[test]
    fn test_distance_symmetric() {
        let forward = distance_km(MULAGO.0, MULAGO.1, MENGO.0, MENGO.1);
        let reverse = distance_km(MENGO.0, MENGO.1, MULAGO.0, MULAGO.1);
        assert!((forward - reverse).abs() < 1e-12);
    }

    #[test]
    fn test_mulago_to_mengo_fixture() {
        // Haversine of these coordinates is ~6.04 km.
        let d = distance_km(MULAGO.0, MULAGO.1, MENGO.0, MENGO.1);
        assert!((d - 6.0).abs() < 0.2, "got {d} km");
    }

    #[test]
    fn test_equator_degree_of_longitude() {
        // One degree of longitude at the equator is ~111.19 km for R = 6371.
        let d = distance_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.19).abs() < 0.1, "got {d} km");
    }

    #[test]
    fn test_distance_positive_for_distinct_points() {
        let registry = Registry::builtin();
        let records = registry.records();
        for a in records {
            for b in records {
                let d = distance_km(a.latitude, a.longitude, b.latitude, b.longitude);
                if a.name == b.name {
                    assert_eq!(d, 0.0);
                } else {
                    assert!(d > 0.0, "{} -> {} gave {d}", a.name, b.name);
                }
            }
        }
    }

    #[test]
    fn test_format_distance_one_decimal() {
        assert_eq!(format_distance_km(6.039), "6.0");
        assert_eq!(format_distance_km(6.06), "6.1");
        assert_eq!(format_distance_km(0.0), "0.0");
        // 6.05 sits just below the half in binary (6.04999...), so it
        // rounds down.
        assert_eq!(format_distance_km(6.05), "6.0");
    }

    #[test]
    fn test_validate_coords() {
        assert!(validate_coords(0.3476, 32.5825).is_ok());
        assert!(validate_coords(90.0, 180.0).is_ok());
        assert!(validate_coords(-90.0, -180.0).is_ok());
        assert_eq!(
            validate_coords(90.1, 0.0),
            Err(CoordError::InvalidLatitude(90.1))
        );
        assert_eq!(
            validate_coords(0.0, 180.5),
            Err(CoordError::InvalidLongitude(180.5))
        );
    }
}
