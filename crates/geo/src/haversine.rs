//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Both coordinates are expected to be valid; filtering is the caller's job.
///
/// # Example
/// ```
/// use streetcats_geo::{haversine_distance, Coordinate};
///
/// let madrid = Coordinate::new(40.4168, -3.7038);
/// let barcelona = Coordinate::new(41.3851, 2.1734);
///
/// let distance = haversine_distance(&madrid, &barcelona);
/// assert!((distance - 504.0).abs() < 5.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // h can drift a hair above 1.0 for antipodal points
    let h = h.clamp(0.0, 1.0);

    2.0 * radius * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MADRID: Coordinate = Coordinate { latitude: 40.4168, longitude: -3.7038 };
    const BARCELONA: Coordinate = Coordinate { latitude: 41.3851, longitude: 2.1734 };
    const NEW_YORK: Coordinate = Coordinate { latitude: 40.7128, longitude: -74.0060 };
    const TOKYO: Coordinate = Coordinate { latitude: 35.6762, longitude: 139.6503 };

    #[test]
    fn test_madrid_to_barcelona() {
        let distance = haversine_distance(&MADRID, &BARCELONA);
        assert!((distance - 504.0).abs() < 5.0, "Madrid-Barcelona: {}", distance);
    }

    #[test]
    fn test_new_york_to_tokyo() {
        let distance = haversine_distance(&NEW_YORK, &TOKYO);
        assert!((distance - 10838.0).abs() < 50.0, "NYC-Tokyo: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        let distance = haversine_distance(&MADRID, &MADRID);
        assert!(distance.abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let d1 = haversine_distance(&MADRID, &BARCELONA);
        let d2 = haversine_distance(&BARCELONA, &MADRID);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        let distance = haversine_distance(&a, &b);
        assert!(distance.is_finite());
        assert!((distance - half).abs() < 1e-6, "antipodal: {}", distance);
    }

    #[test]
    fn test_meters_conversion() {
        let km = haversine_distance(&MADRID, &BARCELONA);
        let meters = haversine_distance_meters(&MADRID, &BARCELONA);
        assert!((meters - km * 1000.0).abs() < 1.0);
    }
}
