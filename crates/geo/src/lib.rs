//! Geospatial proximity and map viewport planning for Street Cats.
//!
//! This crate provides:
//! - Haversine distance calculations
//! - Nearest-cat lookup and stable distance ranking
//! - Zoom estimation from a distance or a bounding box
//! - Viewport planning for the cats map (center + zoom)
//! - Parsing of backend cat records into located entities
//! - WASM bindings for browser usage
//!
//! Every calculation is pure: no I/O, no shared state, no errors. Invalid
//! coordinates are treated as absent rather than rejected.
//!
//! # Example
//!
//! ```
//! use streetcats_geo::{plan, Coordinate, LocatedEntity};
//!
//! let viewer = Coordinate::new(40.4168, -3.7038); // Madrid
//! let cats = vec![
//!     LocatedEntity::new("misi", 40.4200, -3.7000),
//!     LocatedEntity::new("tom", 41.3851, 2.1734), // Barcelona
//! ];
//!
//! let viewport = plan(Some(viewer), &cats);
//! assert!(viewport.zoom >= 7 && viewport.zoom <= 18);
//! ```

mod bounds;
pub mod config;
mod entity;
mod error;
mod haversine;
pub mod ingest;
mod links;
mod nearest;
pub mod proximity;
mod viewport;
pub mod zoom;

#[cfg(feature = "wasm")]
mod wasm;

pub use bounds::Bounds;
pub use config::PlannerConfig;
pub use entity::{viewer_from_fix, GeolocationError, LocatedEntity};
pub use error::{GeoError, GeoErrorCode, Result};
pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use links::{coordinate_label, google_maps_url};
pub use nearest::{nearest, nearest_with_distance};
pub use proximity::{rank_by_distance, sort_by_distance, Ranked};
pub use viewport::{plan, PlanStrategy, Viewport, ViewportPlan, ViewportPlanner};
pub use zoom::{zoom_for_bounds, zoom_for_distance, zoom_for_distance_between, MAX_ZOOM, MIN_ZOOM};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both values are finite and within WGS84 range.
    ///
    /// NaN and infinities fail every range comparison, so they are rejected
    /// here as well.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns the coordinate if it is valid, `None` otherwise.
    #[inline]
    pub fn valid(self) -> Option<Self> {
        self.is_valid().then_some(self)
    }

    /// Arithmetic mean of the two latitudes and of the two longitudes.
    ///
    /// This is not the great-circle midpoint; it matches how the map frames
    /// a viewer/cat pair.
    #[inline]
    pub fn midpoint(a: &Coordinate, b: &Coordinate) -> Coordinate {
        Coordinate::new(
            (a.latitude + b.latitude) / 2.0,
            (a.longitude + b.longitude) / 2.0,
        )
    }

    /// Arithmetic mean of a set of coordinates, `None` when the set is empty.
    pub fn mean<'a, I>(coords: I) -> Option<Coordinate>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let (count, lat_sum, lng_sum) = coords
            .into_iter()
            .fold((0usize, 0.0, 0.0), |(n, lat, lng), c| {
                (n + 1, lat + c.latitude, lng + c.longitude)
            });

        if count == 0 {
            return None;
        }

        Some(Coordinate::new(lat_sum / count as f64, lng_sum / count as f64))
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(40.4168, -3.7038);
        assert_eq!(coord.latitude, 40.4168);
        assert_eq!(coord.longitude, -3.7038);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_valid_filters() {
        assert!(Coordinate::new(10.0, 10.0).valid().is_some());
        assert!(Coordinate::new(-95.0, 10.0).valid().is_none());
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (40.4168, -3.7038).into();
        assert_eq!(coord.latitude, 40.4168);
    }

    #[test]
    fn test_midpoint_is_arithmetic_mean() {
        let mid = Coordinate::midpoint(&Coordinate::new(10.0, -20.0), &Coordinate::new(20.0, 40.0));
        assert_eq!(mid, Coordinate::new(15.0, 10.0));
    }

    #[test]
    fn test_mean() {
        let coords = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(3.0, 6.0),
            Coordinate::new(6.0, 0.0),
        ];
        assert_eq!(Coordinate::mean(&coords), Some(Coordinate::new(3.0, 2.0)));
        assert_eq!(Coordinate::mean(std::iter::empty()), None);
    }
}
