//! Located entities and the viewer location.

use crate::Coordinate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Any item that may carry a coordinate (a reported cat, a colony...).
///
/// The crate never looks at anything but `coordinate`; `id` is carried
/// through untouched so callers can map results back to their records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedEntity<Id> {
    pub id: Id,
    pub coordinate: Option<Coordinate>,
}

impl<Id> LocatedEntity<Id> {
    /// Creates an entity, dropping the coordinate if it is invalid.
    ///
    /// # Example
    /// ```
    /// use streetcats_geo::LocatedEntity;
    ///
    /// assert!(LocatedEntity::new("misi", 40.4, -3.7).location().is_some());
    /// assert!(LocatedEntity::new("lost", f64::NAN, -3.7).location().is_none());
    /// ```
    pub fn new(id: Id, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            coordinate: Coordinate::new(latitude, longitude).valid(),
        }
    }

    /// Creates an entity without a location.
    pub fn unlocated(id: Id) -> Self {
        Self { id, coordinate: None }
    }

    /// Creates an entity from an optional coordinate, dropping it if invalid.
    pub fn with_coordinate(id: Id, coordinate: Option<Coordinate>) -> Self {
        Self {
            id,
            coordinate: coordinate.and_then(Coordinate::valid),
        }
    }

    /// The coordinate, if present and valid.
    ///
    /// The public field may have been filled by hand, so validity is
    /// re-checked here rather than trusted.
    #[inline]
    pub fn location(&self) -> Option<&Coordinate> {
        self.coordinate.as_ref().filter(|c| c.is_valid())
    }
}

/// Failure modes of a browser geolocation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("geolocation permission denied")]
    PermissionDenied,
    #[error("geolocation position unavailable")]
    PositionUnavailable,
    #[error("geolocation request timed out")]
    Timeout,
}

impl GeolocationError {
    /// Maps a `GeolocationPositionError.code` to an error.
    ///
    /// Unknown codes are reported as an unavailable position.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::PositionUnavailable,
        }
    }
}

/// Turns a geolocation outcome into an optional viewer location.
///
/// Every failure, and any fix outside WGS84 range, means "no viewer".
pub fn viewer_from_fix(fix: Result<Coordinate, GeolocationError>) -> Option<Coordinate> {
    match fix {
        Ok(coord) if coord.is_valid() => Some(coord),
        Ok(coord) => {
            debug!(?coord, "Ignoring invalid geolocation fix");
            None
        }
        Err(err) => {
            debug!(error = %err, "Geolocation not available, continuing without viewer");
            None
        }
    }
}
