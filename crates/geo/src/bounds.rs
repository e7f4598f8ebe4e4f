//! Axis-aligned latitude/longitude bounding boxes.

use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// Bounding box over a set of coordinates.
///
/// East/west are plain max/min longitudes. A set straddling the ±180°
/// meridian gets a box spanning almost the whole globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    /// Computes the bounds of a set of coordinates.
    ///
    /// Returns `None` for an empty set.
    ///
    /// # Example
    /// ```
    /// use streetcats_geo::{Bounds, Coordinate};
    ///
    /// let points = [Coordinate::new(40.0, -4.0), Coordinate::new(41.5, 2.0)];
    /// let bounds = Bounds::from_coordinates(&points).unwrap();
    /// assert_eq!(bounds.north, 41.5);
    /// assert_eq!(bounds.west, -4.0);
    /// ```
    pub fn from_coordinates<'a, I>(coords: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coords.into_iter();
        let first = iter.next()?;

        let seed = Bounds {
            north: first.latitude,
            south: first.latitude,
            east: first.longitude,
            west: first.longitude,
        };

        Some(iter.fold(seed, |b, c| Bounds {
            north: b.north.max(c.latitude),
            south: b.south.min(c.latitude),
            east: b.east.max(c.longitude),
            west: b.west.min(c.longitude),
        }))
    }

    /// Latitude extent in degrees.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude extent in degrees.
    #[inline]
    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }

    /// The larger of the two spans.
    #[inline]
    pub fn max_span(&self) -> f64 {
        self.lat_span().max(self.lng_span())
    }

    /// Geometric center of the box.
    ///
    /// The planner centers on the mean of the points instead; this is the
    /// center a renderer lands on when it fits the box itself.
    #[inline]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Returns true if the coordinate lies inside the box (edges included).
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.latitude >= self.south
            && coord.latitude <= self.north
            && coord.longitude >= self.west
            && coord.longitude <= self.east
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_bounds() {
        assert!(Bounds::from_coordinates(std::iter::empty()).is_none());
    }

    #[test]
    fn test_single_point_has_zero_span() {
        let b = Bounds::from_coordinates(&[Coordinate::new(40.4, -3.7)]).unwrap();
        assert_eq!(b.lat_span(), 0.0);
        assert_eq!(b.lng_span(), 0.0);
        assert_eq!(b.center(), Coordinate::new(40.4, -3.7));
    }

    #[test]
    fn test_spans_and_center() {
        let points = [
            Coordinate::new(10.0, 20.0),
            Coordinate::new(-10.0, 30.0),
            Coordinate::new(0.0, 25.0),
        ];
        let b = Bounds::from_coordinates(&points).unwrap();
        assert_eq!(b.north, 10.0);
        assert_eq!(b.south, -10.0);
        assert_eq!(b.east, 30.0);
        assert_eq!(b.west, 20.0);
        assert_eq!(b.max_span(), 20.0);
        assert_eq!(b.center(), Coordinate::new(0.0, 25.0));
        assert!(points.iter().all(|p| b.contains(p)));
        assert!(!b.contains(&Coordinate::new(11.0, 25.0)));
    }

    #[test]
    fn test_antimeridian_is_not_normalized() {
        let points = [Coordinate::new(0.0, 179.0), Coordinate::new(0.0, -179.0)];
        let b = Bounds::from_coordinates(&points).unwrap();
        assert_eq!(b.lng_span(), 358.0);
    }
}
