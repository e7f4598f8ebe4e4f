//! Zoom level estimation.
//!
//! Two shapes of input reach the planner: the distance between a viewer and
//! a single cat, and the bounding box of a whole set of cats. Both map to a
//! discrete map zoom in `[MIN_ZOOM, MAX_ZOOM]` where higher is closer.

use crate::{haversine_distance, Bounds, Coordinate};

/// Most zoomed-out level.
pub const MIN_ZOOM: u8 = 1;

/// Most zoomed-in level the tile layer serves.
pub const MAX_ZOOM: u8 = 20;

/// Zoom used for a single point, and for two points at distance zero.
pub const SINGLE_POINT_ZOOM: u8 = 18;

/// Distances at or beyond this (km) zoom all the way out.
const FAR_DISTANCE_KM: f64 = 1000.0;

/// Distance bands: `(lower bound km, intercept, slope, min zoom, max zoom)`,
/// checked from the farthest band down.
const DISTANCE_BANDS: [(f64, f64, f64, f64, f64); 3] = [
    (20.0, 6.8, 1.0, 2.0, 4.0),
    (1.0, 13.8, 2.2, 7.0, 15.0),
    (0.0, 18.5, 2.5, 16.0, 18.0),
];

/// `(max span in degrees, zoom)` thresholds for bounding boxes; a span must
/// be strictly greater than the threshold to match.
const SPAN_THRESHOLDS: [(f64, u8); 8] = [
    (100.0, 2),
    (10.0, 3),
    (1.0, 4),
    (0.5, 8),
    (0.1, 10),
    (0.05, 12),
    (0.01, 14),
    (0.005, 16),
];

/// Zoom that keeps two points `km` apart comfortably in view.
///
/// Piecewise logarithmic: below 1 km the map zooms in to 16–18, between 1
/// and 20 km it spans 7–15, beyond that 2–4, and from 1000 km on it is fully
/// zoomed out. The result never increases as the distance grows.
///
/// # Example
/// ```
/// use streetcats_geo::zoom_for_distance;
///
/// assert_eq!(zoom_for_distance(0.0), 18);
/// assert_eq!(zoom_for_distance(1.0), 14);
/// assert_eq!(zoom_for_distance(1000.0), 1);
/// ```
pub fn zoom_for_distance(km: f64) -> u8 {
    if km.is_nan() || km <= 0.0 {
        return SINGLE_POINT_ZOOM;
    }
    if km >= FAR_DISTANCE_KM {
        return MIN_ZOOM;
    }

    let (_, intercept, slope, min, max) = DISTANCE_BANDS
        .iter()
        .copied()
        .find(|(lower, ..)| km >= *lower)
        .unwrap_or(DISTANCE_BANDS[DISTANCE_BANDS.len() - 1]);

    (intercept - slope * km.ln()).clamp(min, max).round() as u8
}

/// Zoom that keeps both coordinates in view.
pub fn zoom_for_distance_between(a: &Coordinate, b: &Coordinate) -> u8 {
    zoom_for_distance(haversine_distance(a, b))
}

/// Zoom that frames a bounding box, from the larger of its two spans.
///
/// A zero-span box (every point identical) gets [`SINGLE_POINT_ZOOM`].
///
/// # Example
/// ```
/// use streetcats_geo::{zoom_for_bounds, Bounds};
///
/// let city = Bounds { north: 40.50, south: 40.35, east: -3.60, west: -3.80 };
/// assert_eq!(zoom_for_bounds(&city), 10);
/// ```
pub fn zoom_for_bounds(bounds: &Bounds) -> u8 {
    let span = bounds.max_span();

    SPAN_THRESHOLDS
        .iter()
        .find(|(threshold, _)| span > *threshold)
        .map(|(_, zoom)| *zoom)
        .unwrap_or(SINGLE_POINT_ZOOM)
}
