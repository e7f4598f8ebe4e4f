//! Links and labels for coordinates.

use crate::Coordinate;

/// Google Maps link pointing at a coordinate.
///
/// # Example
/// ```
/// use streetcats_geo::{google_maps_url, Coordinate};
///
/// let url = google_maps_url(&Coordinate::new(40.416775, -3.70379));
/// assert_eq!(url, "https://www.google.com/maps?q=40.416775,-3.70379");
/// ```
pub fn google_maps_url(coord: &Coordinate) -> String {
    format!("https://www.google.com/maps?q={},{}", coord.latitude, coord.longitude)
}

/// Short `lat, lng` label with four decimals.
///
/// Shown in place of an address when reverse geocoding fails.
pub fn coordinate_label(coord: &Coordinate) -> String {
    format!("{:.4}, {:.4}", coord.latitude, coord.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_maps_url_negative_values() {
        let url = google_maps_url(&Coordinate::new(-33.8688, 151.2093));
        assert_eq!(url, "https://www.google.com/maps?q=-33.8688,151.2093");
    }

    #[test]
    fn test_coordinate_label() {
        assert_eq!(coordinate_label(&Coordinate::new(40.416775, -3.70379)), "40.4168, -3.7038");
        assert_eq!(coordinate_label(&Coordinate::new(0.0, 0.0)), "0.0000, 0.0000");
    }
}
