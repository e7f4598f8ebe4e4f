//! Nearest-entity lookup.
//!
//! A plain linear scan: the cats map holds tens to low hundreds of
//! entities, so no spatial index is kept.

use crate::{haversine_distance, Coordinate, LocatedEntity};

/// Finds the entity closest to `reference`.
///
/// Entities without a valid coordinate are skipped. Ties keep the entity
/// that appears first in `candidates`. Returns `None` when nothing is located.
///
/// # Example
/// ```
/// use streetcats_geo::{nearest, Coordinate, LocatedEntity};
///
/// let viewer = Coordinate::new(40.4168, -3.7038);
/// let cats = [
///     LocatedEntity::new("far", 41.3851, 2.1734),
///     LocatedEntity::new("near", 40.4200, -3.7000),
/// ];
/// assert_eq!(nearest(&viewer, &cats).map(|c| c.id), Some("near"));
/// ```
pub fn nearest<'a, Id>(
    reference: &Coordinate,
    candidates: &'a [LocatedEntity<Id>],
) -> Option<&'a LocatedEntity<Id>> {
    nearest_with_distance(reference, candidates).map(|(entity, _)| entity)
}

/// Like [`nearest`], also returning the distance in kilometers.
pub fn nearest_with_distance<'a, Id>(
    reference: &Coordinate,
    candidates: &'a [LocatedEntity<Id>],
) -> Option<(&'a LocatedEntity<Id>, f64)> {
    nearest_located(reference, candidates).map(|(entity, _, distance)| (entity, distance))
}

/// The nearest entity, its coordinate and its distance in kilometers.
pub(crate) fn nearest_located<'a, Id>(
    reference: &Coordinate,
    candidates: &'a [LocatedEntity<Id>],
) -> Option<(&'a LocatedEntity<Id>, Coordinate, f64)> {
    let mut best: Option<(&'a LocatedEntity<Id>, Coordinate, f64)> = None;

    for entity in candidates {
        let Some(coord) = entity.location() else {
            continue;
        };
        let distance = haversine_distance(reference, coord);

        // strict comparison keeps the first of equidistant entities
        match best {
            Some((_, _, shortest)) if distance >= shortest => {}
            _ => best = Some((entity, *coord, distance)),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const MADRID: Coordinate = Coordinate { latitude: 40.4168, longitude: -3.7038 };

    #[test]
    fn test_empty_returns_none() {
        let cats: [LocatedEntity<u32>; 0] = [];
        assert!(nearest(&MADRID, &cats).is_none());
    }

    #[test]
    fn test_only_unlocated_returns_none() {
        let cats = [LocatedEntity::unlocated(1), LocatedEntity::new(2, f64::NAN, 0.0)];
        assert!(nearest(&MADRID, &cats).is_none());
    }

    #[test]
    fn test_picks_closest() {
        let cats = [
            LocatedEntity::new("b", 41.3851, 2.1734),
            LocatedEntity::new("a", 40.4200, -3.7000),
            LocatedEntity::unlocated("c"),
        ];
        let (entity, distance) = nearest_with_distance(&MADRID, &cats).unwrap();
        assert_eq!(entity.id, "a");
        assert!(distance < 1.0);
    }

    #[test]
    fn test_tie_keeps_first_in_input_order() {
        // mirror images across the reference meridian are equidistant
        let cats = [
            LocatedEntity::new("east", 0.0, 1.0),
            LocatedEntity::new("west", 0.0, -1.0),
        ];
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(nearest(&origin, &cats).unwrap().id, "east");

        let reversed = [cats[1].clone(), cats[0].clone()];
        assert_eq!(nearest(&origin, &reversed).unwrap().id, "west");
    }

    #[test]
    fn test_skips_unlocated_before_located() {
        let cats = [LocatedEntity::unlocated(1), LocatedEntity::new(2, 40.0, -3.0)];
        assert_eq!(nearest(&MADRID, &cats).unwrap().id, 2);
    }
}
