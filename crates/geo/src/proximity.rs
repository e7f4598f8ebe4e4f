//! Distance ranking of entities around a reference point.
//!
//! This is what orders the cats list by "closest to you". Entities without
//! a valid coordinate are left out of the ranking entirely so the list never
//! shows a cat it cannot place.

use crate::{haversine_distance, Coordinate, LocatedEntity};
use serde::Serialize;

/// An entity together with its distance from the reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<'a, Id> {
    /// The ranked entity
    pub entity: &'a LocatedEntity<Id>,
    /// Distance from the reference point in kilometers
    pub distance_km: f64,
}

/// Ranks located entities by ascending distance from `reference`.
///
/// The sort is stable: equidistant entities keep their input order.
///
/// # Example
/// ```
/// use streetcats_geo::{rank_by_distance, Coordinate, LocatedEntity};
///
/// let viewer = Coordinate::new(40.4168, -3.7038);
/// let cats = vec![
///     LocatedEntity::new(1, 41.3851, 2.1734),
///     LocatedEntity::unlocated(2),
///     LocatedEntity::new(3, 40.4200, -3.7000),
/// ];
///
/// let ranked = rank_by_distance(&viewer, &cats);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].entity.id, 3);
/// ```
pub fn rank_by_distance<'a, Id>(
    reference: &Coordinate,
    entities: &'a [LocatedEntity<Id>],
) -> Vec<Ranked<'a, Id>> {
    let (located, coords): (Vec<&'a LocatedEntity<Id>>, Vec<Coordinate>) = entities
        .iter()
        .filter_map(|entity| entity.location().map(|coord| (entity, *coord)))
        .unzip();

    let distances = distances_from(reference, &coords);

    let mut ranked: Vec<Ranked<'a, Id>> = located
        .into_iter()
        .zip(distances)
        .map(|(entity, distance_km)| Ranked { entity, distance_km })
        .collect();

    // sort_by is stable; distances of valid coordinates are always finite
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

/// Located entities sorted by ascending distance from `reference`.
///
/// Same ordering as [`rank_by_distance`], without the distances.
pub fn sort_by_distance<'a, Id>(
    reference: &Coordinate,
    entities: &'a [LocatedEntity<Id>],
) -> Vec<&'a LocatedEntity<Id>> {
    rank_by_distance(reference, entities)
        .into_iter()
        .map(|ranked| ranked.entity)
        .collect()
}

/// Distances from `reference`, in the same order as `coords`.
fn distances_from(reference: &Coordinate, coords: &[Coordinate]) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        coords
            .par_iter()
            .map(|coord| haversine_distance(reference, coord))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        coords
            .iter()
            .map(|coord| haversine_distance(reference, coord))
            .collect()
    }
}
