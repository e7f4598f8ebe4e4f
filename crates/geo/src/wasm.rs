//! WASM bindings for the geo crate.
//!
//! These bindings let the web client call the planner and the distance
//! ranking directly with the cat list it received from the API.

use crate::{
    google_maps_url as maps_url, haversine_distance, ingest::entities_from_json, plan, rank_by_distance,
    zoom_for_distance, Coordinate,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Distance between two coordinates in kilometers.
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);
    haversine_distance(&from, &to)
}

/// Zoom level that keeps two points `km` apart in view.
#[wasm_bindgen]
pub fn zoom_for_distance_km(km: f64) -> u8 {
    zoom_for_distance(km)
}

/// Plan the map viewport.
///
/// # Arguments
/// * `viewer_json` - `{"latitude": .., "longitude": ..}` or `null`
/// * `cats_json` - JSON array of cats as served by the API
///
/// # Returns
/// JSON string `{"center": {"latitude": .., "longitude": ..}, "zoom": ..}`
#[wasm_bindgen]
pub fn plan_viewport(viewer_json: &str, cats_json: &str) -> Result<String, JsValue> {
    let viewer: Option<Coordinate> = serde_json::from_str(viewer_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let cats = entities_from_json(cats_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&plan(viewer, &cats))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

#[derive(Serialize)]
struct RankedCat<'a> {
    id: &'a str,
    distance: f64,
}

/// Sort cats by distance from the user.
///
/// Cats without usable coordinates are left out.
///
/// # Returns
/// JSON string of `{"id": .., "distance": ..}` entries, closest first
#[wasm_bindgen]
pub fn sort_cats_by_distance(user_lat: f64, user_lng: f64, cats_json: &str) -> Result<String, JsValue> {
    let cats = entities_from_json(cats_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let user = Coordinate::new(user_lat, user_lng);

    let results: Vec<RankedCat<'_>> = rank_by_distance(&user, &cats)
        .into_iter()
        .map(|ranked| RankedCat {
            id: ranked.entity.id.as_str(),
            distance: ranked.distance_km,
        })
        .collect();

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Google Maps link for a coordinate.
#[wasm_bindgen]
pub fn google_maps_url(latitude: f64, longitude: f64) -> String {
    maps_url(&Coordinate::new(latitude, longitude))
}
