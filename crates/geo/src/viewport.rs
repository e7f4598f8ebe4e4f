//! Viewport planning for the cats map.
//!
//! Given the viewer location (if geolocation succeeded) and the current cat
//! list, decide where the map is centered and how far it is zoomed.

use crate::nearest::nearest_located;
use crate::zoom::SINGLE_POINT_ZOOM;
use crate::{zoom_for_bounds, zoom_for_distance, Bounds, Coordinate, LocatedEntity, PlannerConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visible map region: a center and a zoom in `[1, 20]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

impl Viewport {
    /// Creates a viewport.
    pub const fn new(center: Coordinate, zoom: u8) -> Self {
        Self { center, zoom }
    }

    /// Close-up on a single point (a cat's detail map).
    pub const fn for_point(center: Coordinate) -> Self {
        Self::new(center, SINGLE_POINT_ZOOM)
    }
}

/// Which rule produced a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStrategy {
    /// Nothing to show: the configured default
    Default,
    /// Only the viewer is known
    ViewerOnly,
    /// Viewer framed together with the nearest cat
    ViewerAndNearest,
    /// A single located cat, no viewer
    SinglePoint,
    /// Several located cats, no viewer
    AllPoints,
}

/// A viewport together with how it was derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportPlan {
    pub viewport: Viewport,
    /// Box the renderer should fit, when there is more than one point
    pub frame: Option<Bounds>,
    pub strategy: PlanStrategy,
}

/// Plans viewports with a given set of fallback values.
#[derive(Debug, Clone, Default)]
pub struct ViewportPlanner {
    config: PlannerConfig,
}

impl ViewportPlanner {
    /// Creates a planner from a configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The planner's configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Decides the viewport. See [`ViewportPlanner::plan_detailed`].
    pub fn plan<Id>(&self, viewer: Option<Coordinate>, entities: &[LocatedEntity<Id>]) -> Viewport {
        self.plan_detailed(viewer, entities).viewport
    }

    /// Decides the viewport and reports which rule applied.
    ///
    /// Rules, first match wins:
    /// 1. no viewer, no located cat: the default center and zoom;
    /// 2. viewer, no located cat: the viewer at the viewer zoom;
    /// 3. viewer and located cats: the midpoint between the viewer and the
    ///    nearest cat, zoomed by their distance;
    /// 4. located cats only: the mean of their coordinates, zoomed by their
    ///    bounding box (or the single-point zoom for one cat).
    ///
    /// An invalid viewer counts as no viewer.
    pub fn plan_detailed<Id>(
        &self,
        viewer: Option<Coordinate>,
        entities: &[LocatedEntity<Id>],
    ) -> ViewportPlan {
        let viewer = viewer.and_then(Coordinate::valid);

        let plan = match viewer {
            Some(viewer) => self.plan_around_viewer(viewer, entities),
            None => self.plan_over_entities(entities),
        };

        debug!(
            strategy = ?plan.strategy,
            zoom = plan.viewport.zoom,
            latitude = plan.viewport.center.latitude,
            longitude = plan.viewport.center.longitude,
            "Planned map viewport"
        );

        plan
    }

    fn plan_around_viewer<Id>(&self, viewer: Coordinate, entities: &[LocatedEntity<Id>]) -> ViewportPlan {
        let Some((_, target, distance_km)) = nearest_located(&viewer, entities) else {
            return ViewportPlan {
                viewport: Viewport::new(viewer, self.config.viewer_zoom),
                frame: None,
                strategy: PlanStrategy::ViewerOnly,
            };
        };

        ViewportPlan {
            viewport: Viewport::new(
                Coordinate::midpoint(&viewer, &target),
                zoom_for_distance(distance_km),
            ),
            frame: Bounds::from_coordinates(&[viewer, target]),
            strategy: PlanStrategy::ViewerAndNearest,
        }
    }

    fn plan_over_entities<Id>(&self, entities: &[LocatedEntity<Id>]) -> ViewportPlan {
        let located: Vec<Coordinate> = entities.iter().filter_map(|e| e.location().copied()).collect();

        match located.as_slice() {
            [] => ViewportPlan {
                viewport: Viewport::new(self.config.default_center, self.config.default_zoom),
                frame: None,
                strategy: PlanStrategy::Default,
            },
            [only] => ViewportPlan {
                viewport: Viewport::new(*only, self.config.single_point_zoom),
                frame: None,
                strategy: PlanStrategy::SinglePoint,
            },
            many => {
                let frame = Bounds::from_coordinates(many);
                let center = Coordinate::mean(many).unwrap_or(self.config.default_center);
                let zoom = frame
                    .as_ref()
                    .map(zoom_for_bounds)
                    .unwrap_or(self.config.single_point_zoom);

                ViewportPlan {
                    viewport: Viewport::new(center, zoom),
                    frame,
                    strategy: PlanStrategy::AllPoints,
                }
            }
        }
    }
}

/// Decides the viewport with the default configuration.
///
/// # Example
/// ```
/// use streetcats_geo::{plan, Coordinate, LocatedEntity, Viewport};
///
/// let viewer = Coordinate::new(40.4168, -3.7038);
/// let nobody: [LocatedEntity<u32>; 0] = [];
///
/// assert_eq!(plan(Some(viewer), &nobody), Viewport::new(viewer, 15));
/// ```
pub fn plan<Id>(viewer: Option<Coordinate>, entities: &[LocatedEntity<Id>]) -> Viewport {
    ViewportPlanner::default().plan(viewer, entities)
}
