use serde::{Deserialize, Serialize};

/// how a trip's traveled distance is derived from its geometry.
///
/// both policies prefer the shape polyline over stop-to-stop segments and
/// fall back to stop locations when no usable shape exists. they differ in
/// whether the shape's cumulative dist_traveled hints, when present on its
/// first and last point, short-circuit the projected polyline computation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TripDistancePolicy {
    #[default]
    ShapePreferred,
    HintsPreferred,
}
