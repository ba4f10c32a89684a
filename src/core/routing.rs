//! Right-angle connector geometry.
//!
//! A connector leaves the source center horizontally, turns once at the
//! destination's x coordinate, and ends at the destination center with a
//! filled arrowhead.

use crate::core::types::Position;
use std::f64::consts::PI;

/// Distance from the arrow tip to each wing point
pub const ARROW_SIZE: f64 = 10.0;

/// Half-angle between the connector and each arrow wing
pub const ARROW_HALF_ANGLE: f64 = PI / 6.0;

/// Drawable connector: elbow polyline plus arrowhead triangle
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// source, corner, destination
    pub path: [Position; 3],
    /// tip, wing, wing
    pub arrow: [Position; 3],
}

/// Route a connector between two anchor points
pub fn route(source: Position, dest: Position) -> Connector {
    let corner = Position::new(dest.x, source.y);
    // Last segment with a direction; falls back to the horizontal leg when
    // source and destination share a y coordinate.
    let from = if corner != dest { corner } else { source };
    Connector {
        path: [source, corner, dest],
        arrow: arrowhead(from, dest),
    }
}

/// Arrowhead triangle pointing at `tip` along the segment `from -> tip`
pub fn arrowhead(from: Position, tip: Position) -> [Position; 3] {
    let angle = (tip.y - from.y).atan2(tip.x - from.x);
    let wing = |offset: f64| {
        Position::new(
            tip.x - ARROW_SIZE * (angle + offset).cos(),
            tip.y - ARROW_SIZE * (angle + offset).sin(),
        )
    };
    [tip, wing(-ARROW_HALF_ANGLE), wing(ARROW_HALF_ANGLE)]
}
