use thiserror::Error;

use crate::geometry::{
    ConnectionPoint, DEFAULT_ANGLE_EPSILON, DEFAULT_BORDER_EPSILON, Edge, Rect,
    is_angle_valid_for_point, is_on_border, nearest_edge,
};

/// Why a connection point was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The point is not within tolerance of any border segment.
    #[error("connection point ({x}, {y}) is not on the rectangle border")]
    PointNotOnBorder { x: f64, y: f64 },

    /// The point is on a border but its angle is not that edge's outward normal.
    #[error("connection angle {angle}° is not the outward normal of the {edge} edge ({expected}°)")]
    AngleNotOutwardPerpendicular {
        angle: f64,
        edge: Edge,
        expected: f64,
    },
}

/// Check a connection point against its rectangle using the default tolerances.
pub fn validate_connection(rect: &Rect, cpoint: &ConnectionPoint) -> Result<(), ValidationError> {
    validate_connection_with(rect, cpoint, DEFAULT_BORDER_EPSILON, DEFAULT_ANGLE_EPSILON)
}

/// Position is checked before angle, so the two failures stay distinguishable.
pub fn validate_connection_with(
    rect: &Rect,
    cpoint: &ConnectionPoint,
    border_epsilon: f64,
    angle_epsilon: f64,
) -> Result<(), ValidationError> {
    let p = cpoint.point;
    if !is_on_border(p, rect, border_epsilon) {
        return Err(ValidationError::PointNotOnBorder { x: p.x, y: p.y });
    }

    if !is_angle_valid_for_point(p, rect, cpoint.angle, angle_epsilon) {
        let edge = nearest_edge(p, rect);
        return Err(ValidationError::AngleNotOutwardPerpendicular {
            angle: cpoint.angle,
            edge,
            expected: edge.outward_angle(),
        });
    }

    Ok(())
}
