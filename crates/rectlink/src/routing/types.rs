use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{DEFAULT_ANGLE_EPSILON, DEFAULT_BORDER_EPSILON, Point};

/// Tunable distances and tolerances for the router.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Clearance from a border before the path may turn.
    pub connection_margin: f64,
    /// Minimum gap between the two rectangles' borders.
    pub min_rect_gap: f64,
    /// How far each rectangle is grown for collision tests.
    /// Must stay below `connection_margin`.
    pub obstacle_clearance: f64,
    /// Tolerance for a connection point sitting on a border.
    pub border_epsilon: f64,
    /// Tolerance, in degrees, for a connection angle.
    pub angle_epsilon: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            connection_margin: 10.0,
            min_rect_gap: 5.0,
            obstacle_clearance: 5.0,
            border_epsilon: DEFAULT_BORDER_EPSILON,
            angle_epsilon: DEFAULT_ANGLE_EPSILON,
        }
    }
}

/// Errors raised by [`compute_connection_path`](super::compute_connection_path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The rectangles, grown by the minimum gap, intersect.
    #[error("rectangles overlap or are closer than the minimum gap")]
    RectanglesOverlap,

    /// No direct, bypass or grid route clears both rectangles.
    #[error("no collision-free route between the connection points")]
    NoRouteFound,
}

/// Side of the combined rectangles a bypass lane runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneSide {
    Above,
    Below,
    Left,
    Right,
}

impl LaneSide {
    pub const ALL: [LaneSide; 4] = [
        LaneSide::Above,
        LaneSide::Below,
        LaneSide::Left,
        LaneSide::Right,
    ];
}

/// How a candidate's bend points were generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Single bend at `(start.x, end.y)`.
    VerticalFirst,
    /// Single bend at `(end.x, start.y)`.
    HorizontalFirst,
    /// Two bends through a vertical channel at `mid_x`.
    ChannelX,
    /// Two bends through a horizontal channel at `mid_y`.
    ChannelY,
    /// Two bends through a vertical channel halfway between the lead-outs.
    MidChannelX,
    /// Two bends through a horizontal channel halfway between the lead-outs.
    MidChannelY,
    /// Two bends around both rectangles.
    Bypass(LaneSide),
    /// Shortest path over the routing grid.
    Grid,
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKind::VerticalFirst => f.write_str("vertical-first"),
            RouteKind::HorizontalFirst => f.write_str("horizontal-first"),
            RouteKind::ChannelX => f.write_str("channel-x"),
            RouteKind::ChannelY => f.write_str("channel-y"),
            RouteKind::MidChannelX => f.write_str("mid-channel-x"),
            RouteKind::MidChannelY => f.write_str("mid-channel-y"),
            RouteKind::Bypass(side) => write!(f, "bypass-{side:?}"),
            RouteKind::Grid => f.write_str("grid"),
        }
    }
}

/// Complexity metrics for a candidate, compared as `(length, turns)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteComplexity {
    /// Manhattan length from lead-out start to lead-out end.
    pub length: f64,
    /// Number of horizontal/vertical direction changes, lead-out stubs included.
    pub turns: u32,
}

impl Eq for RouteComplexity {}

impl Ord for RouteComplexity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length
            .total_cmp(&other.length)
            .then(self.turns.cmp(&other.turns))
    }
}

impl PartialOrd for RouteComplexity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The fixed ends of every candidate: each connection point and the
/// lead-out point `connection_margin` in front of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terminals {
    pub source: Point,
    pub start: Point,
    pub end: Point,
    pub target: Point,
}

/// A route between the two lead-out points, described by its interior bends.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub kind: RouteKind,
    pub bends: Vec<Point>,
    pub complexity: RouteComplexity,
}
