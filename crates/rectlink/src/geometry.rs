use std::fmt;

use serde::{Deserialize, Serialize};

/// Default tolerance for [`is_on_border`].
pub const DEFAULT_BORDER_EPSILON: f64 = 0.5;

/// Default tolerance, in degrees, for [`is_angle_valid_for_point`].
pub const DEFAULT_ANGLE_EPSILON: f64 = 1.0;

/// A point on the plane. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `self + dir * distance`.
    pub fn offset(self, dir: Point, distance: f64) -> Self {
        Self {
            x: self.x + dir.x * distance,
            y: self.y + dir.y * distance,
        }
    }

    /// Manhattan distance to another point.
    pub fn manhattan_to(self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a rectangle. Both must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle. `position` is the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub position: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }
}

/// Border coordinates of a rectangle. `left < right`, `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Border {
    /// Axis-aligned bounding box intersection, touching edges included.
    pub fn intersects(&self, other: &Border) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.bottom < other.top
            || self.top > other.bottom)
    }

    /// Whether `p` lies in the interior; points on an edge are outside.
    pub fn contains_strictly(&self, p: Point) -> bool {
        p.x > self.left && p.x < self.right && p.y > self.top && p.y < self.bottom
    }

    /// The four edges as `(from, to)` segments: left, right, top, bottom.
    pub fn edges(&self) -> [(Point, Point); 4] {
        let tl = Point::new(self.left, self.top);
        let tr = Point::new(self.right, self.top);
        let bl = Point::new(self.left, self.bottom);
        let br = Point::new(self.right, self.bottom);
        [(tl, bl), (tr, br), (tl, tr), (bl, br)]
    }
}

/// One side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Edges in tie-breaking order for corner points.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Outward normal angle in degrees.
    pub fn outward_angle(self) -> f64 {
        match self {
            Edge::Left => 180.0,
            Edge::Right => 0.0,
            Edge::Top => 270.0,
            Edge::Bottom => 90.0,
        }
    }

    /// Distance from `p` to this edge's supporting line.
    fn line_distance(self, p: Point, b: &Border) -> f64 {
        match self {
            Edge::Left => (p.x - b.left).abs(),
            Edge::Right => (p.x - b.right).abs(),
            Edge::Top => (p.y - b.top).abs(),
            Edge::Bottom => (p.y - b.bottom).abs(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// A point on a rectangle's border plus its outward angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPoint {
    pub point: Point,
    pub angle: f64,
}

impl ConnectionPoint {
    pub const fn new(point: Point, angle: f64) -> Self {
        Self { point, angle }
    }
}

pub fn border(rect: &Rect) -> Border {
    let hw = rect.size.width / 2.0;
    let hh = rect.size.height / 2.0;
    Border {
        left: rect.position.x - hw,
        right: rect.position.x + hw,
        top: rect.position.y - hh,
        bottom: rect.position.y + hh,
    }
}

/// [`border`] pushed outward by `margin` on all four sides.
pub fn border_with_margin(rect: &Rect, margin: f64) -> Border {
    let b = border(rect);
    Border {
        left: b.left - margin,
        right: b.right + margin,
        top: b.top - margin,
        bottom: b.bottom + margin,
    }
}

/// Unit vector `(cos θ, sin θ)` for an angle in degrees.
pub fn vector_for_angle(angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(rad.cos(), rad.sin())
}

/// Map any angle in degrees into `[0, 360)`.
pub fn normalize_angle(angle_deg: f64) -> f64 {
    ((angle_deg % 360.0) + 360.0) % 360.0
}

/// Whether `point` lies within `epsilon` of one of the rectangle's border segments.
pub fn is_on_border(point: Point, rect: &Rect, epsilon: f64) -> bool {
    let b = border(rect);

    let on_vertical = ((point.x - b.left).abs() < epsilon
        || (point.x - b.right).abs() < epsilon)
        && point.y >= b.top - epsilon
        && point.y <= b.bottom + epsilon;

    let on_horizontal = ((point.y - b.top).abs() < epsilon
        || (point.y - b.bottom).abs() < epsilon)
        && point.x >= b.left - epsilon
        && point.x <= b.right + epsilon;

    on_vertical || on_horizontal
}

/// The edge whose supporting line is closest to `point`.
///
/// Ties (corners) resolve in [`Edge::ALL`] order.
pub fn nearest_edge(point: Point, rect: &Rect) -> Edge {
    let b = border(rect);
    let mut best = Edge::Left;
    let mut best_dist = f64::INFINITY;
    for edge in Edge::ALL {
        let d = edge.line_distance(point, &b);
        if d < best_dist {
            best = edge;
            best_dist = d;
        }
    }
    best
}

/// Whether `angle` is the outward normal of the edge nearest to `point`,
/// within `epsilon` degrees.
pub fn is_angle_valid_for_point(point: Point, rect: &Rect, angle: f64, epsilon: f64) -> bool {
    let expected = nearest_edge(point, rect).outward_angle();
    let diff = (normalize_angle(angle) - expected).abs();
    diff < epsilon || diff > 360.0 - epsilon
}

/// Project `point` onto the nearest edge of `rect` and pair it with that
/// edge's outward angle.
pub fn snap_to_border(point: Point, rect: &Rect) -> ConnectionPoint {
    let b = border(rect);
    let edge = nearest_edge(point, rect);
    let clamp_x = point.x.clamp(b.left, b.right);
    let clamp_y = point.y.clamp(b.top, b.bottom);
    let snapped = match edge {
        Edge::Left => Point::new(b.left, clamp_y),
        Edge::Right => Point::new(b.right, clamp_y),
        Edge::Top => Point::new(clamp_x, b.top),
        Edge::Bottom => Point::new(clamp_x, b.bottom),
    };
    ConnectionPoint::new(snapped, edge.outward_angle())
}
