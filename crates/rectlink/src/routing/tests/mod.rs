
use super::compute_connection_path;
use super::obstacles::Obstacles;
use super::types::{RoutingConfig, RoutingError};
use crate::geometry::{ConnectionPoint, Point, Rect, Size, border};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Helper to create a Rect from its center and size.
fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(p(x, y), Size::new(w, h))
}

/// Helper to create a ConnectionPoint.
fn cp(x: f64, y: f64, angle: f64) -> ConnectionPoint {
    ConnectionPoint::new(p(x, y), angle)
}

/// Route with the default configuration.
fn route(
    r1: &Rect,
    r2: &Rect,
    c1: &ConnectionPoint,
    c2: &ConnectionPoint,
) -> Result<Vec<Point>, RoutingError> {
    compute_connection_path(r1, r2, c1, c2, &RoutingConfig::default())
}

/// Route and panic with the error if routing failed.
fn route_ok(r1: &Rect, r2: &Rect, c1: &ConnectionPoint, c2: &ConnectionPoint) -> Vec<Point> {
    match route(r1, r2, c1, c2) {
        Ok(path) => path,
        Err(e) => panic!("routing failed: {e}"),
    }
}

/// Assert the path starts and ends exactly on the connection points.
fn assert_endpoints(path: &[Point], c1: &ConnectionPoint, c2: &ConnectionPoint) {
    assert!(path.len() >= 2, "path too short: {path:?}");
    assert_eq!(path[0], c1.point, "path does not start at cpoint1");
    assert_eq!(path[path.len() - 1], c2.point, "path does not end at cpoint2");
}

/// Assert every segment is horizontal or vertical.
fn assert_orthogonal(path: &[Point]) {
    for pair in path.windows(2) {
        assert!(
            pair[0].x == pair[1].x || pair[0].y == pair[1].y,
            "diagonal segment {:?} -> {:?} in {path:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Assert the path, outside its two lead-out stubs, crosses neither
/// clearance-expanded rectangle.
///
/// The first and last segments always run straight out of the connection
/// points, so they are shortened to start `connection_margin` out before
/// checking.
fn assert_clear_of_rects(
    path: &[Point],
    r1: &Rect,
    r2: &Rect,
    c1: &ConnectionPoint,
    c2: &ConnectionPoint,
) {
    let config = RoutingConfig::default();
    let lead = |c: &ConnectionPoint| {
        let v = crate::geometry::vector_for_angle(c.angle);
        c.point
            .offset(p(v.x.round(), v.y.round()), config.connection_margin)
    };
    let mut trimmed = path.to_vec();
    let last = trimmed.len() - 1;
    trimmed[0] = lead(c1);
    trimmed[last] = lead(c2);

    let obstacles = Obstacles::new(r1, r2, config.obstacle_clearance);
    assert!(
        !obstacles.blocks_chain(&trimmed),
        "path crosses a rectangle: {path:?}"
    );
}

/// Number of axis changes along the path, zero-length hops ignored.
fn turns(path: &[Point]) -> u32 {
    super::optimize::count_turns(path)
}

/// All of the above for a successful route.
fn assert_valid_route(
    path: &[Point],
    r1: &Rect,
    r2: &Rect,
    c1: &ConnectionPoint,
    c2: &ConnectionPoint,
) {
    assert_endpoints(path, c1, c2);
    assert_orthogonal(path);
    assert_clear_of_rects(path, r1, r2, c1, c2);
}

/// Seeded linear congruential generator for reproducible scene sweeps.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    /// Integer in `lo..=hi`, as f64.
    fn range(&mut self, lo: u64, hi: u64) -> f64 {
        (lo + self.next_u64() % (hi - lo + 1)) as f64
    }
}

/// Largest gap between the two rectangles along either axis.
fn separation(r1: &Rect, r2: &Rect) -> f64 {
    let (a, b) = (border(r1), border(r2));
    let gx = (b.left - a.right).max(a.left - b.right);
    let gy = (b.top - a.bottom).max(a.top - b.bottom);
    gx.max(gy)
}
