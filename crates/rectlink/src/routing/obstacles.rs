use crate::geometry::{Border, Point, Rect, border_with_margin};

/// `true` when `a`, `b`, `c` turn counter-clockwise (in y-down screen space,
/// the sign is simply the cross product's).
fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Whether segments `(a1, a2)` and `(b1, b2)` properly cross.
///
/// Collinear and endpoint-touching configurations report no intersection.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    ccw(a1, b1, b2) != ccw(a2, b1, b2) && ccw(a1, a2, b1) != ccw(a1, a2, b2)
}

/// The two rectangles, grown by the collision clearance.
#[derive(Debug, Clone, Copy)]
pub struct Obstacles {
    borders: [Border; 2],
}

impl Obstacles {
    pub fn new(rect1: &Rect, rect2: &Rect, clearance: f64) -> Self {
        Self {
            borders: [
                border_with_margin(rect1, clearance),
                border_with_margin(rect2, clearance),
            ],
        }
    }

    /// Whether the segment crosses any of the eight obstacle edges.
    pub fn blocks_segment(&self, from: Point, to: Point) -> bool {
        self.borders.iter().any(|b| {
            b.edges()
                .iter()
                .any(|&(e1, e2)| segments_intersect(from, to, e1, e2))
        })
    }

    /// Whether `point` lies strictly inside either grown rectangle.
    pub fn contains(&self, point: Point) -> bool {
        self.borders.iter().any(|b| b.contains_strictly(point))
    }

    /// Whether a single straight step stays outside both grown rectangles.
    ///
    /// A step whose ends sit on opposite edges crosses the interior without
    /// properly crossing an edge, so the midpoint is checked as well.
    pub fn clears_step(&self, from: Point, to: Point) -> bool {
        let mid = Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
        !self.contains(mid) && !self.blocks_segment(from, to)
    }

    /// Whether any consecutive pair in `chain` is blocked.
    pub fn blocks_chain(&self, chain: &[Point]) -> bool {
        chain
            .windows(2)
            .any(|pair| self.blocks_segment(pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(segments_intersect(p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(10.0, 0.0)));
        assert!(segments_intersect(p(0.0, 5.0), p(10.0, 5.0), p(5.0, 0.0), p(5.0, 10.0)));
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        assert!(!segments_intersect(p(0.0, 0.0), p(4.0, 0.0), p(5.0, -1.0), p(5.0, 1.0)));
        assert!(!segments_intersect(p(0.0, 0.0), p(10.0, 0.0), p(0.0, 1.0), p(10.0, 1.0)));
    }

    #[test]
    fn collinear_overlap_is_not_a_crossing() {
        assert!(!segments_intersect(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 0.0), p(15.0, 0.0)));
    }

    #[test]
    fn obstacles_block_segment_through_rect() {
        let r1 = Rect::new(p(100.0, 100.0), Size::new(50.0, 50.0));
        let r2 = Rect::new(p(300.0, 100.0), Size::new(50.0, 50.0));
        let obstacles = Obstacles::new(&r1, &r2, 5.0);
        assert!(obstacles.blocks_segment(p(0.0, 100.0), p(200.0, 100.0)));
        assert!(obstacles.blocks_segment(p(200.0, 100.0), p(400.0, 100.0)));
        assert!(!obstacles.blocks_segment(p(135.0, 100.0), p(265.0, 100.0)));
        // Clearance band counts as blocked.
        assert!(obstacles.blocks_segment(p(128.0, 0.0), p(128.0, 200.0)));
    }

    #[test]
    fn chain_blocked_if_any_segment_blocked() {
        let r1 = Rect::new(p(100.0, 100.0), Size::new(50.0, 50.0));
        let r2 = Rect::new(p(300.0, 100.0), Size::new(50.0, 50.0));
        let obstacles = Obstacles::new(&r1, &r2, 5.0);
        let clear = [p(135.0, 100.0), p(135.0, 50.0), p(265.0, 50.0)];
        assert!(!obstacles.blocks_chain(&clear));
        let blocked = [p(135.0, 100.0), p(135.0, 50.0), p(100.0, 50.0), p(100.0, 100.0)];
        assert!(obstacles.blocks_chain(&blocked));
    }

    #[test]
    fn step_between_opposite_edges_is_not_clear() {
        let r1 = Rect::new(p(100.0, 100.0), Size::new(50.0, 50.0));
        let r2 = Rect::new(p(300.0, 100.0), Size::new(50.0, 50.0));
        let obstacles = Obstacles::new(&r1, &r2, 5.0);
        assert!(obstacles.contains(p(100.0, 100.0)));
        assert!(!obstacles.contains(p(130.0, 100.0)));
        assert!(!obstacles.clears_step(p(70.0, 80.0), p(130.0, 80.0)));
        assert!(obstacles.clears_step(p(135.0, 50.0), p(135.0, 150.0)));
    }
}
