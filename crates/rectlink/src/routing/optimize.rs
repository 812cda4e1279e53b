use crate::geometry::Point;

/// Axis classification of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// `Horizontal` if `|dx| > |dy|`, otherwise `Vertical` (zero-length included).
    pub fn of(a: Point, b: Point) -> Self {
        if (b.x - a.x).abs() > (b.y - a.y).abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

/// Count axis changes along a chain, ignoring zero-length segments.
pub fn count_turns(chain: &[Point]) -> u32 {
    let mut turns = 0;
    let mut prev: Option<Axis> = None;
    for pair in chain.windows(2) {
        if pair[0] == pair[1] {
            continue;
        }
        let axis = Axis::of(pair[0], pair[1]);
        if prev.is_some_and(|p| p != axis) {
            turns += 1;
        }
        prev = Some(axis);
    }
    turns
}

/// One collinear-merge pass: keep the endpoints and every interior point
/// whose incoming and outgoing segments differ in axis.
fn merge_pass(points: &[Point]) -> Vec<Point> {
    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);
    for window in points.windows(3) {
        if Axis::of(window[0], window[1]) != Axis::of(window[1], window[2]) {
            out.push(window[1]);
        }
    }
    out.push(points[points.len() - 1]);
    out
}

/// Collapse collinear runs into a minimal-turn polyline.
///
/// Passes repeat until the point count stops shrinking, so the result is a
/// fixed point and `optimize_path(&optimize_path(p)) == optimize_path(p)`.
pub fn optimize_path(points: &[Point]) -> Vec<Point> {
    let mut current = points.to_vec();
    while current.len() >= 3 {
        let next = merge_pass(&current);
        if next.len() == current.len() {
            break;
        }
        current = next;
    }
    current
}
