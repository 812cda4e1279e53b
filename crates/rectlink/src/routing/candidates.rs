use crate::geometry::Point;

use super::optimize::count_turns;
use super::types::{Candidate, RouteComplexity, RouteKind, Terminals};

impl Candidate {
    /// Build a candidate and score it against the terminals.
    pub fn new(kind: RouteKind, terminals: &Terminals, bends: Vec<Point>) -> Self {
        let complexity = compute_complexity(terminals, &bends);
        Self {
            kind,
            bends,
            complexity,
        }
    }

    /// The routed chain `[start, ...bends, end]`, lead-out stubs excluded.
    pub fn chain(&self, terminals: &Terminals) -> Vec<Point> {
        let mut chain = Vec::with_capacity(self.bends.len() + 2);
        chain.push(terminals.start);
        chain.extend_from_slice(&self.bends);
        chain.push(terminals.end);
        chain
    }
}

/// Manhattan length of `[start, ...bends, end]`; turns are counted over the
/// whole connection so a candidate that doubles back on a stub pays for it.
pub fn compute_complexity(terminals: &Terminals, bends: &[Point]) -> RouteComplexity {
    let mut full = Vec::with_capacity(bends.len() + 4);
    full.push(terminals.source);
    full.push(terminals.start);
    full.extend_from_slice(bends);
    full.push(terminals.end);
    full.push(terminals.target);

    let routed = &full[1..full.len() - 1];
    let length = routed.windows(2).map(|w| w[0].manhattan_to(w[1])).sum();
    RouteComplexity {
        length,
        turns: count_turns(&full),
    }
}

/// Pick the coordinate past the farther of `a`/`b` along `travel`, pushed out
/// by `margin`. A zero `travel` falls back to the direction from `a` to `b`.
fn channel_coord(a: f64, b: f64, travel: f64, margin: f64) -> f64 {
    let forward = if travel != 0.0 { travel > 0.0 } else { b >= a };
    if forward {
        a.max(b) + margin
    } else {
        a.min(b) - margin
    }
}

/// The direct routes, in tie-breaking order: both single corners, the two
/// outer channels, then the two channels halfway between the lead-outs.
///
/// `dir` is the (axis-snapped) lead-out direction at `start`.
pub fn direct_candidates(terminals: &Terminals, dir: Point, margin: f64) -> Vec<Candidate> {
    let Terminals { start, end, .. } = *terminals;
    let mid_x = channel_coord(start.x, end.x, dir.x, margin);
    let mid_y = channel_coord(start.y, end.y, dir.y, margin);
    let half_x = (start.x + end.x) / 2.0;
    let half_y = (start.y + end.y) / 2.0;

    vec![
        Candidate::new(
            RouteKind::VerticalFirst,
            terminals,
            vec![Point::new(start.x, end.y)],
        ),
        Candidate::new(
            RouteKind::HorizontalFirst,
            terminals,
            vec![Point::new(end.x, start.y)],
        ),
        Candidate::new(
            RouteKind::ChannelX,
            terminals,
            vec![Point::new(mid_x, start.y), Point::new(mid_x, end.y)],
        ),
        Candidate::new(
            RouteKind::ChannelY,
            terminals,
            vec![Point::new(start.x, mid_y), Point::new(end.x, mid_y)],
        ),
        Candidate::new(
            RouteKind::MidChannelX,
            terminals,
            vec![Point::new(half_x, start.y), Point::new(half_x, end.y)],
        ),
        Candidate::new(
            RouteKind::MidChannelY,
            terminals,
            vec![Point::new(start.x, half_y), Point::new(end.x, half_y)],
        ),
    ]
}
