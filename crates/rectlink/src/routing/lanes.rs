use crate::geometry::{Point, Rect, border};

use super::types::{Candidate, LaneSide, RouteKind, Terminals};

/// Coordinate of the lane running along `side` of both rectangles.
///
/// Above/below lanes are y values; left/right lanes are x values.
pub fn lane_coord(side: LaneSide, rect1: &Rect, rect2: &Rect, margin: f64) -> f64 {
    let b1 = border(rect1);
    let b2 = border(rect2);
    match side {
        LaneSide::Above => b1.top.min(b2.top) - margin,
        LaneSide::Below => b1.bottom.max(b2.bottom) + margin,
        LaneSide::Left => b1.left.min(b2.left) - margin,
        LaneSide::Right => b1.right.max(b2.right) + margin,
    }
}

/// Two-bend routes around the union of both rectangles: above, below,
/// left, right, in that order.
pub fn bypass_candidates(
    terminals: &Terminals,
    rect1: &Rect,
    rect2: &Rect,
    margin: f64,
) -> Vec<Candidate> {
    let Terminals { start, end, .. } = *terminals;
    LaneSide::ALL
        .iter()
        .map(|&side| {
            let lane = lane_coord(side, rect1, rect2, margin);
            let bends = match side {
                LaneSide::Above | LaneSide::Below => {
                    vec![Point::new(start.x, lane), Point::new(end.x, lane)]
                }
                LaneSide::Left | LaneSide::Right => {
                    vec![Point::new(lane, start.y), Point::new(lane, end.y)]
                }
            };
            Candidate::new(RouteKind::Bypass(side), terminals, bends)
        })
        .collect()
}
