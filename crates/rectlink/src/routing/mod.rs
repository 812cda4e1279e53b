pub mod candidates;
pub mod grid;
pub mod lanes;
pub mod obstacles;
pub mod optimize;
pub mod search;
pub mod serialize;
pub mod types;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::geometry::{
    ConnectionPoint, Point, Rect, border, border_with_margin, vector_for_angle,
};
use candidates::direct_candidates;
use grid::RoutingGrid;
use lanes::bypass_candidates;
use obstacles::Obstacles;
use optimize::optimize_path;
use search::{find_best_route, search_grid};
use types::{RoutingConfig, RoutingError, Terminals};

/// Whether the rectangles intersect or their borders are at most `gap` apart.
pub fn rectangles_overlap(rect1: &Rect, rect2: &Rect, gap: f64) -> bool {
    border_with_margin(rect1, gap).intersects(&border(rect2))
}

/// Outward lead-out direction, rounded to the nearest axis.
fn lead_out_direction(angle: f64) -> Point {
    let v = vector_for_angle(angle);
    Point::new(v.x.round(), v.y.round())
}

/// Route an orthogonal path between two connection points.
///
/// The connection points are assumed to be validated against their
/// rectangles. Direct two- and three-segment routes are tried first; when
/// all of them collide, lane routes around both rectangles are tried, and
/// finally a shortest-path search over a small orthogonal grid.
///
/// # Returns
/// The optimized path, starting at `cpoint1.point` and ending at
/// `cpoint2.point`, or a [`RoutingError`].
pub fn compute_connection_path(
    rect1: &Rect,
    rect2: &Rect,
    cpoint1: &ConnectionPoint,
    cpoint2: &ConnectionPoint,
    config: &RoutingConfig,
) -> Result<Vec<Point>, RoutingError> {
    if rectangles_overlap(rect1, rect2, config.min_rect_gap) {
        return Err(RoutingError::RectanglesOverlap);
    }

    let margin = config.connection_margin;
    let dir1 = lead_out_direction(cpoint1.angle);
    let dir2 = lead_out_direction(cpoint2.angle);
    let terminals = Terminals {
        source: cpoint1.point,
        start: cpoint1.point.offset(dir1, margin),
        end: cpoint2.point.offset(dir2, margin),
        target: cpoint2.point,
    };

    let obstacles = Obstacles::new(rect1, rect2, config.obstacle_clearance);

    let chosen = find_best_route(
        direct_candidates(&terminals, dir1, margin),
        &obstacles,
        &terminals,
    )
    .or_else(|| {
        debug!("no direct route clears both rectangles; trying bypass lanes");
        find_best_route(
            bypass_candidates(&terminals, rect1, rect2, margin),
            &obstacles,
            &terminals,
        )
    })
    .or_else(|| {
        debug!("bypass lanes blocked; searching the routing grid");
        let grid = RoutingGrid::build(&terminals, rect1, rect2, margin);
        search_grid(&grid, &obstacles, &terminals)
    })
    .ok_or(RoutingError::NoRouteFound)?;

    debug!(
        kind = %chosen.kind,
        length = chosen.complexity.length,
        turns = chosen.complexity.turns,
        "route selected"
    );

    let mut raw = Vec::with_capacity(chosen.bends.len() + 4);
    raw.push(terminals.source);
    raw.push(terminals.start);
    raw.extend_from_slice(&chosen.bends);
    raw.push(terminals.end);
    raw.push(terminals.target);

    Ok(optimize_path(&raw))
}
