use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use rayon::prelude::*;
use tracing::{debug, trace};

use super::grid::RoutingGrid;
use super::obstacles::Obstacles;
use super::optimize::Axis;
use super::types::{Candidate, RouteComplexity, RouteKind, Terminals};

/// Pick the cheapest candidate whose chain clears both obstacles.
///
/// Collision checks run in parallel via rayon; selection is sequential so
/// that equal `(length, turns)` scores resolve to the earliest candidate.
pub fn find_best_route(
    candidates: Vec<Candidate>,
    obstacles: &Obstacles,
    terminals: &Terminals,
) -> Option<Candidate> {
    let clear: Vec<bool> = candidates
        .par_iter()
        .map(|c| !obstacles.blocks_chain(&c.chain(terminals)))
        .collect();

    let mut best: Option<Candidate> = None;
    for (candidate, is_clear) in candidates.into_iter().zip(clear) {
        if !is_clear {
            debug!(kind = %candidate.kind, "candidate rejected: collides with a rectangle");
            continue;
        }
        trace!(
            kind = %candidate.kind,
            length = candidate.complexity.length,
            turns = candidate.complexity.turns,
            "candidate clear"
        );
        best = Some(match best {
            Some(current) if current.complexity <= candidate.complexity => current,
            _ => candidate,
        });
    }

    best
}

/// Search state: a grid node and the axis it was entered along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct StateKey {
    ix: usize,
    iy: usize,
    axis: Axis,
}

/// Priority queue entry. BinaryHeap is a max-heap, so ordering is reversed.
#[derive(Debug)]
struct PqEntry {
    cost: RouteComplexity,
    key: StateKey,
}

impl PartialEq for PqEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PqEntry {}

impl Ord for PqEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.key.cmp(&self.key))
    }
}

impl PartialOrd for PqEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cheapest `(length, turns)` path from `start` to `end` over the grid.
///
/// Turns are charged against the lead-out stubs at both ends, matching the
/// scoring of the fixed candidates. Returns `None` when either lead-out point
/// lies inside a grown rectangle or the grid offers no clear path.
pub fn search_grid(
    grid: &RoutingGrid,
    obstacles: &Obstacles,
    terminals: &Terminals,
) -> Option<Candidate> {
    if obstacles.contains(terminals.start) || obstacles.contains(terminals.end) {
        return None;
    }
    let (sx, sy) = grid.index_of(terminals.start)?;
    let goal = grid.index_of(terminals.end)?;
    let end_axis = Axis::of(terminals.end, terminals.target);

    let start_key = StateKey {
        ix: sx,
        iy: sy,
        axis: Axis::of(terminals.source, terminals.start),
    };
    let zero = RouteComplexity {
        length: 0.0,
        turns: 0,
    };

    let mut open = BinaryHeap::new();
    let mut best_cost: HashMap<StateKey, RouteComplexity> = HashMap::new();
    let mut came_from: HashMap<StateKey, StateKey> = HashMap::new();
    let mut arrival: Option<(RouteComplexity, StateKey)> = None;

    best_cost.insert(start_key, zero);
    open.push(PqEntry {
        cost: zero,
        key: start_key,
    });

    while let Some(PqEntry { cost, key }) = open.pop() {
        // Stale entry.
        if best_cost.get(&key) != Some(&cost) {
            continue;
        }

        if (key.ix, key.iy) == goal {
            let total = RouteComplexity {
                length: cost.length,
                turns: cost.turns + u32::from(key.axis != end_axis),
            };
            if arrival.is_none_or(|(best, _)| total < best) {
                arrival = Some((total, key));
            }
            continue;
        }

        let from = grid.point(key.ix, key.iy);
        for (ix, iy, axis) in grid.neighbors(key.ix, key.iy) {
            let to = grid.point(ix, iy);
            if obstacles.contains(to) || !obstacles.clears_step(from, to) {
                continue;
            }

            let next = RouteComplexity {
                length: cost.length + (to.x - from.x).abs() + (to.y - from.y).abs(),
                turns: cost.turns + u32::from(axis != key.axis),
            };
            let next_key = StateKey { ix, iy, axis };
            if best_cost.get(&next_key).is_some_and(|&known| next >= known) {
                continue;
            }

            best_cost.insert(next_key, next);
            came_from.insert(next_key, key);
            open.push(PqEntry {
                cost: next,
                key: next_key,
            });
        }
    }

    let (total, mut key) = arrival?;
    let mut nodes = vec![grid.point(key.ix, key.iy)];
    while let Some(&prev) = came_from.get(&key) {
        nodes.push(grid.point(prev.ix, prev.iy));
        key = prev;
    }
    nodes.reverse();
    trace!(
        length = total.length,
        turns = total.turns,
        nodes = nodes.len(),
        "grid route found"
    );

    let bends = if nodes.len() > 2 {
        nodes[1..nodes.len() - 1].to_vec()
    } else {
        Vec::new()
    };
    Some(Candidate::new(RouteKind::Grid, terminals, bends))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect, Size};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn obstacles() -> Obstacles {
        Obstacles::new(
            &Rect::new(p(100.0, 100.0), Size::new(50.0, 50.0)),
            &Rect::new(p(300.0, 100.0), Size::new(50.0, 50.0)),
            5.0,
        )
    }

    fn terminals(start: Point, end: Point) -> Terminals {
        Terminals {
            source: start,
            start,
            end,
            target: end,
        }
    }

    #[test]
    fn lower_score_wins_and_ties_keep_earliest() {
        let t = terminals(p(135.0, 100.0), p(265.0, 160.0));
        let one_turn = Candidate::new(RouteKind::VerticalFirst, &t, vec![p(135.0, 160.0)]);
        let two_turns = Candidate::new(
            RouteKind::ChannelX,
            &t,
            vec![p(200.0, 100.0), p(200.0, 160.0)],
        );
        // Same length (190); fewer turns wins regardless of order.
        let best = find_best_route(vec![two_turns, one_turn.clone()], &obstacles(), &t).unwrap();
        assert_eq!(best.kind, RouteKind::VerticalFirst);

        let twin = Candidate {
            kind: RouteKind::HorizontalFirst,
            ..one_turn.clone()
        };
        let best = find_best_route(vec![one_turn, twin], &obstacles(), &t).unwrap();
        assert_eq!(best.kind, RouteKind::VerticalFirst);
    }

    #[test]
    fn blocked_candidates_are_skipped() {
        let t = terminals(p(65.0, 100.0), p(335.0, 100.0));
        let cands = vec![
            Candidate::new(RouteKind::VerticalFirst, &t, vec![p(65.0, 100.0)]),
            Candidate::new(
                RouteKind::ChannelY,
                &t,
                vec![p(65.0, 50.0), p(335.0, 50.0)],
            ),
        ];
        let best = find_best_route(cands, &obstacles(), &t).unwrap();
        assert_eq!(best.kind, RouteKind::ChannelY);
    }

    #[test]
    fn all_blocked_yields_none() {
        let t = terminals(p(65.0, 100.0), p(335.0, 100.0));
        let cands = vec![Candidate::new(
            RouteKind::VerticalFirst,
            &t,
            vec![p(65.0, 100.0)],
        )];
        assert!(find_best_route(cands, &obstacles(), &t).is_none());
    }

    fn gap_scene() -> (Rect, Rect, Terminals) {
        // Leaves the bottom of the wide rectangle, enters the top of the tall one.
        let r1 = Rect::new(p(225.0, 157.0), Size::new(85.0, 44.0));
        let r2 = Rect::new(p(306.0, 209.0), Size::new(15.0, 101.0));
        let t = Terminals {
            source: p(235.625, 179.0),
            start: p(235.625, 189.0),
            end: p(306.0, 148.5),
            target: p(306.0, 158.5),
        };
        (r1, r2, t)
    }

    #[test]
    fn grid_search_finds_clear_route() {
        let (r1, r2, t) = gap_scene();
        let obstacles = Obstacles::new(&r1, &r2, 5.0);
        let grid = RoutingGrid::build(&t, &r1, &r2, 10.0);
        let route = search_grid(&grid, &obstacles, &t).unwrap();
        assert_eq!(route.kind, RouteKind::Grid);
        assert!(!obstacles.blocks_chain(&route.chain(&t)));
        assert_eq!(route.complexity.length, 110.875);
        assert_eq!(route.complexity.turns, 4);
        assert_eq!(route.bends.last(), Some(&p(288.5, 148.5)));
    }

    #[test]
    fn grid_search_gives_up_when_lead_out_is_boxed_in() {
        let r1 = Rect::new(p(100.0, 100.0), Size::new(50.0, 50.0));
        let r2 = Rect::new(p(156.0, 100.0), Size::new(50.0, 50.0));
        let t = terminals(p(135.0, 100.0), p(121.0, 100.0));
        let obstacles = Obstacles::new(&r1, &r2, 5.0);
        let grid = RoutingGrid::build(&t, &r1, &r2, 10.0);
        assert!(search_grid(&grid, &obstacles, &t).is_none());
    }
}
