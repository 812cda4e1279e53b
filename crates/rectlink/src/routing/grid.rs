use crate::geometry::{Point, Rect, border};

use super::optimize::Axis;
use super::types::Terminals;

/// Orthogonal routing grid: every intersection of the candidate x and y
/// lines is a node, and nodes are joined to their four neighbours.
///
/// Lines run through both lead-out points and their midpoint, one margin
/// outside every rectangle side, and through the middle of any gap between
/// the rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl RoutingGrid {
    pub fn build(terminals: &Terminals, rect1: &Rect, rect2: &Rect, margin: f64) -> Self {
        let Terminals { start, end, .. } = *terminals;
        let b1 = border(rect1);
        let b2 = border(rect2);

        let mut xs = vec![
            start.x,
            end.x,
            (start.x + end.x) / 2.0,
            b1.left - margin,
            b1.right + margin,
            b2.left - margin,
            b2.right + margin,
        ];
        xs.extend(gap_midpoint(b1.left, b1.right, b2.left, b2.right));

        let mut ys = vec![
            start.y,
            end.y,
            (start.y + end.y) / 2.0,
            b1.top - margin,
            b1.bottom + margin,
            b2.top - margin,
            b2.bottom + margin,
        ];
        ys.extend(gap_midpoint(b1.top, b1.bottom, b2.top, b2.bottom));

        Self {
            xs: sorted_unique(xs),
            ys: sorted_unique(ys),
        }
    }

    /// Grid indices of `p`, if it sits on a node.
    pub fn index_of(&self, p: Point) -> Option<(usize, usize)> {
        let ix = self.xs.iter().position(|&x| x == p.x)?;
        let iy = self.ys.iter().position(|&y| y == p.y)?;
        Some((ix, iy))
    }

    pub fn point(&self, ix: usize, iy: usize) -> Point {
        Point::new(self.xs[ix], self.ys[iy])
    }

    /// Neighbouring nodes with the axis of the step: +x, -x, +y, -y.
    pub fn neighbors(&self, ix: usize, iy: usize) -> impl Iterator<Item = (usize, usize, Axis)> {
        let (nx, ny) = (self.xs.len(), self.ys.len());
        [
            (ix + 1 < nx).then(|| (ix + 1, iy, Axis::Horizontal)),
            ix.checked_sub(1).map(|x| (x, iy, Axis::Horizontal)),
            (iy + 1 < ny).then(|| (ix, iy + 1, Axis::Vertical)),
            iy.checked_sub(1).map(|y| (ix, y, Axis::Vertical)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Middle of the gap between two intervals, if they do not overlap.
fn gap_midpoint(lo1: f64, hi1: f64, lo2: f64, hi2: f64) -> Option<f64> {
    if hi1 < lo2 {
        Some((hi1 + lo2) / 2.0)
    } else if hi2 < lo1 {
        Some((hi2 + lo1) / 2.0)
    } else {
        None
    }
}

fn sorted_unique(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}
