#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::cardinal::CARDINALS;
use crate::grid::GridView;
use crate::interval::Interval;
use crate::octile::octile;
use crate::rect::Rect;
use bevy_math::IVec2;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Whether a cell's g-value was seeded from rectangle-boundary
/// initialisation ([NodeType::GPoint]), or established through
/// interval-successor relaxation ([NodeType::HPoint]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeType {
    GPoint,
    HPoint,
}

/// Results from [find_path].
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// The path of points from `source` to `target` (or to the best partial
    /// cell, when the search was cut off by `maxlen`). Never empty.
    pub path: Vec<IVec2>,

    /// The summed octile cost of the path.
    pub cost: f64,
}

/// A queue entry representing a boundary interval waiting to be expanded,
/// ordered by the minimum f-value found along it.
struct SearchNode {
    interval: Interval,
    min_point: IVec2,
    minfval: OrderedFloat<f64>,
    seq: u64,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.minfval == other.minfval && self.seq == other.seq
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse the f-value comparison to pop the
        // smallest first, and break ties in favor of earlier insertion.
        match other.minfval.cmp(&self.minfval) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ord => ord,
        }
    }
}

/// Find the shortest octile-distance path from `source` to `target` over
/// `grid`, using Rectangle Expansion A*.
///
/// `maxlen` is a g-value ceiling above which relaxations are ignored; pass
/// `f64::INFINITY` for an unbounded search. When the search is unbounded and
/// no path exists, `None` is returned. When `maxlen` is finite and the
/// target can't be reached within it, the best partial path found — the
/// trajectory to the cell with the smallest heuristic-to-target seen — is
/// returned instead.
///
/// Panics if `source` or `target` is out of `grid`'s bounds, or if `maxlen`
/// is not positive.
#[must_use]
pub fn find_path(
    source: IVec2,
    target: IVec2,
    grid: &impl GridView,
    maxlen: f64,
) -> Option<PathResult> {
    assert!(grid.in_bounds(source), "source out of grid bounds");
    assert!(grid.in_bounds(target), "target out of grid bounds");
    assert!(maxlen > 0.0, "maxlen must be positive");

    ReaStarSolver::new(source, target, grid, maxlen).find_path()
}

/// Convenience wrapper over [find_path] with an unbounded `maxlen`.
#[inline]
#[must_use]
pub fn find_path_unbounded(
    source: IVec2,
    target: IVec2,
    grid: &impl GridView,
) -> Option<PathResult> {
    find_path(source, target, grid, f64::INFINITY)
}

struct ReaStarSolver<'g, G: GridView> {
    grid: &'g G,
    width: i32,
    source: IVec2,
    target: IVec2,
    maxlen: f64,

    gvalue: Vec<f64>,
    node_type: Vec<NodeType>,
    hvalue: Vec<f64>,
    parent: Vec<IVec2>,

    open: BinaryHeap<SearchNode>,
    seq: u64,

    best: IVec2,
    best_hval: f64,
}

impl<'g, G: GridView> ReaStarSolver<'g, G> {
    fn new(source: IVec2, target: IVec2, grid: &'g G, maxlen: f64) -> Self {
        let width = grid.width();
        let size = (width * grid.height()) as usize;

        let mut gvalue = vec![f64::INFINITY; size];
        let source_index = (source.y * width + source.x) as usize;
        gvalue[source_index] = 0.0;

        Self {
            grid,
            width,
            source,
            target,
            maxlen,
            gvalue,
            node_type: vec![NodeType::GPoint; size],
            hvalue: vec![0.0; size],
            parent: vec![source; size],
            open: BinaryHeap::new(),
            seq: 0,
            best: source,
            best_hval: octile(source, target),
        }
    }

    #[inline]
    fn index(&self, p: IVec2) -> usize {
        (p.y * self.width + p.x) as usize
    }

    fn find_path(mut self) -> Option<PathResult> {
        if let Some(path) = self.insert_start() {
            return Some(path);
        }

        while let Some(node) = self.open.pop() {
            if let Some(path) = self.expand(&node) {
                return Some(path);
            }
        }

        if self.maxlen.is_finite() {
            self.target = self.best;
            Some(self.build_path())
        } else {
            None
        }
    }

    fn insert_start(&mut self) -> Option<PathResult> {
        let r0 = Rect::expand_point(self.source, self.grid);
        if r0.contains(self.target) {
            return Some(PathResult {
                path: vec![self.source, self.target],
                cost: octile(self.source, self.target),
            });
        }

        for p in r0.boundaries() {
            let idx = self.index(p);
            self.gvalue[idx] = octile(p, self.source);
            self.node_type[idx] = NodeType::GPoint;
        }

        for cardinal in CARDINALS {
            let interval = r0.extend_neighbor_interval(cardinal);
            if !interval.is_valid(self.grid) {
                continue;
            }
            if let Some(path) = self.successor(&interval) {
                return Some(path);
            }
        }

        None
    }

    fn successor(&mut self, interval: &Interval) -> Option<PathResult> {
        for free in interval.free_subintervals(self.grid) {
            let parent_interval = free.parent();
            let mut updated = false;

            for i in 0..free.length() {
                let p = free.at(i);
                let p_idx = self.index(p);
                let mut g = self.gvalue[p_idx];

                for j in (i - 1)..=(i + 1) {
                    if j < 0 || j >= free.length() {
                        continue;
                    }
                    let pp = parent_interval.at(j);
                    let pp_idx = self.index(pp);
                    let d = octile(p, pp);
                    let candidate = self.gvalue[pp_idx] + d;

                    if candidate < g && candidate < self.maxlen {
                        let h = octile(p, self.target);
                        if h < self.best_hval {
                            self.best = p;
                            self.best_hval = h;
                        }

                        g = candidate;
                        self.parent[p_idx] = pp;
                        self.node_type[p_idx] = NodeType::HPoint;
                        self.gvalue[p_idx] = candidate;
                        self.hvalue[p_idx] = h;
                        updated = true;
                    }
                }
            }

            if free.contains(self.target) {
                return Some(self.build_path());
            }

            if updated {
                let node = self.make_search_node(&free);
                self.open.push(node);
            }
        }

        None
    }

    fn expand(&mut self, node: &SearchNode) -> Option<PathResult> {
        if node.interval.contains(self.target) {
            return Some(self.build_path());
        }

        let rect = Rect::expand_interval(&node.interval, self.grid);
        if rect.contains(self.target) {
            let idx = self.index(self.target);
            self.parent[idx] = node.min_point;
            return Some(self.build_path());
        }

        for wall in rect.walls(node.interval.cardinal()) {
            for p in wall.points() {
                let p_idx = self.index(p);
                for pp in node.interval.points() {
                    let pp_idx = self.index(pp);
                    let d = octile(p, pp);
                    let candidate = self.gvalue[pp_idx] + d;

                    if candidate < self.gvalue[p_idx] && candidate < self.maxlen {
                        let h = octile(p, self.target);
                        if h < self.best_hval {
                            self.best = p;
                            self.best_hval = h;
                        }

                        // G-points stay G-points during this bulk relaxation;
                        // only successor() promotes a cell to an H-point.
                        self.parent[p_idx] = pp;
                        self.gvalue[p_idx] = candidate;
                    }
                }
            }

            let eni = rect.extend_neighbor_interval(wall.cardinal());
            if eni.is_valid(self.grid) {
                if let Some(path) = self.successor(&eni) {
                    return Some(path);
                }
            }
        }

        None
    }

    fn build_path(&self) -> PathResult {
        let mut path = Vec::new();
        let mut current = self.target;
        while current != self.source {
            path.push(current);
            current = self.parent[self.index(current)];
        }
        path.push(self.source);
        path.reverse();

        // Summed over the reconstructed path rather than read from gvalue:
        // the rectangle-engulfment shortcut (§4.7 case 3) assigns
        // parent[target] without ever touching gvalue[target].
        let cost = path.windows(2).map(|w| octile(w[0], w[1])).sum();
        PathResult { path, cost }
    }

    fn make_search_node(&mut self, interval: &Interval) -> SearchNode {
        let mut min_point = interval.at(0);
        let mut minfval = f64::INFINITY;

        for p in interval.points() {
            let idx = self.index(p);
            // hvalue defaults to 0 for untouched G-points; the monotone
            // f-ordering of any H-points present still dominates them.
            let fvalue = self.gvalue[idx] + self.hvalue[idx];
            if fvalue < minfval {
                minfval = fvalue;
                min_point = p;
            }
        }

        self.seq += 1;
        SearchNode {
            interval: *interval,
            min_point,
            minfval: OrderedFloat(minfval),
            seq: self.seq,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::PredicateGrid;
    use crate::octile::SQRT2;
    use bevy_math::ivec2;

    /// REA* paths are sequences of rectangle-corner waypoints, not a cell
    /// for every step; a hop is valid so long as the bounding box it spans
    /// is entirely traversable (it can always be walked diagonally then
    /// straight within that open rectangle).
    fn assert_valid_path(path: &[IVec2], grid: &impl GridView) {
        for w in path.windows(2) {
            let (a, b) = (w[0], w[1]);
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                for y in a.y.min(b.y)..=a.y.max(b.y) {
                    assert!(
                        grid.traversable(ivec2(x, y)),
                        "hop {a:?} -> {b:?} crosses blocked cell ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_open_3x3() {
        let grid = PredicateGrid::new(3, 3, |_| true);
        let result = find_path_unbounded(ivec2(0, 0), ivec2(2, 2), &grid).unwrap();
        assert_eq!(result.path, vec![ivec2(0, 0), ivec2(2, 2)]);
        assert!((result.cost - 2.0 * SQRT2).abs() < 1e-9);
        assert_valid_path(&result.path, &grid);
    }

    #[test]
    fn test_straight_line() {
        let grid = PredicateGrid::new(5, 1, |_| true);
        let result = find_path_unbounded(ivec2(0, 0), ivec2(4, 0), &grid).unwrap();
        assert_eq!(result.path, vec![ivec2(0, 0), ivec2(4, 0)]);
        assert_eq!(result.cost, 4.0);
    }

    #[test]
    fn test_detour_around_wall() {
        let grid = PredicateGrid::new(5, 5, |p| !(p.x == 2 && p.y <= 3));
        let result = find_path_unbounded(ivec2(0, 2), ivec2(4, 2), &grid).unwrap();
        assert_valid_path(&result.path, &grid);
        assert_eq!(*result.path.first().unwrap(), ivec2(0, 2));
        assert_eq!(*result.path.last().unwrap(), ivec2(4, 2));
    }

    #[test]
    fn test_single_gap_column() {
        let grid = PredicateGrid::new(5, 5, |p| p.x != 2 || p.y == 4);
        let result = find_path_unbounded(ivec2(0, 2), ivec2(4, 2), &grid).unwrap();
        assert_valid_path(&result.path, &grid);
        assert!(result.path.iter().any(|p| *p == ivec2(2, 4)));
        // REA*'s bulk wall-to-interval relaxation only connects corresponding
        // indices one row/column apart, so it need not find the Euclidean-
        // optimal diagonal route through the gap; it must still beat the
        // only alternative (looping around through an unblocked row).
        let optimal = octile(ivec2(0, 2), ivec2(2, 4)) + octile(ivec2(2, 4), ivec2(4, 2));
        assert!(result.cost >= optimal - 1e-9);
        assert!(result.cost <= 8.0 * SQRT2 + 1e-9);
    }

    #[test]
    fn test_source_equals_target() {
        let grid = PredicateGrid::new(3, 3, |_| true);
        let result = find_path_unbounded(ivec2(1, 1), ivec2(1, 1), &grid).unwrap();
        assert_eq!(result.path, vec![ivec2(1, 1), ivec2(1, 1)]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_symmetry() {
        let grid = PredicateGrid::new(5, 5, |p| !(p.x == 2 && p.y <= 3));
        let forward = find_path_unbounded(ivec2(0, 2), ivec2(4, 2), &grid).unwrap();
        let backward = find_path_unbounded(ivec2(4, 2), ivec2(0, 2), &grid).unwrap();
        assert!((forward.cost - backward.cost).abs() < 1e-9);
    }

    #[test]
    fn test_unreachable_returns_none() {
        let grid = PredicateGrid::new(5, 5, |p| p.x != 2);
        assert!(find_path_unbounded(ivec2(0, 2), ivec2(4, 2), &grid).is_none());
    }

    #[test]
    fn test_maxlen_returns_partial_path() {
        // A wall keeps the seed rectangle from engulfing the target outright
        // (that shortcut ignores maxlen by design, per the seeding step), so
        // the cap is actually exercised during relaxation.
        let grid = PredicateGrid::new(5, 5, |p| p.x != 2 || p.y == 4);
        let result = find_path(ivec2(0, 0), ivec2(4, 4), &grid, 2.0).unwrap();
        assert!(result.cost <= 2.0 + 1e-9);
        let full = find_path_unbounded(ivec2(0, 0), ivec2(4, 4), &grid).unwrap();
        assert!(result.cost <= full.cost);
    }

    #[test]
    #[should_panic(expected = "maxlen must be positive")]
    fn test_rejects_non_positive_maxlen() {
        let grid = PredicateGrid::new(3, 3, |_| true);
        let _ = find_path(ivec2(0, 0), ivec2(1, 1), &grid, 0.0);
    }

    #[test]
    #[should_panic(expected = "source out of grid bounds")]
    fn test_rejects_out_of_bounds_source() {
        let grid = PredicateGrid::new(3, 3, |_| true);
        let _ = find_path_unbounded(ivec2(9, 9), ivec2(1, 1), &grid);
    }

    #[test]
    fn test_memoised_grid_matches_bare_grid() {
        use crate::grid::MemoGrid;

        let bare = PredicateGrid::new(6, 6, |p| !(p.x == 3 && p.y != 5));
        let memoised = MemoGrid::new(PredicateGrid::new(6, 6, |p| !(p.x == 3 && p.y != 5)));

        let a = find_path_unbounded(ivec2(0, 0), ivec2(5, 5), &bare);
        let b = find_path_unbounded(ivec2(0, 0), ivec2(5, 5), &memoised);
        assert_eq!(a, b);
    }
}
