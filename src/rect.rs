use crate::cardinal::Cardinal;
use crate::grid::GridView;
use crate::interval::Interval;
use bevy_math::{ivec2, IVec2};

/// An axis-aligned rectangle of grid cells, given by inclusive `left..=right`
/// and `top..=bottom` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    /// Create a new rectangle from its inclusive edges.
    #[inline]
    #[must_use]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        debug_assert!(left <= right && top <= bottom);
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The bounding rectangle of a single interval: a thin strip one cell
    /// thick along the interval's fixed axis.
    #[must_use]
    pub fn from_interval(interval: &Interval) -> Self {
        match interval.axis() {
            crate::cardinal::Axis::X => Self::new(
                interval.fixed(),
                interval.lo(),
                interval.fixed(),
                interval.hi(),
            ),
            crate::cardinal::Axis::Y => Self::new(
                interval.lo(),
                interval.fixed(),
                interval.hi(),
                interval.fixed(),
            ),
        }
    }

    #[inline]
    #[must_use]
    pub fn left(&self) -> i32 {
        self.left
    }

    #[inline]
    #[must_use]
    pub fn top(&self) -> i32 {
        self.top
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> i32 {
        self.right
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Whether `p` lies within this rectangle's inclusive bounds.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: IVec2) -> bool {
        self.left <= p.x && p.x <= self.right && self.top <= p.y && p.y <= self.bottom
    }

    /// The union of this rectangle and `other`.
    #[inline]
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// The bounding rectangle spanning the two given intervals.
    #[must_use]
    pub fn between(a: &Interval, b: &Interval) -> Self {
        Self::from_interval(a).merge(&Self::from_interval(b))
    }

    /// The maximal axis-aligned rectangle of traversable cells containing
    /// `p`, grown greedily: first horizontally, then vertically.
    #[must_use]
    pub fn expand_point(p: IVec2, grid: &impl GridView) -> Self {
        let (mut l, mut t) = (p.x, p.y);
        let mut r = l;
        let mut b = t;

        while r < grid.width() && grid.traversable(ivec2(r, t)) {
            r += 1;
        }
        r -= 1;

        while l >= 0 && grid.traversable(ivec2(l, t)) {
            l -= 1;
        }
        l += 1;

        loop {
            if b >= grid.height() || !(l..=r).all(|x| grid.traversable(ivec2(x, b))) {
                break;
            }
            b += 1;
        }
        b -= 1;

        loop {
            if t < 0 || t >= grid.height() || !(l..=r).all(|x| grid.traversable(ivec2(x, t))) {
                break;
            }
            t -= 1;
        }
        t += 1;

        Self::new(l, t, r, b)
    }

    /// The bounding rectangle of `interval` and the farthest copy of it,
    /// stepped outward along its cardinal, that remains entirely
    /// traversable. If `interval` itself is not free, the result collapses
    /// to `interval`'s own bounding rectangle.
    #[must_use]
    pub fn expand_interval(interval: &Interval, grid: &impl GridView) -> Self {
        let mut expanded = *interval;
        let mut probe = *interval;
        while probe.is_free(grid) {
            expanded = probe;
            probe.step();
        }
        Self::between(interval, &expanded)
    }

    /// The perimeter cells of this rectangle: the top and bottom rows, then
    /// the left and right columns excluding the corners already listed.
    #[must_use]
    pub fn boundaries(&self) -> Vec<IVec2> {
        let mut points = Vec::with_capacity(((self.width() + self.height()) * 2) as usize);

        for x in self.left..=self.right {
            points.push(ivec2(x, self.top));
            points.push(ivec2(x, self.bottom));
        }
        for y in (self.top + 1)..self.bottom {
            points.push(ivec2(self.left, y));
            points.push(ivec2(self.right, y));
        }

        points
    }

    #[inline]
    #[must_use]
    pub fn north(&self) -> Interval {
        Interval::new(Cardinal::North, self.top, self.left, self.right)
    }

    #[inline]
    #[must_use]
    pub fn south(&self) -> Interval {
        Interval::new(Cardinal::South, self.bottom, self.left, self.right)
    }

    #[inline]
    #[must_use]
    pub fn east(&self) -> Interval {
        Interval::new(Cardinal::East, self.right, self.top, self.bottom)
    }

    #[inline]
    #[must_use]
    pub fn west(&self) -> Interval {
        Interval::new(Cardinal::West, self.left, self.top, self.bottom)
    }

    /// The three outgoing walls of this rectangle when arrival came from
    /// `cardinal` — every edge except the one arrival came through.
    #[must_use]
    pub fn walls(&self, cardinal: Cardinal) -> [Interval; 3] {
        match cardinal {
            Cardinal::North => [self.east(), self.west(), self.south()],
            Cardinal::South => [self.east(), self.west(), self.north()],
            Cardinal::East => [self.north(), self.south(), self.west()],
            Cardinal::West => [self.north(), self.south(), self.east()],
        }
    }

    /// The interval one step outside this rectangle's edge in direction
    /// `cardinal`, extended by one cell at each end to catch diagonals.
    #[must_use]
    pub fn extend_neighbor_interval(&self, cardinal: Cardinal) -> Interval {
        match cardinal {
            Cardinal::North => {
                Interval::new(cardinal, self.top - 1, self.left - 1, self.right + 1)
            }
            Cardinal::South => {
                Interval::new(cardinal, self.bottom + 1, self.left - 1, self.right + 1)
            }
            Cardinal::East => {
                Interval::new(cardinal, self.right + 1, self.top - 1, self.bottom + 1)
            }
            Cardinal::West => {
                Interval::new(cardinal, self.left - 1, self.top - 1, self.bottom + 1)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::PredicateGrid;

    #[test]
    fn test_contains() {
        let rect = Rect::new(1, 1, 3, 3);
        assert!(!rect.contains(ivec2(0, 0)));
        assert!(rect.contains(ivec2(1, 1)));
        assert!(rect.contains(ivec2(3, 3)));
        assert!(!rect.contains(ivec2(4, 4)));
    }

    #[test]
    fn test_expand_point_all_free() {
        let grid = PredicateGrid::new(5, 5, |_| true);
        let rect = Rect::expand_point(ivec2(2, 2), &grid);
        assert_eq!(rect, Rect::new(0, 0, 4, 4));
    }

    #[test]
    fn test_expand_point_idempotent() {
        let grid = PredicateGrid::new(6, 6, |p| p.x != 3);
        let rect = Rect::expand_point(ivec2(1, 1), &grid);
        for x in rect.left()..=rect.right() {
            for y in rect.top()..=rect.bottom() {
                assert_eq!(Rect::expand_point(ivec2(x, y), &grid), rect);
            }
        }
    }

    #[test]
    fn test_expand_point_bounded_by_obstacle() {
        let grid = PredicateGrid::new(5, 5, |p| p.x != 3);
        let rect = Rect::expand_point(ivec2(0, 0), &grid);
        assert_eq!(rect, Rect::new(0, 0, 2, 4));
    }

    #[test]
    fn test_boundaries() {
        let rect = Rect::new(0, 0, 2, 2);
        let mut boundaries = rect.boundaries();
        boundaries.sort_by_key(|p| (p.x, p.y));
        let mut expected: Vec<IVec2> = vec![
            ivec2(0, 0),
            ivec2(0, 1),
            ivec2(0, 2),
            ivec2(1, 0),
            ivec2(1, 2),
            ivec2(2, 0),
            ivec2(2, 1),
            ivec2(2, 2),
        ];
        expected.sort_by_key(|p| (p.x, p.y));
        assert_eq!(boundaries, expected);
    }

    #[test]
    fn test_walls_order() {
        let rect = Rect::new(0, 0, 2, 2);
        let w = rect.walls(Cardinal::North);
        assert_eq!(w[0].cardinal(), Cardinal::East);
        assert_eq!(w[1].cardinal(), Cardinal::West);
        assert_eq!(w[2].cardinal(), Cardinal::South);
    }

    #[test]
    fn test_extend_neighbor_interval_north() {
        let rect = Rect::new(1, 1, 3, 3);
        let eni = rect.extend_neighbor_interval(Cardinal::North);
        assert_eq!(eni.fixed(), 0);
        assert_eq!((eni.lo(), eni.hi()), (0, 4));
    }
}
