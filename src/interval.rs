use crate::cardinal::{Axis, Cardinal};
use crate::grid::GridView;
use bevy_math::{ivec2, IVec2};

/// A directed, one-cell-thick line segment on the grid.
///
/// `cardinal` gives the outward direction the interval is facing; `fixed` is
/// its coordinate on `cardinal`'s axis; `lo..=hi` are the inclusive bounds on
/// the other axis. An interval whose cardinal is `North`/`South` has a fixed
/// `y` and spans `x` (a horizontal row); one whose cardinal is `East`/`West`
/// has a fixed `x` and spans `y` (a vertical column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    cardinal: Cardinal,
    fixed: i32,
    lo: i32,
    hi: i32,
}

impl Interval {
    /// Create a new interval. `lo` must be `<= hi`.
    #[inline]
    #[must_use]
    pub fn new(cardinal: Cardinal, fixed: i32, lo: i32, hi: i32) -> Self {
        debug_assert!(lo <= hi, "interval lo must not exceed hi");
        Self {
            cardinal,
            fixed,
            lo,
            hi,
        }
    }

    #[inline]
    #[must_use]
    pub fn cardinal(&self) -> Cardinal {
        self.cardinal
    }

    #[inline]
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.cardinal.axis()
    }

    #[inline]
    #[must_use]
    pub fn fixed(&self) -> i32 {
        self.fixed
    }

    #[inline]
    #[must_use]
    pub fn lo(&self) -> i32 {
        self.lo
    }

    #[inline]
    #[must_use]
    pub fn hi(&self) -> i32 {
        self.hi
    }

    /// The number of cells covered by this interval.
    #[inline]
    #[must_use]
    pub fn length(&self) -> i32 {
        self.hi - self.lo + 1
    }

    /// The `index`-th point along this interval, `0`-based from `lo`.
    #[inline]
    #[must_use]
    pub fn at(&self, index: i32) -> IVec2 {
        debug_assert!(index >= 0 && index < self.length());
        let varying = self.lo + index;
        match self.axis() {
            Axis::Y => ivec2(varying, self.fixed),
            Axis::X => ivec2(self.fixed, varying),
        }
    }

    /// A sub-range of this interval's cells, still inclusive on both ends.
    #[inline]
    #[must_use]
    pub fn subinterval(&self, start: i32, end: i32) -> Self {
        debug_assert!(start >= 0 && end < self.length() && start <= end);
        Self::new(self.cardinal, self.fixed, self.lo + start, self.lo + end)
    }

    /// Whether `p` lies on this interval.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: IVec2) -> bool {
        let (fixed, varying) = match self.axis() {
            Axis::Y => (p.y, p.x),
            Axis::X => (p.x, p.y),
        };
        fixed == self.fixed && self.lo <= varying && varying <= self.hi
    }

    /// The interval one step back along `cardinal`, with the same bounds.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Self {
        Self::new(self.cardinal, self.fixed - self.cardinal.step(), self.lo, self.hi)
    }

    /// Advance this interval one cell further out along `cardinal`.
    #[inline]
    pub fn step(&mut self) {
        self.fixed += self.cardinal.step();
    }

    /// Whether `fixed` lies within the grid's bounds on `axis(cardinal)`.
    #[inline]
    #[must_use]
    pub fn is_valid(&self, grid: &impl GridView) -> bool {
        match self.axis() {
            Axis::Y => self.fixed >= 0 && self.fixed < grid.height(),
            Axis::X => self.fixed >= 0 && self.fixed < grid.width(),
        }
    }

    /// Whether this interval is valid and every one of its cells is
    /// traversable.
    #[inline]
    #[must_use]
    pub fn is_free(&self, grid: &impl GridView) -> bool {
        if !self.is_valid(grid) {
            return false;
        }
        (0..self.length()).all(|i| grid.traversable(self.at(i)))
    }

    /// This interval with `lo..=hi` shrunk to the valid range of the
    /// varying axis.
    #[inline]
    #[must_use]
    pub fn clip(&self, grid: &impl GridView) -> Self {
        let bound = match self.axis() {
            Axis::Y => grid.width(),
            Axis::X => grid.height(),
        };
        Self::new(self.cardinal, self.fixed, self.lo.max(0), self.hi.min(bound - 1))
    }

    /// The ordered list of maximal traversable sub-ranges of this interval,
    /// clipped to the grid first.
    #[must_use]
    pub fn free_subintervals(&self, grid: &impl GridView) -> Vec<Self> {
        let clipped = self.clip(grid);
        let len = clipped.length();
        let mut result = Vec::with_capacity((len / 2).max(0) as usize);

        let mut start = 0;
        while start < len {
            while start < len && !grid.traversable(clipped.at(start)) {
                start += 1;
            }
            if start >= len {
                break;
            }

            let mut end = start;
            while end + 1 < len && grid.traversable(clipped.at(end + 1)) {
                end += 1;
            }

            result.push(clipped.subinterval(start, end));
            start = end + 1;
        }

        result
    }

    /// Iterate over the points this interval covers, in order.
    pub fn points(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.length()).map(move |i| self.at(i))
    }
}
