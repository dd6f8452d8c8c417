use bevy_math::IVec2;
use std::cell::RefCell;

/// A read-only view over a rectangular grid of traversable/blocked cells.
///
/// The solver only ever asks a grid view three things: its dimensions, and
/// whether a given cell is traversable. Implementations are free to back
/// this with anything — a `Vec<bool>`, a closure, a call across a host
/// boundary — as long as the predicate is pure and total over `[0, width) x
/// [0, height)` for the lifetime of a single search.
pub trait GridView {
    /// The grid's width, in cells. Always `> 0`.
    fn width(&self) -> i32;

    /// The grid's height, in cells. Always `> 0`.
    fn height(&self) -> i32;

    /// Whether the given point can be entered by the search. Only ever
    /// called with in-bounds points.
    fn traversable(&self, p: IVec2) -> bool;

    /// Whether `p` lies within `[0, width) x [0, height)`.
    #[inline]
    #[must_use]
    fn in_bounds(&self, p: IVec2) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width() && p.y < self.height()
    }
}

/// A grid view backed directly by an in-memory predicate.
///
/// The closure is expected to be cheap; for a predicate that is expensive to
/// evaluate (for example, one that crosses a host-language boundary), wrap
/// it in a [MemoGrid] instead.
pub struct PredicateGrid<F> {
    width: i32,
    height: i32,
    predicate: F,
}

impl<F> PredicateGrid<F>
where
    F: Fn(IVec2) -> bool,
{
    /// Create a new grid view of the given dimensions backed by `predicate`.
    ///
    /// Panics if `width` or `height` is not positive.
    #[must_use]
    pub fn new(width: i32, height: i32, predicate: F) -> Self {
        assert!(width > 0, "grid width must be positive");
        assert!(height > 0, "grid height must be positive");
        Self {
            width,
            height,
            predicate,
        }
    }
}

impl<F> GridView for PredicateGrid<F>
where
    F: Fn(IVec2) -> bool,
{
    #[inline]
    fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn traversable(&self, p: IVec2) -> bool {
        (self.predicate)(p)
    }
}

/// A transparent memoising wrapper over any [GridView].
///
/// The first time a cell is queried, the result is cached behind a presence
/// mask, so a cached `false` is distinguishable from "not yet queried."
/// Caching has no observable effect on search results — it exists purely to
/// avoid re-evaluating an expensive predicate (for instance, one that
/// crosses a host-language boundary) for the same cell more than once.
pub struct MemoGrid<G> {
    inner: G,
    cache: RefCell<Vec<Option<bool>>>,
    width: i32,
}

impl<G: GridView> MemoGrid<G> {
    /// Wrap `inner` with a lazily-populated cache sized to its dimensions.
    #[must_use]
    pub fn new(inner: G) -> Self {
        let width = inner.width();
        let height = inner.height();
        Self {
            inner,
            cache: RefCell::new(vec![None; (width * height) as usize]),
            width,
        }
    }

    #[inline]
    fn index(&self, p: IVec2) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

impl<G: GridView> GridView for MemoGrid<G> {
    #[inline]
    fn width(&self) -> i32 {
        self.inner.width()
    }

    #[inline]
    fn height(&self) -> i32 {
        self.inner.height()
    }

    #[inline]
    fn traversable(&self, p: IVec2) -> bool {
        let index = self.index(p);
        if let Some(hit) = self.cache.borrow()[index] {
            return hit;
        }
        let result = self.inner.traversable(p);
        self.cache.borrow_mut()[index] = Some(result);
        result
    }
}
