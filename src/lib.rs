//! rea_star
//! ========
//!
//! Rectangle Expansion A* (REA*): a shortest-path search over a 2D grid of
//! traversable / blocked cells. The search expands maximal free rectangles
//! instead of relaxing single cells, generating and relaxing whole rows or
//! columns of boundary cells against one predecessor interval at a time.
//!
//! The entry point is [find_path] / [find_path_unbounded]; everything else
//! is the machinery (intervals, rectangles, cardinals) that the search is
//! built from.

mod cardinal;
mod grid;
mod interval;
mod octile;
mod pathfinding;
mod rect;

pub use self::{cardinal::*, grid::*, interval::*, octile::*, pathfinding::*, rect::*};
