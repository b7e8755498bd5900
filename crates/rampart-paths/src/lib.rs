//! Route planning for tower-defense tile maps.
//!
//! The crate is built around [`TileGrid`], a fixed-size grid of
//! [`PathNode`]s allocated once at level setup and reused for the whole
//! session. Game logic mutates per-tile terrain state as buildings are
//! placed and removed — [`TileGrid::set_passable`],
//! [`TileGrid::set_cost`], [`TileGrid::set_rect_passable`] for whole
//! footprints — and unit movement asks for routes with
//! [`TileGrid::find_path`], which runs an A* search over the grid:
//!
//! ```
//! use rampart_core::{Coord, Rect};
//! use rampart_paths::TileGrid;
//!
//! let mut grid = TileGrid::new(75, 75);
//! // A 3x3 building blocks its footprint.
//! grid.set_rect_passable(Rect::new(10, 10, 13, 13), false);
//!
//! let route = grid.find_path(Coord::new(0, 0), Coord::new(30, 30), true)?;
//! assert!(!route.is_empty()); // empty would mean "no route exists"
//! # Ok::<(), rampart_paths::GridError>(())
//! ```
//!
//! The open set is an [`IndexedHeap`], an array-backed binary min-heap
//! that supports in-place rescoring and interior removal in O(log n) via
//! an id → slot table, so tiles already in the open set can have their
//! priority improved without being popped and re-pushed.
//!
//! Searches are synchronous and single-threaded: `find_path` mutates
//! shared per-tile search state, which `&mut self` makes impossible to
//! race. Terrain writes belong between searches.

mod astar;
mod distance;
mod error;
mod grid;
mod heap;
mod node;

pub use distance::{chebyshev, manhattan};
pub use error::{GridError, Result};
pub use grid::TileGrid;
pub use heap::IndexedHeap;
pub use node::PathNode;
