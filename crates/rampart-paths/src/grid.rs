//! The [`TileGrid`] — fixed-size owner of all per-tile state.

use rampart_core::{Coord, Rect};

use crate::error::{GridError, Result};
use crate::heap::IndexedHeap;
use crate::node::PathNode;

/// Offsets of the four cardinal neighbors: west, east, north, south.
const CARDINAL: [Coord; 4] = [
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
];

/// Offsets of the four diagonal neighbors: NW, NE, SW, SE.
const DIAGONAL: [Coord; 4] = [
    Coord::new(-1, -1),
    Coord::new(1, -1),
    Coord::new(-1, 1),
    Coord::new(1, 1),
];

/// A fixed-size 2D grid of [`PathNode`]s.
///
/// The grid is allocated once at level setup and lives for the session:
/// searches reset the per-tile transient state rather than reallocating.
/// Terrain state (`passable`, `cost`) is mutated between searches as
/// buildings are placed and removed; see
/// [`set_passable`](TileGrid::set_passable) and
/// [`set_rect_passable`](TileGrid::set_rect_passable).
///
/// A search runs to completion inside [`find_path`](TileGrid::find_path)
/// on the caller's thread; `&mut self` rules out concurrent searches over
/// the same grid, which would race on the shared transient state.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    width: i32,
    height: i32,
    /// Row-major: the node for (x, y) lives at `y * width + x`.
    nodes: Vec<PathNode>,
    /// Neighbor scratch, recycled across searches.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) nbuf: Vec<usize>,
    /// Open-set heap, recycled across searches.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) open: IndexedHeap<i32>,
}

impl TileGrid {
    /// Create a grid with every tile passable at cost 1.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0, "TileGrid width must be positive");
        assert!(height > 0, "TileGrid height must be positive");
        let len = (width as usize) * (height as usize);
        let mut nodes = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                nodes.push(PathNode::new(Coord::new(x, y)));
            }
        }
        Self {
            width,
            height,
            nodes,
            nbuf: Vec::with_capacity(8),
            open: IndexedHeap::with_capacity(len),
        }
    }

    /// Grid width in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The grid's bounding rectangle, `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// Flat index for `c`, or `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.y as usize) * (self.width as usize) + (c.x as usize))
        } else {
            None
        }
    }

    pub(crate) fn node_at(&self, idx: usize) -> &PathNode {
        &self.nodes[idx]
    }

    pub(crate) fn node_at_mut(&mut self, idx: usize) -> &mut PathNode {
        &mut self.nodes[idx]
    }

    pub(crate) fn out_of_bounds(&self, coord: Coord) -> GridError {
        GridError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        }
    }

    /// The node at `c`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `c` is outside the grid.
    pub fn node(&self, c: Coord) -> Result<&PathNode> {
        let i = self.idx(c).ok_or_else(|| self.out_of_bounds(c))?;
        Ok(&self.nodes[i])
    }

    /// Mutable access to the node at `c`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `c` is outside the grid.
    pub fn node_mut(&mut self, c: Coord) -> Result<&mut PathNode> {
        let i = self.idx(c).ok_or_else(|| self.out_of_bounds(c))?;
        Ok(&mut self.nodes[i])
    }

    /// Set whether the tile at `c` may be routed through.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `c` is outside the grid.
    pub fn set_passable(&mut self, c: Coord, passable: bool) -> Result<()> {
        self.node_mut(c)?.passable = passable;
        Ok(())
    }

    /// Set the cost of stepping onto the tile at `c`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `c` is outside the grid.
    pub fn set_cost(&mut self, c: Coord, cost: i32) -> Result<()> {
        self.node_mut(c)?.cost = cost;
        Ok(())
    }

    /// Set passability for every tile in `rect`, clipped to the grid.
    ///
    /// This is the building-footprint operation: placing a blocking
    /// building marks its footprint impassable, removing it marks the
    /// footprint passable again. Parts of the rectangle outside the grid
    /// are ignored.
    pub fn set_rect_passable(&mut self, rect: Rect, passable: bool) {
        for c in rect.intersect(self.bounds()) {
            if let Some(i) = self.idx(c) {
                self.nodes[i].passable = passable;
            }
        }
    }

    /// Enumerate the in-grid neighbors of `c`: the four cardinal tiles,
    /// plus the four diagonal tiles when `diagonal` is set.
    ///
    /// Candidates outside the grid are silently omitted; an out-of-bounds
    /// `c` itself simply has fewer (or zero) neighbors. This boundary
    /// policy is intentional and distinct from the indexed-access
    /// contract of [`node`](TileGrid::node).
    pub fn neighbors(&self, c: Coord, diagonal: bool) -> Vec<Coord> {
        let mut buf = Vec::with_capacity(8);
        self.neighbor_indices(c, diagonal, &mut buf);
        buf.into_iter().map(|i| self.nodes[i].coord()).collect()
    }

    /// Append the flat indices of `c`'s in-grid neighbors to `buf`.
    pub(crate) fn neighbor_indices(&self, c: Coord, diagonal: bool, buf: &mut Vec<usize>) {
        for d in CARDINAL {
            if let Some(i) = self.idx(c + d) {
                buf.push(i);
            }
        }
        if diagonal {
            for d in DIAGONAL {
                if let Some(i) = self.idx(c + d) {
                    buf.push(i);
                }
            }
        }
    }

    /// Clear every tile's transient search state.
    ///
    /// Runs in O(width * height); called at the start of every search so
    /// that state from the previous search never leaks into the next.
    pub fn reset_search_state(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }
}
