//! Per-tile search state.

use rampart_core::Coord;

/// One tile of a [`TileGrid`](crate::TileGrid), combining the externally
/// owned terrain state (`cost`, `passable`) with the transient bookkeeping
/// of the search that is currently running.
///
/// Terrain state is written between searches by building placement and
/// removal; the search only reads it. The transient fields are cleared in
/// bulk by [`TileGrid::reset_search_state`](crate::TileGrid::reset_search_state)
/// before every search, so their values are only meaningful for the most
/// recent one.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    coord: Coord,
    /// Cost of stepping onto this tile. Defaults to 1; larger values model
    /// rough terrain. Constant for the duration of a search.
    pub cost: i32,
    /// Whether a route may pass through this tile. Toggled by building
    /// placement and removal.
    pub passable: bool,

    // Transient search state. `f == g + h` whenever the tile has been
    // relaxed at least once this search.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) g: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) h: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) f: i32,
    /// An open-set entry has existed for this tile during this search.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) visited: bool,
    /// The tile has been expanded and is final for this search.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) closed: bool,
    /// Predecessor on the best known route, by coordinate rather than by
    /// reference: the node's lifetime belongs to the grid, not the search.
    /// `None` for the start tile and for tiles never reached.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) parent: Option<Coord>,
}

impl PathNode {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            cost: 1,
            passable: true,
            g: 0,
            h: 0,
            f: 0,
            visited: false,
            closed: false,
            parent: None,
        }
    }

    /// Grid position of this tile, fixed at grid construction.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Best known cost from the start tile, valid once `visited`.
    #[inline]
    pub fn g(&self) -> i32 {
        self.g
    }

    /// Heuristic estimate to the goal, valid once `visited`.
    #[inline]
    pub fn h(&self) -> i32 {
        self.h
    }

    /// Priority key `g + h`, valid once `visited`.
    #[inline]
    pub fn f(&self) -> i32 {
        self.f
    }

    /// Whether an open-set entry has existed for this tile this search.
    #[inline]
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Whether this tile has been finalized this search.
    #[inline]
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Predecessor coordinate on the best known route, if any.
    #[inline]
    pub fn parent(&self) -> Option<Coord> {
        self.parent
    }

    /// Clear the transient search fields, leaving terrain state intact.
    pub(crate) fn reset(&mut self) {
        self.g = 0;
        self.h = 0;
        self.f = 0;
        self.visited = false;
        self.closed = false;
        self.parent = None;
    }
}
