//! A* search over a [`TileGrid`].

use rampart_core::Coord;

use crate::distance::chebyshev;
use crate::error::Result;
use crate::grid::TileGrid;

impl TileGrid {
    /// Compute the cheapest route from `start` to `goal`.
    ///
    /// The route includes both endpoints, in start→goal order. An empty
    /// route means the goal is unreachable with the current passability —
    /// a normal outcome, not an error; callers typically retry on a later
    /// frame once the map changes. With `diagonal` set, the eight-way
    /// neighborhood is searched and diagonal steps cost the same as
    /// cardinal ones (see [`chebyshev`] for why the heuristic depends on
    /// that).
    ///
    /// Each tile moves through `unvisited -> open -> closed` at most once
    /// per search; an open tile may be rescored several times before it is
    /// closed, and a closed tile is never relaxed again.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`](crate::GridError::OutOfBounds)
    /// if either endpoint lies outside the grid.
    pub fn find_path(&mut self, start: Coord, goal: Coord, diagonal: bool) -> Result<Vec<Coord>> {
        let start_idx = self.idx(start).ok_or_else(|| self.out_of_bounds(start))?;
        let goal_idx = self.idx(goal).ok_or_else(|| self.out_of_bounds(goal))?;

        self.reset_search_state();

        // Close the start tile up front so neighbor expansion never
        // re-opens it.
        self.node_at_mut(start_idx).closed = true;

        let mut open = std::mem::take(&mut self.open);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        open.clear();
        open.push(start_idx, 0);

        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some((ci, _)) = open.pop() else {
                break 'search false;
            };

            if ci == goal_idx {
                break 'search true;
            }

            self.node_at_mut(ci).closed = true;
            expanded += 1;

            let current = self.node_at(ci).coord();
            let current_g = self.node_at(ci).g();

            nbuf.clear();
            self.neighbor_indices(current, diagonal, &mut nbuf);

            for &ni in &nbuf {
                let node = self.node_at_mut(ni);
                if node.closed || !node.passable {
                    continue;
                }

                let g = current_g + node.cost;
                let first_visit = !node.visited;

                if first_visit || g < node.g {
                    let h = chebyshev(node.coord(), goal);
                    node.visited = true;
                    node.parent = Some(current);
                    node.h = h;
                    node.g = g;
                    node.f = g + h;

                    if first_visit {
                        open.push(ni, g + h);
                    } else if !open.rescore(ni, g + h) {
                        // A visited, non-closed tile always has a live
                        // open-set entry.
                        debug_assert!(false, "open tile missing from heap");
                    }
                }
            }
        };

        self.open = open;
        self.nbuf = nbuf;

        if !found {
            log::trace!("no route {start} -> {goal} ({expanded} tiles expanded)");
            return Ok(Vec::new());
        }

        // Walk parent links back from the goal; the start tile has no
        // parent and is appended explicitly.
        let mut route = Vec::new();
        let mut ci = goal_idx;
        while let Some(p) = self.node_at(ci).parent() {
            route.push(self.node_at(ci).coord());
            match self.idx(p) {
                Some(pi) => ci = pi,
                None => break,
            }
        }
        route.push(start);
        route.reverse();

        log::trace!(
            "route {start} -> {goal}: {} tiles ({expanded} expanded)",
            route.len()
        );
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use rampart_core::Rect;

    fn assert_steps_adjacent(route: &[Coord]) {
        for pair in route.windows(2) {
            assert_eq!(
                chebyshev(pair[0], pair[1]),
                1,
                "non-adjacent step {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn straight_line_across_open_grid() {
        let mut grid = TileGrid::new(10, 5);
        let route = grid
            .find_path(Coord::new(0, 0), Coord::new(9, 0), false)
            .unwrap();
        assert_eq!(route.len(), 10);
        assert_eq!(route[0], Coord::new(0, 0));
        assert_eq!(route[9], Coord::new(9, 0));
        assert_steps_adjacent(&route);
    }

    #[test]
    fn start_equals_goal() {
        let mut grid = TileGrid::new(5, 5);
        let c = Coord::new(3, 3);
        assert_eq!(grid.find_path(c, c, false).unwrap(), vec![c]);
    }

    #[test]
    fn blocked_goal_column_is_unreachable() {
        let mut grid = TileGrid::new(8, 8);
        grid.set_rect_passable(Rect::new(7, 0, 8, 8), false);
        let route = grid
            .find_path(Coord::new(0, 0), Coord::new(7, 4), false)
            .unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn diagonal_route_is_shorter_when_it_helps() {
        let mut grid = TileGrid::new(10, 10);
        let start = Coord::new(0, 0);
        let goal = Coord::new(5, 5);

        let diagonal = grid.find_path(start, goal, true).unwrap();
        let cardinal = grid.find_path(start, goal, false).unwrap();

        assert_eq!(diagonal.len(), 6);
        assert_eq!(cardinal.len(), 11);
        assert!(diagonal.len() <= cardinal.len());
        assert_steps_adjacent(&diagonal);
        assert_steps_adjacent(&cardinal);
    }

    #[test]
    fn repeated_searches_are_idempotent() {
        let mut grid = TileGrid::new(12, 12);
        // A wall with a single gap forces a nontrivial route.
        grid.set_rect_passable(Rect::new(4, 0, 5, 10), false);
        let start = Coord::new(0, 2);
        let goal = Coord::new(10, 2);

        let first = grid.find_path(start, goal, false).unwrap();
        let second = grid.find_path(start, goal, false).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn blocking_a_tile_reroutes_or_fails() {
        let mut grid = TileGrid::new(6, 5);
        // Wall at x = 2 with a gap at the bottom row.
        grid.set_rect_passable(Rect::new(2, 0, 3, 4), false);
        let start = Coord::new(0, 0);
        let goal = Coord::new(5, 0);

        let through_gap = grid.find_path(start, goal, false).unwrap();
        assert!(through_gap.contains(&Coord::new(2, 4)));
        assert_steps_adjacent(&through_gap);

        // Plug the gap: the detour disappears and no route remains.
        grid.set_passable(Coord::new(2, 4), false).unwrap();
        assert!(grid.find_path(start, goal, false).unwrap().is_empty());

        // Reopen it: the route comes back, still made of adjacent steps.
        grid.set_passable(Coord::new(2, 4), true).unwrap();
        let rerouted = grid.find_path(start, goal, false).unwrap();
        assert!(!rerouted.is_empty());
        assert_steps_adjacent(&rerouted);
    }

    #[test]
    fn route_tiles_are_passable_and_finalized() {
        let mut grid = TileGrid::new(10, 10);
        grid.set_rect_passable(Rect::new(3, 2, 4, 9), false);
        grid.set_rect_passable(Rect::new(6, 0, 7, 7), false);
        let goal = Coord::new(9, 9);
        let route = grid.find_path(Coord::new(0, 0), goal, true).unwrap();
        assert!(!route.is_empty());

        for &c in &route {
            let node = grid.node(c).unwrap();
            assert!(node.passable, "route crosses blocked tile {c}");
            // The goal is returned the moment it is popped, before being
            // marked closed; every other route tile has been expanded.
            if c != goal {
                assert!(node.closed(), "route tile {c} never finalized");
            }
        }
    }

    #[test]
    fn terrain_cost_diverts_the_route() {
        let mut grid = TileGrid::new(3, 3);
        // Stepping onto the center tile costs more than walking around it.
        grid.set_cost(Coord::new(1, 1), 10).unwrap();
        let route = grid
            .find_path(Coord::new(0, 1), Coord::new(2, 1), false)
            .unwrap();
        assert!(!route.contains(&Coord::new(1, 1)));
        assert_eq!(route.first(), Some(&Coord::new(0, 1)));
        assert_eq!(route.last(), Some(&Coord::new(2, 1)));
        assert_steps_adjacent(&route);
    }

    #[test]
    fn out_of_bounds_endpoints_fail_fast() {
        let mut grid = TileGrid::new(4, 4);
        let bad = Coord::new(-1, 0);
        assert_eq!(
            grid.find_path(bad, Coord::new(3, 3), false),
            Err(GridError::OutOfBounds {
                coord: bad,
                width: 4,
                height: 4,
            })
        );
        assert!(grid.find_path(Coord::new(0, 0), Coord::new(0, 4), true).is_err());
    }

    #[test]
    fn parent_links_form_a_tree_rooted_at_start() {
        let mut grid = TileGrid::new(8, 8);
        grid.set_rect_passable(Rect::new(2, 1, 3, 8), false);
        let start = Coord::new(0, 0);
        let route = grid.find_path(start, Coord::new(7, 7), false).unwrap();
        assert!(!route.is_empty());

        // Every reached tile either is the start or chains back to it.
        for c in grid.bounds() {
            let node = grid.node(c).unwrap();
            if !node.visited() && c != start {
                assert!(node.parent().is_none());
                continue;
            }
            let mut cur = c;
            let mut hops = 0;
            while let Some(p) = grid.node(cur).unwrap().parent() {
                assert_ne!(p, cur, "self-parented tile {cur}");
                cur = p;
                hops += 1;
                assert!(hops <= grid.bounds().len(), "parent cycle at {c}");
            }
            assert_eq!(cur, start);
        }
    }
}
