use std::collections::BinaryHeap;

use gridmarch_core::Coord;
use log::{debug, trace};

use crate::PathFinder;
use crate::distance::step_distance;
use crate::finder::{Endpoint, NodeRef, Path, PathError};
use crate::traits::{ModifierSource, TileGrid};

impl PathFinder {
    /// Compute the lowest-cost path from `from` to `to`.
    ///
    /// Uniform-cost (Dijkstra) expansion over the grid's 8-connected
    /// topology. For each step onto a neighbor tile:
    ///
    /// - *effective passability* is the tile's `passable` flag XOR the
    ///   combined modifier's `reverse_walkable` flag; only effectively
    ///   passable tiles are entered;
    /// - *effective cost* is `max(1.0, walk_cost) * cost_multiplier *
    ///   step_distance`, so diagonal steps cost `sqrt(2)` times orthogonal
    ///   ones.
    ///
    /// The origin is always seeded, at cost 0, regardless of its own
    /// passability — travel that starts "in place" is legal even on ground
    /// the unit could not enter. A cell rediscovered via a strictly cheaper
    /// route replaces its stored node and is re-opened.
    ///
    /// Returns `Ok(Some(path))` with cells from `from` to `to` inclusive,
    /// `Ok(None)` when `to` is unreachable (a normal outcome, not an
    /// error), or `Err(PathError::OutOfBounds)` when either endpoint lies
    /// outside the finder's bounds.
    ///
    /// Pass `&()` as `mods` for an unmodified query.
    pub fn find_path<G: TileGrid, M: ModifierSource>(
        &mut self,
        grid: &G,
        mods: &M,
        from: Coord,
        to: Coord,
    ) -> Result<Option<Path>, PathError> {
        let start_idx = self.idx(from).ok_or(PathError::OutOfBounds {
            endpoint: Endpoint::Start,
            coord: from,
            bounds: self.bounds,
        })?;
        let goal_idx = self.idx(to).ok_or(PathError::OutOfBounds {
            endpoint: Endpoint::Goal,
            coord: to,
            bounds: self.bounds,
        })?;

        if start_idx == goal_idx {
            return Ok(Some(Path {
                cells: vec![from],
                cost: 0.0,
            }));
        }

        // Bump generation to invalidate all nodes from previous queries.
        self.path_generation = self.path_generation.wrapping_add(1);
        let cur_gen = self.path_generation;

        {
            let node = &mut self.path_nodes[start_idx];
            node.g = 0.0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            g: 0.0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.path_nodes[ci].generation != cur_gen || !self.path_nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.path_nodes[ci].open = false;
            let current_g = self.path_nodes[ci].g;
            let current_coord = self.coord(ci);

            nbuf.clear();
            grid.neighbors(current_coord, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let Some(tile) = grid.tile(nc) else {
                    continue;
                };
                let m = mods.resolve(tile.biome);
                if !(tile.passable ^ m.reverse_walkable) {
                    continue;
                }
                let step = tile.walk_cost.max(1.0)
                    * m.cost_multiplier
                    * step_distance(current_coord, nc);
                let tentative_g = current_g + step;

                let n = &mut self.path_nodes[ni];
                if n.generation == cur_gen {
                    // Replace only on a strictly cheaper route.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    g: tentative_g,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            debug!("no path from {from} to {to}");
            return Ok(None);
        }

        // Reconstruct by walking back-pointers to the origin.
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            cells.push(self.coord(ci));
            ci = self.path_nodes[ci].parent;
        }
        cells.reverse();

        let cost = self.path_nodes[goal_idx].g;
        trace!("path {from} -> {to}: {} cells, cost {cost}", cells.len());
        Ok(Some(Path { cells, cost }))
    }
}
