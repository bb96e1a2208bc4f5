use std::collections::BinaryHeap;

use gridmarch_core::Coord;
use log::trace;

use crate::PathFinder;
use crate::distance::step_distance;
use crate::finder::{NodeRef, ReachNode, UNREACHABLE};
use crate::traits::{ModifierSource, TileGrid};

impl PathFinder {
    /// Compute a multi-source movement-range map.
    ///
    /// Every source starts at cost 0 (and is seeded regardless of its own
    /// passability, like a path origin). Expansion applies the same
    /// effective-passability and effective-cost rules as
    /// [`find_path`](PathFinder::find_path) and stops where the
    /// accumulated cost would exceed `max_cost` — the unit's movement
    /// budget. Returns the reached cells in nondecreasing cost order.
    ///
    /// Sources outside the finder's bounds are skipped, not rejected:
    /// unlike a [`find_path`](PathFinder::find_path) endpoint, a map query
    /// with several sources stays useful when some of them fall off the
    /// map, so the remaining sources are expanded as normal.
    pub fn reach_map<G: TileGrid, M: ModifierSource>(
        &mut self,
        grid: &G,
        mods: &M,
        sources: &[Coord],
        max_cost: f32,
    ) -> &[ReachNode] {
        // The flat cost map is read by `cost_at` after the call, so it is
        // reset eagerly rather than by generation.
        for v in self.reach_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.reach_results.clear();

        self.reach_generation = self.reach_generation.wrapping_add(1);
        let cur_gen = self.reach_generation;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                let n = &mut self.reach_nodes[si];
                n.g = 0.0;
                n.generation = cur_gen;
                n.open = true;
                self.reach_map[si] = 0.0;
                open.push(NodeRef { idx: si, g: 0.0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.reach_nodes[ci];
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            let current_g = cn.g;
            self.reach_nodes[ci].open = false;

            let cc = self.coord(ci);
            self.reach_results.push(ReachNode {
                pos: cc,
                cost: current_g,
            });

            nbuf.clear();
            grid.neighbors(cc, &mut nbuf);

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
                let step =
                    tile.walk_cost.max(1.0) * m.cost_multiplier * step_distance(cc, nc);
                let tentative = current_g + step;
                if tentative > max_cost {
                    continue;
                }

                let n = &mut self.reach_nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.open = true;
                self.reach_map[ni] = tentative;
                open.push(NodeRef {
                    idx: ni,
                    g: tentative,
                });
            }
        }

        self.nbuf = nbuf;
        trace!(
            "reach map: {} sources, budget {max_cost}, {} cells reached",
            sources.len(),
            self.reach_results.len()
        );
        &self.reach_results
    }

    /// Query the accumulated cost at a specific cell.
    ///
    /// Returns [`UNREACHABLE`] if the cell is outside the bounds or was not
    /// reached by the last [`reach_map`](PathFinder::reach_map) call.
    pub fn cost_at(&self, c: Coord) -> f32 {
        match self.idx(c) {
            Some(i) => self.reach_map[i],
            None => UNREACHABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathModifierSet;
    use gridmarch_core::{Biome, Bounds, Tile, TileMap};
    use std::f32::consts::SQRT_2;

    fn open_map(w: i32, h: i32) -> TileMap {
        TileMap::new(Bounds::new(0, 0, w, h), Tile::default())
    }

    #[test]
    fn budget_cuts_off_expansion() {
        let map = open_map(5, 5);
        let mut pf = PathFinder::new(map.bounds());
        let src = Coord::new(2, 2);
        let reached = pf.reach_map(&map, &(), &[src], 1.0);
        // Budget 1.0 covers the source and its four orthogonal neighbors;
        // diagonals cost sqrt2 > 1.
        assert_eq!(reached.len(), 5);
        assert_eq!(pf.cost_at(src), 0.0);
        assert_eq!(pf.cost_at(Coord::new(3, 2)), 1.0);
        assert_eq!(pf.cost_at(Coord::new(3, 3)), UNREACHABLE);
    }

    #[test]
    fn results_in_nondecreasing_cost_order() {
        let map = open_map(4, 4);
        let mut pf = PathFinder::new(map.bounds());
        let reached = pf.reach_map(&map, &(), &[Coord::new(0, 0)], 3.0);
        assert_eq!(reached[0].pos, Coord::new(0, 0));
        for pair in reached.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
        }
    }

    #[test]
    fn multi_source_takes_nearest() {
        let map = open_map(7, 1);
        let mut pf = PathFinder::new(map.bounds());
        let sources = [Coord::new(0, 0), Coord::new(6, 0)];
        pf.reach_map(&map, &(), &sources, 10.0);
        assert_eq!(pf.cost_at(Coord::new(1, 0)), 1.0);
        assert_eq!(pf.cost_at(Coord::new(5, 0)), 1.0);
        assert_eq!(pf.cost_at(Coord::new(3, 0)), 3.0);
    }

    #[test]
    fn out_of_bounds_sources_skipped() {
        let map = open_map(3, 1);
        let mut pf = PathFinder::new(map.bounds());
        let sources = [Coord::new(-4, 0), Coord::new(0, 0), Coord::new(9, 9)];
        let reached = pf.reach_map(&map, &(), &sources, 1.0);
        // Only the in-bounds source expands; the others contribute nothing.
        assert_eq!(reached.len(), 2); // (0,0) and (1,0)
        assert_eq!(pf.cost_at(Coord::new(0, 0)), 0.0);
        assert_eq!(pf.cost_at(Coord::new(1, 0)), 1.0);
    }

    #[test]
    fn impassable_cells_not_reached() {
        let mut map = open_map(3, 1);
        map.set(Coord::new(1, 0), Tile::blocked(Biome::Water));
        let mut pf = PathFinder::new(map.bounds());
        pf.reach_map(&map, &(), &[Coord::new(0, 0)], 10.0);
        assert_eq!(pf.cost_at(Coord::new(1, 0)), UNREACHABLE);
        assert_eq!(pf.cost_at(Coord::new(2, 0)), UNREACHABLE);
    }

    #[test]
    fn modifiers_extend_reach() {
        let mut map = open_map(3, 1);
        map.set(Coord::new(1, 0), Tile::new(4.0, Biome::Swamp));
        map.set(Coord::new(2, 0), Tile::new(4.0, Biome::Swamp));
        let mut pf = PathFinder::new(map.bounds());

        pf.reach_map(&map, &(), &[Coord::new(0, 0)], 5.0);
        assert_eq!(pf.cost_at(Coord::new(2, 0)), UNREACHABLE); // 4 + 4 > 5

        let mut mods = PathModifierSet::new();
        mods.add_cost_multiplier(Biome::Swamp, 0.5);
        pf.reach_map(&map, &mods, &[Coord::new(0, 0)], 5.0);
        assert_eq!(pf.cost_at(Coord::new(2, 0)), 4.0); // 2 + 2
    }

    #[test]
    fn stale_map_overwritten_by_next_query() {
        let map = open_map(4, 1);
        let mut pf = PathFinder::new(map.bounds());
        pf.reach_map(&map, &(), &[Coord::new(0, 0)], 10.0);
        assert_eq!(pf.cost_at(Coord::new(3, 0)), 3.0);
        pf.reach_map(&map, &(), &[Coord::new(0, 0)], 1.0);
        assert_eq!(pf.cost_at(Coord::new(3, 0)), UNREACHABLE);
    }

    #[test]
    fn diagonal_budget_uses_distance_factor() {
        let map = open_map(3, 3);
        let mut pf = PathFinder::new(map.bounds());
        pf.reach_map(&map, &(), &[Coord::new(0, 0)], SQRT_2 + 0.01);
        assert!((pf.cost_at(Coord::new(1, 1)) - SQRT_2).abs() < 1e-4);
        // Two diagonal steps exceed the budget.
        assert_eq!(pf.cost_at(Coord::new(2, 2)), UNREACHABLE);
    }
}
