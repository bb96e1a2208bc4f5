use gridmarch_core::{Biome, Coord, Tile, TileMap};

use crate::modifiers::PathModifier;

/// Grid data source for pathfinding — supplies tiles and adjacency.
///
/// The topology is fixed at 8-connectivity: `neighbors` enumerates the
/// surrounding cells in all eight directions, omitting only coordinates the
/// grid cannot address. Passability is *not* filtered here; the search
/// applies modifier-adjusted passability itself.
pub trait TileGrid {
    /// The tile at `c`, or `None` if the grid cannot address `c`.
    fn tile(&self, c: Coord) -> Option<Tile>;

    /// Append the neighbors of `c` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

impl TileGrid for TileMap {
    fn tile(&self, c: Coord) -> Option<Tile> {
        self.get(c)
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        let bounds = self.bounds();
        buf.extend(c.neighbors_8().into_iter().filter(|&n| bounds.contains(n)));
    }
}

impl<G: TileGrid> TileGrid for &G {
    fn tile(&self, c: Coord) -> Option<Tile> {
        (**self).tile(c)
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        (**self).neighbors(c, buf)
    }
}

/// Supplier of per-biome modifiers for one query.
///
/// The search does not care how the set was built (unit perks, scenario
/// rules, ...), only that it answers biome lookups.
pub trait ModifierSource {
    /// The modifier stored for `biome`, if any.
    fn modifier(&self, biome: Biome) -> Option<PathModifier>;

    /// The effective modifier for a tile of `biome`: the biome-specific
    /// entry combined with the [`Biome::Any`] wildcard entry, or the
    /// identity modifier when neither exists.
    fn resolve(&self, biome: Biome) -> PathModifier {
        match (self.modifier(biome), self.modifier(Biome::Any)) {
            (Some(a), Some(b)) => a.combine(b),
            (Some(m), None) | (None, Some(m)) => m,
            (None, None) => PathModifier::default(),
        }
    }
}

impl ModifierSource for crate::modifiers::PathModifierSet {
    fn modifier(&self, biome: Biome) -> Option<PathModifier> {
        self.get(biome).copied()
    }
}

/// The "no modifiers" source: all multipliers 1.0, no reversal.
impl ModifierSource for () {
    fn modifier(&self, _biome: Biome) -> Option<PathModifier> {
        None
    }
}

impl<M: ModifierSource> ModifierSource for &M {
    fn modifier(&self, biome: Biome) -> Option<PathModifier> {
        (**self).modifier(biome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmarch_core::Bounds;

    #[test]
    fn tilemap_neighbors_clip_at_edges() {
        let map = TileMap::new(Bounds::new(0, 0, 3, 3), Tile::default());
        let mut buf = Vec::new();
        map.neighbors(Coord::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 3); // corner
        buf.clear();
        map.neighbors(Coord::new(1, 0), &mut buf);
        assert_eq!(buf.len(), 5); // edge
        buf.clear();
        map.neighbors(Coord::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 8); // interior
    }

    #[test]
    fn unit_source_is_identity() {
        let m = ().resolve(Biome::Forest);
        assert_eq!(m.cost_multiplier, 1.0);
        assert!(!m.reverse_walkable);
    }
}
