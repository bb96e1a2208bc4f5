//! Terrain model: [`Biome`], [`Tile`] and the dense [`TileMap`].

use crate::geom::{Bounds, Coord};

/// A terrain category, used to key walk-cost and passability modifiers.
///
/// [`Biome::Any`] is a wildcard that only appears as a modifier key, where
/// it matches every tile; no tile on a map carries it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Biome {
    /// Wildcard modifier key matching every biome.
    Any,
    #[default]
    Plains,
    Forest,
    Hills,
    Swamp,
    Desert,
    Water,
    Mountains,
    Road,
}

/// Per-cell terrain attributes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// Cost to enter the tile. Non-negative; values below 1.0 are charged
    /// as 1.0 during pathfinding.
    pub walk_cost: f32,
    /// Whether the tile can be entered at all.
    pub passable: bool,
    /// Terrain category, used to look up modifiers.
    pub biome: Biome,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            walk_cost: 1.0,
            passable: true,
            biome: Biome::default(),
        }
    }
}

impl Tile {
    /// Create a passable tile with the given cost and biome.
    pub const fn new(walk_cost: f32, biome: Biome) -> Self {
        Self {
            walk_cost,
            passable: true,
            biome,
        }
    }

    /// Create an impassable tile of the given biome.
    pub const fn blocked(biome: Biome) -> Self {
        Self {
            walk_cost: 1.0,
            passable: false,
            biome,
        }
    }
}

/// A dense 2D grid of [`Tile`]s over a [`Bounds`], stored row-major.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    bounds: Bounds,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create a map covering `bounds`, with every cell set to `fill`.
    pub fn new(bounds: Bounds, fill: Tile) -> Self {
        Self {
            bounds,
            tiles: vec![fill; bounds.len()],
        }
    }

    /// The rectangle this map covers.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        let x = (c.x - self.bounds.min.x) as usize;
        let y = (c.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }

    /// The tile at `c`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Tile> {
        self.index(c).map(|i| self.tiles[i])
    }

    /// Replace the tile at `c`. Returns `false` (and changes nothing) if
    /// `c` is out of bounds.
    pub fn set(&mut self, c: Coord, tile: Tile) -> bool {
        match self.index(c) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Set every cell in `rect` (clipped to the map) to `tile`.
    pub fn fill(&mut self, rect: Bounds, tile: Tile) {
        for c in rect.iter() {
            self.set(c, tile);
        }
    }

    /// Visit every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.bounds.iter().map(move |c| {
            (c, self.get(c).unwrap_or_default())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_round_trip() {
        let mut map = TileMap::new(Bounds::new(0, 0, 4, 3), Tile::default());
        let c = Coord::new(2, 1);
        assert!(map.set(c, Tile::new(3.0, Biome::Hills)));
        let t = map.get(c).unwrap();
        assert_eq!(t.biome, Biome::Hills);
        assert_eq!(t.walk_cost, 3.0);
        assert!(t.passable);
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut map = TileMap::new(Bounds::new(0, 0, 2, 2), Tile::default());
        assert_eq!(map.get(Coord::new(5, 5)), None);
        assert_eq!(map.get(Coord::new(-1, 0)), None);
        assert!(!map.set(Coord::new(2, 0), Tile::default()));
    }

    #[test]
    fn fill_clips_to_map() {
        let mut map = TileMap::new(Bounds::new(0, 0, 3, 3), Tile::default());
        map.fill(Bounds::new(1, 1, 10, 10), Tile::blocked(Biome::Water));
        assert!(!map.get(Coord::new(2, 2)).unwrap().passable);
        assert!(map.get(Coord::new(0, 0)).unwrap().passable);
    }

    #[test]
    fn offset_bounds_indexing() {
        let bounds = Bounds::new(5, 5, 8, 8);
        let mut map = TileMap::new(bounds, Tile::default());
        assert!(map.set(Coord::new(5, 7), Tile::new(2.0, Biome::Swamp)));
        assert_eq!(map.get(Coord::new(5, 7)).unwrap().biome, Biome::Swamp);
        assert_eq!(map.get(Coord::new(0, 0)), None);
    }
}
