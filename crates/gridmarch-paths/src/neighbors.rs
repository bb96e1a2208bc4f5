use gridmarch_core::Coord;

/// Cached neighbor computation helper for custom [`TileGrid`](crate::TileGrid)
/// implementors.
///
/// Provides methods for enumerating cardinal (4-way) or all (8-way)
/// neighbors of a cell, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `c`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return 8-directional neighbors of `c`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in c.neighbors_8() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_filters() {
        let mut nb = Neighbors::new();
        let c = Coord::new(0, 0);
        assert_eq!(nb.all(c, |_| true).len(), 8);
        assert_eq!(nb.cardinal(c, |_| true).len(), 4);
        let kept = nb.all(c, |n| n.x >= 0 && n.y >= 0);
        assert_eq!(kept.len(), 3);
    }
}
