use std::fmt;

use gridmarch_core::{Bounds, Coord};

/// A computed path: cells from start to goal inclusive, plus the total
/// effective cost of walking it. Owned by the caller; the finder keeps no
/// reference to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub cells: Vec<Coord>,
    pub cost: f32,
}

impl Path {
    /// Number of cells, start and goal included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A cell with an associated accumulated cost, returned from reach-map
/// queries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachNode {
    pub pos: Coord,
    pub cost: f32,
}

/// Sentinel cost meaning "not reached" in reach maps.
pub const UNREACHABLE: f32 = f32::INFINITY;

// ---------------------------------------------------------------------------
// Internal node for the priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by accumulated cost for use in
/// `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: f32,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest g first; ties
        // break on index for a total order.
        other
            .g
            .total_cmp(&self.g)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Which endpoint of a path query was invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// Errors reported by path queries.
///
/// "No path found" is *not* an error; it is the `Ok(None)` outcome of
/// [`PathFinder::find_path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathError {
    /// A query endpoint lies outside the finder's addressable bounds.
    /// No partial result is produced.
    OutOfBounds {
        endpoint: Endpoint,
        coord: Coord,
        bounds: Bounds,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                endpoint,
                coord,
                bounds,
            } => {
                write!(f, "{endpoint} coordinate {coord} outside bounds {bounds}")
            }
        }
    }
}

impl std::error::Error for PathError {}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Central coordinator for path queries on a grid rectangle.
///
/// `PathFinder` owns all internal caches (node array, reach map, result and
/// scratch buffers) so that repeated queries incur no allocations after the
/// first use. Caches are invalidated at the start of every query, so the
/// same instance can be reused across queries without cross-contamination.
///
/// Queries take `&mut self`; a single instance must not be shared across
/// threads. Separate instances are fully independent.
pub struct PathFinder {
    pub(crate) bounds: Bounds,
    pub(crate) width: usize,
    // point-to-point search caches
    pub(crate) path_nodes: Vec<Node>,
    pub(crate) path_generation: u32,
    // reach-map caches
    pub(crate) reach_nodes: Vec<Node>,
    pub(crate) reach_generation: u32,
    pub(crate) reach_map: Vec<f32>,
    pub(crate) reach_results: Vec<ReachNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl PathFinder {
    /// Create a new `PathFinder` for the given grid rectangle.
    pub fn new(bounds: Bounds) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            width: bounds.width().max(0) as usize,
            path_nodes: vec![Node::default(); len],
            path_generation: 0,
            reach_nodes: vec![Node::default(); len],
            reach_generation: 0,
            reach_map: vec![UNREACHABLE; len],
            reach_results: Vec::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying bounds, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, caches are kept and
    /// only generation counters are bumped so stale entries are ignored.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        let new_len = bounds.len();
        let old_capacity = self.path_nodes.len();
        self.bounds = bounds;
        self.width = bounds.width().max(0) as usize;

        if new_len <= old_capacity {
            self.path_generation = self.path_generation.wrapping_add(1);
            self.reach_generation = self.reach_generation.wrapping_add(1);
            self.reach_results.clear();
            return;
        }

        self.path_nodes.clear();
        self.path_nodes.resize(new_len, Node::default());
        self.path_generation = 0;

        self.reach_nodes.clear();
        self.reach_nodes.resize(new_len, Node::default());
        self.reach_generation = 0;
        self.reach_map.clear();
        self.reach_map.resize(new_len, UNREACHABLE);
        self.reach_results.clear();
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        let x = (c.x - self.bounds.min.x) as usize;
        let y = (c.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        let x = (idx % self.width) as i32 + self.bounds.min.x;
        let y = (idx / self.width) as i32 + self.bounds.min.y;
        Coord::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathFinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bounds.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathFinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bounds = Bounds::deserialize(deserializer)?;
        Ok(PathFinder::new(bounds))
    }
}
