//! Biome-aware pathfinding over tile maps.
//!
//! This crate finds lowest-cost army movement paths on 2D tile grids where
//! each tile carries a walk cost and a passability flag, both of which can
//! be adjusted per [`Biome`](gridmarch_core::Biome) by caller-supplied
//! [`PathModifier`]s (unit perks such as "forests cost half" or "can cross
//! mountains").
//!
//! - **Point-to-point paths** ([`PathFinder::find_path`]) — uniform-cost
//!   (Dijkstra) search returning the full path and its total cost.
//! - **Movement-range maps** ([`PathFinder::reach_map`]) — multi-source
//!   cost maps bounded by a movement budget.
//!
//! All queries go through [`PathFinder`], which owns and reuses internal
//! caches so that repeated queries incur zero allocations after warm-up.
//!
//! # Grid topology
//!
//! The grid is **8-connected**: armies move to the eight surrounding cells,
//! and diagonal steps are charged `sqrt(2)` times the orthogonal step cost
//! through the distance factor in the effective-cost formula.
//!
//! # Collaborator traits
//!
//! | Trait | Supplies |
//! |---|---|
//! | [`TileGrid`] | tile lookup and neighbor enumeration |
//! | [`ModifierSource`] | per-biome cost/passability adjustments |

mod distance;
mod finder;
mod modifiers;
mod neighbors;
mod reach;
mod search;
mod traits;

pub use distance::{chebyshev, manhattan, step_distance};
pub use finder::{Endpoint, Path, PathError, PathFinder, ReachNode, UNREACHABLE};
pub use modifiers::{MIN_COST_MULTIPLIER, PathModifier, PathModifierSet};
pub use neighbors::Neighbors;
pub use traits::{ModifierSource, TileGrid};
