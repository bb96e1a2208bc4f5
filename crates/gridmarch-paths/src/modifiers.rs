//! Per-biome walk-cost and passability modifiers.
//!
//! A unit's perks are expressed as a [`PathModifierSet`], built fresh for
//! each query from (biome, multiplier) and (biome, reverse-passable)
//! effects. The set has no lifecycle beyond that query.

use std::collections::HashMap;

use gridmarch_core::Biome;

/// Lower floor for combined walk-cost multipliers.
pub const MIN_COST_MULTIPLIER: f32 = 0.1;

/// Cost/passability adjustments for one biome.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathModifier {
    /// Multiplier applied to the tile's walk cost. Stays ≥
    /// [`MIN_COST_MULTIPLIER`] after combination.
    pub cost_multiplier: f32,
    /// When `true`, flips the tile's passability flag.
    pub reverse_walkable: bool,
}

impl Default for PathModifier {
    fn default() -> Self {
        Self {
            cost_multiplier: 1.0,
            reverse_walkable: false,
        }
    }
}

impl PathModifier {
    /// A pure cost modifier. Multipliers below the floor are silently
    /// clamped up, not rejected.
    pub fn cost(multiplier: f32) -> Self {
        Self {
            cost_multiplier: multiplier.max(MIN_COST_MULTIPLIER),
            reverse_walkable: false,
        }
    }

    /// A pure passability-reversal modifier.
    pub fn reverse() -> Self {
        Self {
            cost_multiplier: 1.0,
            reverse_walkable: true,
        }
    }

    /// Combine two modifiers targeting the same biome: the more permissive
    /// (minimum) multiplier, floored at [`MIN_COST_MULTIPLIER`], and the
    /// logical OR of the reverse flags.
    pub fn combine(self, other: Self) -> Self {
        Self {
            cost_multiplier: self
                .cost_multiplier
                .min(other.cost_multiplier)
                .max(MIN_COST_MULTIPLIER),
            reverse_walkable: self.reverse_walkable || other.reverse_walkable,
        }
    }
}

/// A mapping from [`Biome`] to [`PathModifier`].
///
/// An entry keyed on [`Biome::Any`] is a wildcard applied to every tile in
/// addition to its specific-biome entry; the two are merged with
/// [`PathModifier::combine`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathModifierSet {
    by_biome: HashMap<Biome, PathModifier>,
}

impl PathModifierSet {
    /// Create an empty set, equivalent to all multipliers 1.0 and no
    /// passability reversal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a walk-cost multiplier effect for `biome`.
    pub fn add_cost_multiplier(&mut self, biome: Biome, multiplier: f32) -> &mut Self {
        self.insert(biome, PathModifier::cost(multiplier))
    }

    /// Add a passability-reversal effect for `biome`.
    pub fn add_reverse_walkable(&mut self, biome: Biome) -> &mut Self {
        self.insert(biome, PathModifier::reverse())
    }

    /// Insert a modifier, combining with any existing entry for the biome.
    /// A below-floor multiplier is clamped up to [`MIN_COST_MULTIPLIER`]
    /// before storage, so it can never reach a search.
    pub fn insert(&mut self, biome: Biome, modifier: PathModifier) -> &mut Self {
        let modifier = PathModifier {
            cost_multiplier: modifier.cost_multiplier.max(MIN_COST_MULTIPLIER),
            ..modifier
        };
        self.by_biome
            .entry(biome)
            .and_modify(|m| *m = m.combine(modifier))
            .or_insert(modifier);
        self
    }

    /// The stored entry for `biome`, if any. Does not apply the wildcard;
    /// use [`ModifierSource::resolve`](crate::ModifierSource::resolve) for
    /// the effective per-tile modifier.
    pub fn get(&self, biome: Biome) -> Option<&PathModifier> {
        self.by_biome.get(&biome)
    }

    /// Whether the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.by_biome.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModifierSource;

    #[test]
    fn combine_takes_minimum_multiplier() {
        let a = PathModifier::cost(0.5);
        let b = PathModifier::cost(0.8);
        assert_eq!(a.combine(b).cost_multiplier, 0.5);
        assert_eq!(b.combine(a).cost_multiplier, 0.5);
    }

    #[test]
    fn combine_ors_reverse_flag() {
        let a = PathModifier::reverse();
        let b = PathModifier::cost(2.0);
        assert!(a.combine(b).reverse_walkable);
        assert!(b.combine(a).reverse_walkable);
        assert!(!b.combine(b).reverse_walkable);
    }

    #[test]
    fn multiplier_floored() {
        // Below-floor inputs are clamped, not rejected.
        assert_eq!(PathModifier::cost(0.01).cost_multiplier, MIN_COST_MULTIPLIER);
        assert_eq!(PathModifier::cost(-3.0).cost_multiplier, MIN_COST_MULTIPLIER);
        let a = PathModifier::cost(0.1);
        let b = PathModifier::cost(0.1);
        assert_eq!(a.combine(b).cost_multiplier, MIN_COST_MULTIPLIER);
    }

    #[test]
    fn insert_clamps_raw_modifier() {
        // A caller-built modifier bypasses the `cost` constructor; the
        // floor must still hold once stored.
        let mut set = PathModifierSet::new();
        set.insert(
            Biome::Swamp,
            PathModifier {
                cost_multiplier: 0.01,
                reverse_walkable: false,
            },
        );
        assert_eq!(
            set.resolve(Biome::Swamp).cost_multiplier,
            MIN_COST_MULTIPLIER
        );

        let mut negative = PathModifierSet::new();
        negative.insert(
            Biome::Hills,
            PathModifier {
                cost_multiplier: -2.0,
                reverse_walkable: true,
            },
        );
        let m = negative.resolve(Biome::Hills);
        assert_eq!(m.cost_multiplier, MIN_COST_MULTIPLIER);
        assert!(m.reverse_walkable);
    }

    #[test]
    fn duplicate_inserts_combine() {
        let mut set = PathModifierSet::new();
        set.add_cost_multiplier(Biome::Forest, 0.8)
            .add_cost_multiplier(Biome::Forest, 0.5)
            .add_reverse_walkable(Biome::Forest);
        let m = set.get(Biome::Forest).unwrap();
        assert_eq!(m.cost_multiplier, 0.5);
        assert!(m.reverse_walkable);
    }

    #[test]
    fn resolve_merges_wildcard() {
        let mut set = PathModifierSet::new();
        set.add_cost_multiplier(Biome::Any, 0.9)
            .add_cost_multiplier(Biome::Swamp, 0.5);
        // Specific entry combined with the wildcard: min of the two.
        assert_eq!(set.resolve(Biome::Swamp).cost_multiplier, 0.5);
        // Biomes with no specific entry still get the wildcard.
        assert_eq!(set.resolve(Biome::Desert).cost_multiplier, 0.9);
    }

    #[test]
    fn empty_set_resolves_to_identity() {
        let set = PathModifierSet::new();
        let m = set.resolve(Biome::Water);
        assert_eq!(m.cost_multiplier, 1.0);
        assert!(!m.reverse_walkable);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn modifier_round_trip() {
        let m = PathModifier::cost(0.25);
        let json = serde_json::to_string(&m).unwrap();
        let back: PathModifier = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
