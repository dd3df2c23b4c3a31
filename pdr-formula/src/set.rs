//! Cubes and clauses: sets of literals with an implicit conjunction or disjunction.
use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashSet, FxHasher};

use crate::lit::Literal;

/// Whether a [`LiteralSet`] is read as a conjunction (cube) or a disjunction (clause).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    /// Implicit conjunction (∧) of its members; typically a state description.
    Cube,
    /// Implicit disjunction (∨) of its members; a constraint forbidding some partial states.
    Clause,
}

impl Kind {
    /// The dual kind, per De Morgan: cube and clause swap under negation.
    #[inline]
    pub fn flip(self) -> Kind {
        match self {
            Kind::Cube => Kind::Clause,
            Kind::Clause => Kind::Cube,
        }
    }
}

/// A set of literals of a single [`Kind`].
///
/// Hashing is order-independent: it xors per-member hashes together with a kind- and
/// size-dependent seed, so two sets with the same members in different insertion order hash
/// identically. This mirrors the technique used for order-independent clause hashing in the
/// surrounding crate lineage's incremental solvers.
#[derive(Clone, Debug)]
pub struct LiteralSet {
    kind: Kind,
    members: FxHashSet<Literal>,
}

impl LiteralSet {
    /// Creates an empty literal set of the given kind.
    pub fn new(kind: Kind) -> LiteralSet {
        LiteralSet {
            kind,
            members: FxHashSet::default(),
        }
    }

    /// Creates a single-literal set of the given kind.
    pub fn unit(lit: Literal, kind: Kind) -> LiteralSet {
        let mut set = LiteralSet::new(kind);
        set.insert(lit);
        set
    }

    /// Creates a literal set from an iterator of literals.
    ///
    /// Panics (for a cube) if two complementary literals are present.
    pub fn from_literals(lits: impl IntoIterator<Item = Literal>, kind: Kind) -> LiteralSet {
        let mut set = LiteralSet::new(kind);
        for lit in lits {
            set.insert(lit);
        }
        set
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_cube(&self) -> bool {
        self.kind == Kind::Cube
    }

    pub fn is_clause(&self) -> bool {
        self.kind == Kind::Clause
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True iff this set has exactly one member.
    pub fn is_unit(&self) -> bool {
        self.members.len() == 1
    }

    pub fn contains(&self, lit: Literal) -> bool {
        self.members.contains(&lit)
    }

    pub fn iter(&self) -> impl Iterator<Item = Literal> + '_ {
        self.members.iter().copied()
    }

    /// Inserts a literal.
    ///
    /// For a cube, inserting a literal whose inverse is already present is a core invariant
    /// violation (a contradictory cube) and panics rather than silently producing an
    /// inconsistent state.
    pub fn insert(&mut self, lit: Literal) -> bool {
        if self.kind == Kind::Cube && self.members.contains(&lit.invert()) {
            panic!(
                "contradictory literal {:?} inserted into cube {:?}",
                lit, self
            );
        }
        self.members.insert(lit)
    }

    pub fn remove(&mut self, lit: Literal) -> bool {
        self.members.remove(&lit)
    }

    /// True iff every literal of `self` occurs in `other`. Both sets must be the same kind.
    pub fn is_subset_eq_of(&self, other: &LiteralSet) -> bool {
        debug_assert_eq!(self.kind, other.kind);
        if self.members.len() > other.members.len() {
            return false;
        }
        self.members.iter().all(|l| other.members.contains(l))
    }

    /// The union of two same-kind sets.
    pub fn set_union(&self, other: &LiteralSet) -> LiteralSet {
        debug_assert_eq!(self.kind, other.kind);
        let mut result = self.clone();
        for &lit in &other.members {
            result.members.insert(lit);
        }
        debug_assert!(self.is_subset_eq_of(&result));
        debug_assert!(other.is_subset_eq_of(&result));
        result
    }

    /// `self ∖ other`. Both sets must be the same kind.
    pub fn set_minus(&self, other: &LiteralSet) -> LiteralSet {
        debug_assert_eq!(self.kind, other.kind);
        let mut result = LiteralSet::new(self.kind);
        for &lit in &self.members {
            if !other.members.contains(&lit) {
                result.members.insert(lit);
            }
        }
        debug_assert!(result.is_subset_eq_of(self));
        result
    }

    /// `|self ∩ other|` without materialising the intersection.
    pub fn set_intersect_size(&self, other: &LiteralSet) -> usize {
        let (smaller, larger) = if self.members.len() <= other.members.len() {
            (&self.members, &other.members)
        } else {
            (&other.members, &self.members)
        };
        smaller.iter().filter(|l| larger.contains(l)).count()
    }

    /// Reinterprets this set under De Morgan duality: the kind flips and every literal is
    /// inverted.
    pub fn invert(&self) -> LiteralSet {
        let mut result = LiteralSet::new(self.kind.flip());
        for &lit in &self.members {
            result.members.insert(lit.invert());
        }
        result
    }

    /// The set of positive forms of every literal, preserving kind.
    pub fn pos(&self) -> LiteralSet {
        let mut result = LiteralSet::new(self.kind);
        for &lit in &self.members {
            result.members.insert(lit.pos());
        }
        result
    }

    /// Removes the opposite polarity of `lit` if present, then adds `lit`.
    ///
    /// Applying a literal this way can never produce a contradiction, so this never panics.
    pub fn apply_literal(&mut self, lit: Literal) {
        self.members.remove(&lit.invert());
        self.members.insert(lit);
    }

    /// Applies every literal of `cube` (which must be a cube) to `self` as an effect
    /// conjunction.
    pub fn apply_cube(&mut self, cube: &LiteralSet) {
        debug_assert_eq!(cube.kind, Kind::Cube);
        for lit in cube.iter() {
            self.apply_literal(lit);
        }
    }

    /// `self ⊧ clause`: self (a cube) contains some literal of `clause`.
    ///
    /// Requires `clause` to be a clause and `self` to be a cube.
    pub fn models_clause(&self, clause: &LiteralSet) -> bool {
        debug_assert!(self.is_cube());
        debug_assert!(clause.is_clause());
        clause.members.iter().any(|l| self.members.contains(l))
    }

    /// `self ⊧ cube`: `cube` is a subset of self.
    ///
    /// Requires `cube` to be a cube and `self` to be a cube.
    pub fn models_cube(&self, cube: &LiteralSet) -> bool {
        debug_assert!(self.is_cube());
        debug_assert!(cube.is_cube());
        cube.is_subset_eq_of(self)
    }

    /// Dispatches to [`Self::models_clause`] or [`Self::models_cube`] depending on the kind of
    /// `other`. Requires `self` to be a cube.
    pub fn models(&self, other: &LiteralSet) -> bool {
        match other.kind {
            Kind::Clause => self.models_clause(other),
            Kind::Cube => self.models_cube(other),
        }
    }
}

impl PartialEq for LiteralSet {
    fn eq(&self, other: &LiteralSet) -> bool {
        self.kind == other.kind && self.members == other.members
    }
}

impl Eq for LiteralSet {}

impl Hash for LiteralSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.members.len().hash(state);
        let mut mix: u64 = 0;
        for lit in &self.members {
            let mut member_hasher = FxHasher::default();
            lit.hash(&mut member_hasher);
            mix ^= member_hasher.finish();
        }
        mix.hash(state);
    }
}

impl fmt::Display for LiteralSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sep = if self.kind == Kind::Cube { " & " } else { " | " };
        write!(f, "{{")?;
        for (i, lit) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", sep)?;
            }
            write!(f, "{:?}", lit)?;
        }
        write!(f, "}}")
    }
}

#[cfg(any(test, feature = "proptest-strategies"))]
#[doc(hidden)]
pub mod strategy {
    use super::*;
    use crate::lit::strategy::literal;
    use proptest::prelude::*;

    /// Generates a cube over `var_count` variables, each either unconstrained or bound to one
    /// of `values` domain values. Always well-formed since each variable contributes at most
    /// one literal.
    pub fn cube(var_count: usize, values: usize) -> impl Strategy<Value = LiteralSet> {
        proptest::collection::vec(proptest::option::of((0..values, bool::ANY)), var_count).prop_map(
            move |entries| {
                let mut set = LiteralSet::new(Kind::Cube);
                for (var_idx, entry) in entries.into_iter().enumerate() {
                    if let Some((value, positive)) = entry {
                        set.insert(crate::lit::Literal::new(
                            crate::lit::Var::from_index(var_idx),
                            value,
                            positive,
                        ));
                    }
                }
                set
            },
        )
    }

    pub fn clause(
        var_index: impl Strategy<Value = usize>,
        value: impl Strategy<Value = usize>,
        size: impl Into<proptest::collection::SizeRange>,
    ) -> impl Strategy<Value = LiteralSet> {
        proptest::collection::vec(literal(var_index, value), size).prop_map(|lits| {
            let mut set = LiteralSet::new(Kind::Clause);
            for lit in lits {
                set.insert(lit);
            }
            set
        })
    }
}
