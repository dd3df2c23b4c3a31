//! A set of literal sets, all of the same kind.
use std::collections::hash_set;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use rustc_hash::{FxHashSet, FxHasher};

use crate::set::{Kind, LiteralSet};

/// A hash-set of [`LiteralSet`]s, all sharing one [`Kind`].
///
/// Used both for the clauses of a layer's reason collection (`extend`'s per-operator proto
/// reasons) and for ad hoc "a clause broke" bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct LiteralSetCollection {
    kind: Option<Kind>,
    sets: FxHashSet<LiteralSet>,
}

impl LiteralSetCollection {
    pub fn new(kind: Kind) -> LiteralSetCollection {
        LiteralSetCollection {
            kind: Some(kind),
            sets: FxHashSet::default(),
        }
    }

    /// Creates an empty collection without committing to a kind; the kind is fixed by the
    /// first [`Self::insert`] call. Useful when the collection starts empty and may never
    /// receive any member (e.g. an empty pattern's heuristic seed).
    pub fn empty() -> LiteralSetCollection {
        LiteralSetCollection {
            kind: None,
            sets: FxHashSet::default(),
        }
    }

    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiteralSet> {
        self.sets.iter()
    }

    pub fn contains(&self, set: &LiteralSet) -> bool {
        self.sets.contains(set)
    }

    /// Inserts `set` into the collection. Panics if the collection already has a fixed kind
    /// different from `set`'s.
    pub fn insert(&mut self, set: LiteralSet) -> bool {
        match self.kind {
            Some(kind) => debug_assert_eq!(kind, set.kind()),
            None => self.kind = Some(set.kind()),
        }
        self.sets.insert(set)
    }

    pub fn remove(&mut self, set: &LiteralSet) -> bool {
        self.sets.remove(set)
    }

    /// True iff every set of `self` occurs in `other`.
    pub fn is_subset_eq_of(&self, other: &LiteralSetCollection) -> bool {
        if self.sets.len() > other.sets.len() {
            return false;
        }
        self.sets.iter().all(|s| other.sets.contains(s))
    }

    /// `self ∖ other`.
    pub fn set_minus(&self, other: &LiteralSetCollection) -> LiteralSetCollection {
        let mut result = LiteralSetCollection {
            kind: self.kind,
            sets: FxHashSet::default(),
        };
        for set in &self.sets {
            if !other.sets.contains(set) {
                result.sets.insert(set.clone());
            }
        }
        result
    }
}

impl PartialEq for LiteralSetCollection {
    fn eq(&self, other: &LiteralSetCollection) -> bool {
        self.kind == other.kind && self.sets == other.sets
    }
}

impl Eq for LiteralSetCollection {}

impl Hash for LiteralSetCollection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.sets.len().hash(state);
        let mut mix: u64 = 0;
        for set in &self.sets {
            let mut member_hasher = FxHasher::default();
            set.hash(&mut member_hasher);
            mix ^= member_hasher.finish();
        }
        mix.hash(state);
    }
}

impl FromIterator<LiteralSet> for LiteralSetCollection {
    fn from_iter<I: IntoIterator<Item = LiteralSet>>(iter: I) -> LiteralSetCollection {
        let mut collection = LiteralSetCollection::empty();
        for set in iter {
            collection.insert(set);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a LiteralSetCollection {
    type Item = &'a LiteralSet;
    type IntoIter = hash_set::Iter<'a, LiteralSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
