//! The layer stack: an indexed, delta-encoded chain of clause sets `L_0 ⊇ L_1 ⊇ L_2 ⊇ …`.
use pdr_formula::LiteralSet;

/// One entry of the layer chain.
///
/// `delta` holds only the clauses exclusive to this layer. The logical content of layer `i`
/// is the union of `delta(i), delta(i+1), …` through the deepest layer created so far: the
/// chain's child direction runs toward higher indices, so a clause stored once at `i`
/// automatically belongs to every shallower layer `0..i` too, without being copied there.
/// This mirrors the source's parent/child `shared_ptr` chain without the pointer chasing —
/// the chain is always contiguous from 0, so plain index ranges replace pointer walks.
#[derive(Clone, Debug, Default)]
struct LayerEntry {
    delta: Vec<LiteralSet>,
}

/// The layer stack `L_0, L_1, …, L_k`.
#[derive(Clone, Debug, Default)]
pub struct LayerStack {
    entries: Vec<LayerEntry>,
}

impl LayerStack {
    pub fn new() -> LayerStack {
        LayerStack {
            entries: Vec::new(),
        }
    }

    /// Number of layers currently materialised.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff layer `i` has been materialised.
    pub fn has_layer(&self, i: usize) -> bool {
        i < self.entries.len()
    }

    /// Appends a fresh, empty layer. The caller is responsible for seeding it before it is
    /// used by `extend`.
    pub fn push_layer(&mut self) -> usize {
        self.entries.push(LayerEntry::default());
        self.entries.len() - 1
    }

    /// Adds `clause` to layer `i`'s delta, maintaining I4: a clause already present at `i` or
    /// deeper is not duplicated, and any ancestor (`j < i`) that held it is relieved of it —
    /// the claim at `i` is now the strongest one and subsumes the shallower copy.
    pub fn add_set(&mut self, i: usize, clause: LiteralSet) {
        debug_assert!(clause.is_clause());
        if self.entries[i..].iter().any(|e| e.delta.iter().any(|c| c == &clause)) {
            return;
        }
        for entry in &mut self.entries[..i] {
            entry.delta.retain(|c| c != &clause);
        }
        self.entries[i].delta.push(clause);
    }

    /// The clauses unique to layer `i` (its delta), not the full clause set.
    pub fn delta(&self, i: usize) -> &[LiteralSet] {
        &self.entries[i].delta
    }

    /// The full clause set of layer `i`: the union of deltas from `i` through the deepest
    /// layer created so far.
    pub fn clauses_of(&self, i: usize) -> impl Iterator<Item = &LiteralSet> {
        self.entries[i..].iter().flat_map(|entry| entry.delta.iter())
    }

    /// True iff `state` fails some clause of layer `i`, i.e. `¬ state.models(L_i)`.
    pub fn violates(&self, i: usize, state: &LiteralSet) -> bool {
        self.clauses_of(i).any(|c| !state.models(c))
    }

    /// True iff every clause of layer `deeper` occurs somewhere in layer `shallower`'s chain
    /// (checks I1, `L_{deeper} ⊆ L_{shallower}`, for `deeper >= shallower`).
    pub fn is_subset_eq(&self, shallower: usize, deeper: usize) -> bool {
        debug_assert!(deeper >= shallower);
        self.clauses_of(deeper)
            .all(|c| self.clauses_of(shallower).any(|other| other == c))
    }
}
