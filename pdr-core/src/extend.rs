//! The `extend` procedure: symbolic one-step reasoning against a single layer.
use rustc_hash::FxHashSet;

use pdr_formula::{Kind, LiteralSet, LiteralSetCollection};

use crate::error::{bug, PdrBug};
use crate::task::Operator;

/// The result of [`extend`]: either a successor state reachable by one operator, or a reason
/// blocking every operator.
#[derive(Clone, Debug)]
pub enum ExtendOutcome {
    Successor(LiteralSet),
    Reason(LiteralSet),
}

/// Attempts to extend state cube `s` past `layer` (the clause set of `L_{i-1}`) by a single
/// operator application.
///
/// Requires `s` to violate at least one clause of `layer` (the caller only invokes this when
/// an obligation needs extending). `operators` is iterated in task-input order, which is
/// significant: it fixes the tie-break used by Step 3's greedy cover.
pub fn extend(s: &LiteralSet, layer: &[LiteralSet], operators: &[Operator]) -> ExtendOutcome {
    debug_assert!(layer.iter().any(|c| !s.models(c)));

    // Step 1: no-op reason. L^s is every clause s currently fails; its members, inverted into
    // cubes, form the reason that applies when no operator is available at all.
    let l_s: Vec<&LiteralSet> = layer.iter().filter(|c| !s.models(c)).collect();
    let mut r_noop = LiteralSetCollection::new(Kind::Cube);
    for c in &l_s {
        r_noop.insert(c.invert());
    }
    debug_assert!(!r_noop.is_empty());

    let mut reasons: FxHashSet<LiteralSetCollection> = FxHashSet::default();
    reasons.insert(r_noop);

    // Step 2: per-operator analysis, in input order.
    for a in operators {
        let mut pre_sa = LiteralSet::new(Kind::Clause);
        for l in a.precondition().iter() {
            if !s.models(&LiteralSet::unit(l, Kind::Clause)) {
                pre_sa.insert(l);
            }
        }

        let mut t = s.clone();
        t.apply_cube(a.effect());

        let l_t: Vec<&LiteralSet> = layer.iter().filter(|c| !t.models(c)).collect();

        if pre_sa.is_empty() && l_t.is_empty() {
            if !layer.iter().all(|c| t.models(c)) {
                bug(PdrBug::SuccessorDoesNotModelLayer {
                    successor: format!("{}", t),
                });
            }
            return ExtendOutcome::Successor(t);
        }

        if l_s.iter().all(|c| l_t.contains(c)) {
            // a does not help: every clause s already fails, t fails too.
            continue;
        }

        let l_t0: Vec<&LiteralSet> = l_t
            .iter()
            .filter(|c| c.set_intersect_size(&pre_sa) == 0)
            .map(|c| *c)
            .collect();

        let mut r_a = LiteralSetCollection::new(Kind::Cube);
        for l in pre_sa.iter() {
            r_a.insert(LiteralSet::unit(l.invert(), Kind::Cube));
        }
        for c in &l_t0 {
            let mut cube = LiteralSet::new(Kind::Cube);
            for l in c.iter() {
                let inverted = l.invert();
                if !a.effect().contains(inverted) {
                    cube.insert(inverted);
                }
            }
            r_a.insert(cube);
        }
        reasons.insert(r_a);
    }

    // Step 3: greedy minimum-cover combination. Sorted ascending by cardinality so smaller,
    // cheaper reason sets are resolved first; ties keep the hash set's (stable per run)
    // iteration order.
    let mut sorted: Vec<LiteralSetCollection> = reasons.into_iter().collect();
    sorted.sort_by_key(LiteralSetCollection::len);

    let mut r = LiteralSet::new(Kind::Cube);
    for r_a in &sorted {
        let mut chosen: Option<LiteralSet> = None;
        let mut chosen_size = 0;
        for candidate in r_a.iter() {
            let union_size = r.set_union(candidate).len();
            if chosen.is_none() || union_size < chosen_size {
                chosen_size = union_size;
                chosen = Some(candidate.clone());
            }
        }
        if let Some(candidate) = chosen {
            r = r.set_union(&candidate);
        }
    }

    if r.is_empty() || !r.is_subset_eq_of(s) {
        bug(PdrBug::ReasonNotSubsetOfState {
            reason: format!("{}", r),
            state: format!("{}", s),
        });
    }

    ExtendOutcome::Reason(r)
}

// Literal-removal minimisation of the combined reason (dropping literals one at a time and
// rechecking whether the shrunk reason still blocks every operator) is intentionally not
// implemented here. It would tighten the reason but never changes correctness, and is left as
// a known possible improvement rather than built speculatively.

#[cfg(test)]
mod tests {
    use super::*;
    use pdr_formula::{Fact, Literal, Var};

    fn var(i: usize) -> Var {
        Var::from_index(i)
    }

    fn unit_clause(var: Var, value: usize, positive: bool) -> LiteralSet {
        LiteralSet::unit(Literal::new(var, value, positive), Kind::Clause)
    }

    fn state_cube(assignments: &[(Var, usize)], domain_size: usize) -> LiteralSet {
        let mut cube = LiteralSet::new(Kind::Cube);
        for &(v, value) in assignments {
            for d in 0..domain_size {
                cube.insert(Literal::new(v, d, d == value));
            }
        }
        cube
    }

    fn op(name: &str, pre: Vec<(Var, usize)>, eff: Vec<(Var, usize)>, domain_size: usize) -> Operator {
        Operator::new(
            name,
            pre.into_iter().map(|(v, d)| Fact::new(v, d)),
            eff.into_iter().map(|(v, d)| Fact::new(v, d)),
            |_| domain_size,
        )
    }

    #[test]
    fn finds_a_successor_when_one_operator_satisfies_the_layer() {
        let v = var(0);
        let s = state_cube(&[(v, 0)], 2);
        let layer = vec![unit_clause(v, 1, true)];
        let a = op("a", vec![(v, 0)], vec![(v, 1)], 2);

        match extend(&s, &layer, &[a]) {
            ExtendOutcome::Successor(t) => {
                assert!(layer.iter().all(|c| t.models(c)));
            }
            ExtendOutcome::Reason(_) => panic!("expected a successor"),
        }
    }

    #[test]
    fn produces_a_reason_when_no_operator_applies() {
        let v = var(0);
        let s = state_cube(&[(v, 0)], 2);
        let layer = vec![unit_clause(v, 1, true)];

        match extend(&s, &layer, &[]) {
            ExtendOutcome::Reason(r) => {
                assert!(!r.is_empty());
                assert!(r.is_subset_eq_of(&s));
            }
            ExtendOutcome::Successor(_) => panic!("expected a reason"),
        }
    }

    #[test]
    fn reason_has_size_one_when_a_single_literal_blocks_every_operator() {
        let v0 = var(0);
        let v1 = var(1);
        let s = state_cube(&[(v0, 0), (v1, 0)], 2);
        let layer = vec![unit_clause(v1, 1, true)];
        let a = op("a", vec![(v0, 1)], vec![(v1, 1)], 2);
        let b = op("b", vec![(v0, 1)], vec![(v1, 1)], 2);

        match extend(&s, &layer, &[a, b]) {
            ExtendOutcome::Reason(r) => assert_eq!(r.len(), 1),
            ExtendOutcome::Successor(_) => panic!("expected a reason"),
        }
    }
}
