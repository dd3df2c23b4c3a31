//! Plan extraction: turning a terminal obligation's parent chain into an operator sequence.
use std::rc::Rc;

use pdr_formula::LiteralSet;

use crate::error::{bug, PdrBug};
use crate::obligation::Obligation;
use crate::task::{Operator, OperatorId};

/// Walks the parent chain of `goal_obligation` (which must have priority 0) back to the
/// initial state, then matches a concrete operator for each consecutive pair of states.
///
/// For each transition, the *first* operator (in input order) whose precondition is modelled
/// by the earlier state and whose effect produces the later state exactly is emitted. At
/// least one operator must match every transition; failing that indicates the obligation
/// chain was built inconsistently, which is an internal bug.
pub fn extract_plan(goal_obligation: &Rc<Obligation>, operators: &[Operator]) -> Vec<OperatorId> {
    debug_assert_eq!(goal_obligation.priority, 0);

    let mut states: Vec<LiteralSet> = Vec::new();
    let mut cur = Some(goal_obligation.clone());
    while let Some(ob) = cur {
        states.push(ob.state.clone());
        cur = ob.parent.clone();
    }
    states.reverse();

    let mut plan = Vec::with_capacity(states.len().saturating_sub(1));
    for window in states.windows(2) {
        let (from, to) = (&window[0], &window[1]);
        let matched = operators.iter().enumerate().find(|(_, op)| {
            if !from.models(op.precondition()) {
                return false;
            }
            let mut successor = from.clone();
            successor.apply_cube(op.effect());
            successor == *to
        });

        match matched {
            Some((index, _)) => plan.push(OperatorId(index)),
            None => bug(PdrBug::NoMatchingOperator {
                from: format!("{}", from),
                to: format!("{}", to),
            }),
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdr_formula::{Fact, Kind, Literal, Var};

    fn state(values: &[usize]) -> LiteralSet {
        let mut cube = LiteralSet::new(Kind::Cube);
        for (var_idx, &value) in values.iter().enumerate() {
            for d in 0..2 {
                cube.insert(Literal::new(Var::from_index(var_idx), d, d == value));
            }
        }
        cube
    }

    fn op(pre: &[usize], eff_var: usize, eff_value: usize) -> Operator {
        let preconditions: Vec<Fact> = pre
            .iter()
            .enumerate()
            .map(|(i, &v)| Fact::new(Var::from_index(i), v))
            .collect();
        Operator::new(
            "op",
            preconditions,
            vec![Fact::new(Var::from_index(eff_var), eff_value)],
            |_| 2,
        )
    }

    #[test]
    fn matches_first_operator_and_produces_plan_in_order() {
        let s0 = state(&[0, 0]);
        let s1 = state(&[1, 0]);
        let s2 = state(&[1, 1]);

        let root = Rc::new(Obligation::new(s0, 2, None));
        let mid = Rc::new(Obligation::new(s1, 1, Some(root)));
        let goal = Rc::new(Obligation::new(s2, 0, Some(mid)));

        let a = op(&[0], 0, 1);
        let b = op(&[1], 1, 1);

        let plan = extract_plan(&goal, &[a, b]);
        assert_eq!(plan, vec![OperatorId(0), OperatorId(1)]);
    }
}
