//! The PDR search driver: path construction and clause propagation.
use std::rc::Rc;

use pdr_formula::{Kind, LiteralSet};

use crate::config::PdrConfig;
use crate::error::{bug, PdrBug};
use crate::extend::{extend, ExtendOutcome};
use crate::heuristic::HeuristicOracle;
use crate::layer::LayerStack;
use crate::obligation::{Obligation, ObligationQueue};
use crate::plan::extract_plan;
use crate::task::{OperatorId, Task};

/// The outcome of one [`Pdr::step`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A plan was found; the operators are listed in execution order.
    Solved(Vec<OperatorId>),
    /// A fixpoint was reached: the goal is unreachable.
    Failed,
    /// Neither termination condition fired; call `step()` again.
    InProgress,
}

/// Drives the layer stack and obligation queue through successive outer iterations.
pub struct Pdr<T: Task, H: HeuristicOracle> {
    task: T,
    heuristic: H,
    layers: LayerStack,
    iteration: usize,
    config: PdrConfig,
}

impl<T: Task, H: HeuristicOracle> Pdr<T, H> {
    pub fn new(task: T, heuristic: H, config: PdrConfig) -> Pdr<T, H> {
        Pdr {
            task,
            heuristic,
            layers: LayerStack::new(),
            iteration: 0,
            config,
        }
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    /// The outer iteration a subsequent `step()` call will produce.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    fn initial_models_goal(&self) -> bool {
        self.task
            .goal_facts()
            .iter()
            .all(|fact| self.task.initial_state().contains(fact.literal()))
    }

    /// Materialises layers `0..=i`, seeding each newly created layer with goal unit clauses
    /// (layer 0 only) and heuristic seed clauses (every layer, seeded into the layer itself —
    /// not its parent, see the resolved seeding-target question).
    fn ensure_layer(&mut self, i: usize) {
        while self.layers.len() <= i {
            let idx = self.layers.push_layer();

            if idx == 0 {
                for fact in self.task.goal_facts() {
                    self.layers
                        .add_set(0, LiteralSet::unit(fact.literal(), Kind::Clause));
                }
            }

            for clause in self.heuristic.seed_layer(idx, &self.task) {
                for lit in clause.iter() {
                    if !lit.is_positive() {
                        bug(PdrBug::HeuristicMisuse {
                            layer: idx,
                            literal: format!("{:?}", lit),
                        });
                    }
                }
                self.layers.add_set(idx, clause);
            }

            log::debug!(
                "created layer {} (delta size {})",
                idx,
                self.layers.delta(idx).len()
            );
        }
    }

    /// Performs one outer PDR iteration: path construction followed by clause propagation.
    pub fn step(&mut self) -> Outcome {
        if self.initial_models_goal() {
            log::info!("initial state already satisfies the goal, returning the empty plan");
            return Outcome::Solved(Vec::new());
        }

        for i in 0..self.layers.len().saturating_sub(1) {
            debug_assert!(self.layers.is_subset_eq(i, i + 1));
        }

        let k = self.iteration;
        self.iteration += 1;
        log::debug!("step {} of pdr search", k);

        self.ensure_layer(k);

        let s0 = self.task.initial_state().clone();
        if !self.layers.violates(k, &s0) {
            if let Some(plan) = self.construct_path(s0, k) {
                return Outcome::Solved(plan);
            }
        }

        self.propagate(k)
    }

    fn construct_path(&mut self, s0: LiteralSet, k: usize) -> Option<Vec<OperatorId>> {
        let mut queue = ObligationQueue::new();
        queue.push(Rc::new(Obligation::new(s0, k, None)));

        while let Some(ob) = queue.pop() {
            let i = ob.priority;
            log::trace!("pop obligation at layer {}", i);

            if i == 0 {
                let plan = extract_plan(&ob, self.task.operators());
                log::info!("plan found with {} step(s) after {} outer iteration(s)", plan.len(), k + 1);
                return Some(plan);
            }

            self.ensure_layer(i - 1);
            let layer_clauses: Vec<LiteralSet> = self.layers.clauses_of(i - 1).cloned().collect();

            match extend(&ob.state, &layer_clauses, self.task.operators()) {
                ExtendOutcome::Successor(t) => {
                    queue.push(ob.clone());
                    queue.push(Rc::new(Obligation::new(t, i - 1, Some(ob))));
                }
                ExtendOutcome::Reason(r) => {
                    self.ensure_layer(i);
                    self.layers.add_set(i, r.invert());

                    if self.config.obligation_rescheduling && i < k {
                        let parent = ob.parent.clone();
                        queue.push(Rc::new(Obligation::new(ob.state.clone(), i + 1, parent)));
                    }
                }
            }

            for j in 0..self.layers.len().saturating_sub(1) {
                debug_assert!(self.layers.is_subset_eq(j, j + 1));
            }
        }

        None
    }

    fn propagate(&mut self, k: usize) -> Outcome {
        let universe = self.task.all_variables();

        for i in 1..=k + 1 {
            self.ensure_layer(i);
            log::trace!("clause propagation round for layer {}", i);

            let snapshot: Vec<LiteralSet> = self.layers.delta(i - 1).to_vec();
            for c in &snapshot {
                let mut s_c = universe.clone();
                for p in c.iter() {
                    s_c.apply_literal(p.neg());
                }

                let propagates = self.task.operators().iter().all(|a| {
                    if !s_c.models(a.precondition()) {
                        return true;
                    }
                    let mut applied = s_c.clone();
                    applied.apply_cube(a.effect());
                    !self.layers.clauses_of(i - 1).all(|lc| applied.models(lc))
                });

                if propagates {
                    self.layers.add_set(i, c.clone());
                }
            }

            if self.layers.delta(i - 1).is_empty() {
                log::info!("fixpoint at layer {}: goal is unreachable", i - 1);
                return Outcome::Failed;
            }
        }

        Outcome::InProgress
    }
}
