//! The planning task interface the search engine is generic over.
use pdr_formula::{Fact, Kind, Literal, LiteralSet, Var};

/// A single grounded operator (action) of a planning task.
///
/// `precondition` and `effect` are cubes derived once at task-construction time; `extend`
/// and clause propagation never recompute them.
#[derive(Clone, Debug)]
pub struct Operator {
    name: String,
    precondition: LiteralSet,
    effect: LiteralSet,
}

impl Operator {
    /// Builds an operator from a raw list of precondition facts and a raw list of effect
    /// facts.
    ///
    /// The effect cube is padded with a negative literal for every other value of every
    /// variable an effect touches, mirroring `from_effect`'s full per-variable assignment.
    /// Without this padding, `extend`'s "is this literal's inverse already forced by this
    /// operator's effect" check would have nothing to consult.
    pub fn new(
        name: impl Into<String>,
        preconditions: impl IntoIterator<Item = Fact>,
        effects: impl IntoIterator<Item = Fact>,
        domain_size: impl Fn(Var) -> usize,
    ) -> Operator {
        let mut precondition = LiteralSet::new(Kind::Cube);
        for fact in preconditions {
            precondition.insert(fact.literal());
        }

        let mut effect = LiteralSet::new(Kind::Cube);
        for fact in effects {
            let lit = fact.literal();
            effect.insert(lit);
            for value in 0..domain_size(fact.var) {
                if value != fact.value() {
                    let other = fact.var.ne_value(value);
                    if !effect.contains(other) {
                        effect.insert(other);
                    }
                }
            }
        }

        Operator {
            name: name.into(),
            precondition,
            effect,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn precondition(&self) -> &LiteralSet {
        &self.precondition
    }

    pub fn effect(&self) -> &LiteralSet {
        &self.effect
    }
}

/// Identifies an operator by its position in [`Task::operators`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct OperatorId(pub usize);

/// A classical planning task over finite-domain (SAS+ style) variables.
///
/// Implementors own the grounded variables, operators, initial state and goal; the search
/// engine never mutates a `Task`.
pub trait Task {
    /// Number of finite-domain variables.
    fn variable_count(&self) -> usize;

    /// Domain size of `var`, i.e. the number of values `var` may take.
    fn domain_size(&self, var: Var) -> usize;

    /// The grounded operators, in a fixed, stable order used to break extend/plan-extraction
    /// ties.
    fn operators(&self) -> &[Operator];

    /// The initial state as a fully-specified cube.
    fn initial_state(&self) -> &LiteralSet;

    /// The goal facts, as a partial assignment (not all variables need to be constrained).
    fn goal_facts(&self) -> &[Fact];

    /// The full-domain cube `X`: every (variable, value) pair represented as a positive
    /// literal. Used by clause propagation to build the "all other assignments" cube `s_c`.
    fn all_variables(&self) -> LiteralSet {
        let mut cube = LiteralSet::new(Kind::Cube);
        for index in 0..self.variable_count() {
            let var = Var::from_index(index);
            for value in 0..self.domain_size(var) {
                cube.insert(Literal::new(var, value, true));
            }
        }
        cube
    }
}
