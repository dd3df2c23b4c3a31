//! Variables, values and literals of a multi-valued (SAS+ style) planning task.
use std::fmt;

/// The backing type used to represent variable, value and domain indices.
pub type Idx = u32;

/// A finite-domain planning variable.
///
/// Internally this is a 0-based index into the task's variable list.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Var {
    index: Idx,
}

impl Var {
    /// Creates a variable from a 0-based index.
    #[inline]
    pub fn from_index(index: usize) -> Var {
        Var {
            index: index as Idx,
        }
    }

    /// The 0-based index of this variable.
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Creates a literal asserting or denying `self = value`.
    #[inline]
    pub fn literal(self, value: usize, positive: bool) -> Literal {
        Literal::new(self, value, positive)
    }

    /// Creates the literal `self = value`.
    #[inline]
    pub fn eq_value(self, value: usize) -> Literal {
        Literal::new(self, value, true)
    }

    /// Creates the literal `self != value`.
    #[inline]
    pub fn ne_value(self, value: usize) -> Literal {
        Literal::new(self, value, false)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single fact of a planning task: a variable bound to one of its domain values.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Fact {
    pub var: Var,
    pub value: Idx,
}

impl Fact {
    pub fn new(var: Var, value: usize) -> Fact {
        Fact {
            var,
            value: value as Idx,
        }
    }

    pub fn value(self) -> usize {
        self.value as usize
    }

    /// Lifts this fact to a positive literal.
    #[inline]
    pub fn literal(self) -> Literal {
        Literal {
            var: self.var,
            value: self.value,
            positive: true,
        }
    }
}

/// A literal over a finite-domain variable.
///
/// A positive literal `(v, d, +)` asserts `v = d`; a negative literal `(v, d, -)` asserts `v
/// != d`. Display names for diagnostics are not stored here (which keeps this type `Copy`);
/// callers resolve them through the owning [`Task`](crate) implementation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    var: Var,
    value: Idx,
    positive: bool,
}

impl Literal {
    /// Creates a literal from a variable, a domain value index and a polarity.
    #[inline]
    pub fn new(var: Var, value: usize, positive: bool) -> Literal {
        Literal {
            var,
            value: value as Idx,
            positive,
        }
    }

    /// Lifts a fact to a positive literal.
    #[inline]
    pub fn from_fact(fact: Fact) -> Literal {
        fact.literal()
    }

    #[inline]
    pub fn var(self) -> Var {
        self.var
    }

    #[inline]
    pub fn value(self) -> usize {
        self.value as usize
    }

    #[inline]
    pub fn fact(self) -> Fact {
        Fact {
            var: self.var,
            value: self.value,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.positive
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        !self.positive
    }

    /// Flips the polarity of this literal.
    #[inline]
    pub fn invert(self) -> Literal {
        Literal {
            positive: !self.positive,
            ..self
        }
    }

    /// Forces this literal to be positive.
    #[inline]
    pub fn pos(self) -> Literal {
        Literal {
            positive: true,
            ..self
        }
    }

    /// Forces this literal to be negative.
    #[inline]
    pub fn neg(self) -> Literal {
        Literal {
            positive: false,
            ..self
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.positive {
            write!(f, "!")?;
        }
        write!(f, "({:?}={})", self.var, self.value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(any(test, feature = "proptest-strategies"))]
#[doc(hidden)]
pub mod strategy {
    use super::*;
    use proptest::prelude::*;

    pub fn var(index: impl Strategy<Value = usize>) -> impl Strategy<Value = Var> {
        index.prop_map(Var::from_index)
    }

    pub fn literal(
        var_index: impl Strategy<Value = usize>,
        value: impl Strategy<Value = usize>,
    ) -> impl Strategy<Value = Literal> {
        (var(var_index), value, bool::ANY)
            .prop_map(|(var, value, positive)| Literal::new(var, value, positive))
    }
}
