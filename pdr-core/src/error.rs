//! Fatal diagnostics for internal invariant violations.
//!
//! None of these are meant to be caught by a caller: a `PdrBug` signals that the search
//! engine's own bookkeeping is inconsistent, not a property of the planning task. Each is
//! raised via `panic!` carrying the formatted message rather than threaded through `Result`;
//! there is no retry path for a broken invariant, only an abort with diagnostic.
use thiserror::Error;

/// A fatal, internal inconsistency detected by the search engine.
#[derive(Debug, Error)]
pub enum PdrBug {
    #[error("reason {reason:?} is not a subset of the state {state:?} it was derived from")]
    ReasonNotSubsetOfState { reason: String, state: String },

    #[error("plan extraction found no operator matching the transition from {from:?} to {to:?}")]
    NoMatchingOperator { from: String, to: String },

    #[error("heuristic oracle seeded a non-positive literal {literal:?} into layer {layer}")]
    HeuristicMisuse { layer: usize, literal: String },

    #[error("extend() returned successor {successor:?} which does not model the layer it was extended against")]
    SuccessorDoesNotModelLayer { successor: String },
}

/// Panics with a formatted [`PdrBug`]. Used at the few points where a debug assertion alone
/// would lose the diagnostic payload.
pub(crate) fn bug(err: PdrBug) -> ! {
    panic!("{}", err)
}
