//! A property-directed reachability (PDR) search engine for classical, finite-domain
//! planning tasks.
//!
//! The symbolic algebra (literals, cubes, clauses) lives in the companion `pdr-formula`
//! crate; this crate owns the layer stack, the `extend` procedure, heuristic seeding, the
//! obligation queue and the outer driver loop.

pub mod config;
pub mod driver;
pub mod error;
pub mod extend;
pub mod heuristic;
pub mod layer;
pub mod obligation;
pub mod plan;
pub mod task;

pub use config::PdrConfig;
pub use driver::{Outcome, Pdr};
pub use error::PdrBug;
pub use extend::{extend, ExtendOutcome};
pub use heuristic::{HeuristicOracle, NullOracle, ProjectionOracle};
pub use layer::LayerStack;
pub use obligation::{Obligation, ObligationQueue};
pub use task::{Operator, OperatorId, Task};

pub use pdr_formula::{Fact, Kind, Literal, LiteralSet, LiteralSetCollection, Var};
