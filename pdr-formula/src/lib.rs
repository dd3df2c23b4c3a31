//! Literal, cube and clause algebra for multi-valued (SAS+ style) planning tasks.
//!
//! This crate has no notion of variables, operators or tasks — it is the pure symbolic
//! algebra that `pdr-core`'s layer stack and `extend` procedure are built on.

pub mod collection;
pub mod lit;
pub mod set;

pub use collection::LiteralSetCollection;
pub use lit::{Fact, Literal, Var};
pub use set::{Kind, LiteralSet};
