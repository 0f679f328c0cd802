//! Key structures: formulas, agents, and worlds.
//!
//! # Formulas
//!
//! A formula is an immutable, finite tree over a closed set of operators: atomic propositions, negation, conjunction, disjunction, implication, equivalence, and the two modal operators.
//! The set is closed so that every match over a formula is exhaustive --- adding an operator is a compile-time-visible change at every site which inspects a formula.
//!
//! # Agents
//!
//! A modal operator quantifies over the worlds accessible under some relation of a model.
//! Which relation is named by an [agent](formula::Agent): either the single default relation, or a relation labelled with an identifier.
//!
//! # Worlds
//!
//! Within the library a [world](world) is a small integer index into a model's world table.
//! Names are attached when a model is built and re-applied only at the reporting boundary.

pub mod formula;
pub mod world;
