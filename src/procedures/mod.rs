//! The evaluation procedures: satisfaction at a world, whole-model scans, and counterexample construction.
//!
//! Satisfaction follows the standard relational semantics.
//! At a world of a model:
//! - an atom holds iff the world's valuation contains it;
//! - the boolean operators behave truth-functionally;
//! - necessity holds iff its operand holds at *every* world accessible under its relation --- vacuously, at a world with no successors;
//! - possibility holds iff its operand holds at *some* accessible world --- so never at a world with no successors.
//!
//! Evaluation is a pure function of the formula, the model, and the world: no state is held between queries, and evaluating distinct worlds is independent.
//! A [whole-model scan](Evaluator::scan) partitions the model's worlds by satisfaction and attaches to each non-satisfying world a [trace](crate::reports::Trace) from the formula down to the first point of disagreement.

mod evaluate;
pub use evaluate::Evaluator;

mod trace;
