//! A library for parsing modal logic formulas and determining their satisfaction over finite Kripke models.
//!
//! kripke_sat parses formulas of propositional modal logic --- negation, conjunction, disjunction, implication, equivalence, and the modal operators of necessity and possibility, optionally indexed by an agent --- and evaluates a parsed formula against an explicitly enumerated Kripke model, reporting exactly which worlds of the model satisfy the formula and, for each world which does not, a trace explaining why.
//!
//! # Orientation
//!
//! The library is arranged around three things: a [formula](crate::structures::formula), a [model](crate::model), and an [evaluator](crate::procedures).
//!
//! - A formula is an immutable tree, built by the [parser](crate::parser) from text in a fixed ASCII grammar.
//! - A model is a finite collection of worlds, a valuation of propositions at each world, and one or more accessibility relations between worlds.
//!   Models are built programatically or read from the `.kripke` text format (see [model::read_model]).
//! - The evaluator determines, for a world of a model, whether the formula holds there, by the standard relational semantics: necessity quantifies universally over the worlds accessible from a world, possibility existentially.
//!
//! Useful starting points:
//! - [parser::parse_formula] to turn text into a [Formula](crate::structures::formula::Formula).
//! - [model::KripkeModel] for building or inspecting a model.
//! - [procedures::Evaluator] for satisfaction queries and whole-model scans.
//! - [reports] for the partition and counterexample structures a scan returns.
//!
//! # Example
//!
//! ```rust
//! use kripke_sat::config::Config;
//! use kripke_sat::model::KripkeModel;
//! use kripke_sat::parser::parse_formula;
//! use kripke_sat::procedures::Evaluator;
//! use kripke_sat::structures::formula::Agent;
//!
//! let formula = parse_formula("<>p").unwrap();
//!
//! let mut model = KripkeModel::default();
//! model.add_world("w0");
//! model.add_world("w1");
//! model.add_edge(Agent::Default, "w0", "w1").unwrap();
//! model.add_valuation("p", ["w1"]).unwrap();
//!
//! let evaluator = Evaluator::new(&model, &Config::default());
//! let report = evaluator.scan(&formula).unwrap();
//!
//! // w0 can see w1, where p holds.  w1 sees nothing, so possibility fails there.
//! assert_eq!(report.satisfying, vec![0]);
//! assert!(!report.entailed());
//! ```
//!
//! # Scope
//!
//! The library evaluates a given formula against a given finite model.
//! It does not prove validity over all models, check temporal or infinite-state models, or decide satisfiability of a formula in the absence of a model.
//!
//! # Logs
//!
//! Calls to [log!](log) are made at the component boundaries, with a target per component to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//! No log implementation is provided; the bundled CLI uses [env_logger](https://docs.rs/env_logger/latest/env_logger/).

pub mod config;
pub mod misc;
pub mod model;
pub mod parser;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
