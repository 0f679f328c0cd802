//! Reports from a whole-model scan, and rendering them for a reader.
//!
//! Scans and traces carry worlds as indices; names are applied only here, when a report is rendered against its model.

pub mod dot;

use std::fmt::Write as _;

use crate::{
    model::KripkeModel,
    structures::{formula::Agent, world::World},
};

/// The outcome of evaluating a formula at every world of a model.
#[derive(Clone, Debug)]
pub struct ScanReport {
    /// The worlds satisfying the formula, in index order.
    pub satisfying: Vec<World>,

    /// The worlds failing the formula, each with a trace explaining the failure.
    pub failing: Vec<(World, Trace)>,
}

impl ScanReport {
    /// Whether the model entails the formula: every world satisfies it.
    pub fn entailed(&self) -> bool {
        self.failing.is_empty()
    }

    /// Renders the partition and the per-world counterexamples, with world names applied.
    pub fn render(&self, model: &KripkeModel) -> String {
        let mut out = String::new();

        let names = |worlds: &[World]| {
            worlds
                .iter()
                .map(|world| model.name_of(*world))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let _ = writeln!(out, "satisfied in   : {{{}}}", names(&self.satisfying));
        let failing_worlds = self.failing.iter().map(|(world, _)| *world).collect::<Vec<_>>();
        let _ = writeln!(out, "unsatisfied in : {{{}}}", names(&failing_worlds));

        for (world, trace) in &self.failing {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}:", model.name_of(*world));
            out.push_str(&trace.render(model));
        }

        out
    }
}

/// A chain from a formula down to the first point of disagreement, explaining why the formula fails at a world.
#[derive(Clone, Debug)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
}

/// One step of a counterexample trace.
#[derive(Clone, Debug)]
pub enum TraceStep {
    /// A sub-formula whose value at a world disagrees with what its parent required.
    Disagreement {
        /// The sub-formula, rendered canonically.
        rendering: String,
        world: World,
        value: bool,
    },

    /// The accessible world through which a modal operator's value is explained.
    Witness { agent: Agent, from: World, to: World },

    /// A modal operator over a world with no successors, fixing its value vacuously.
    NoSuccessors { agent: Agent, world: World, value: bool },
}

impl Trace {
    /// Renders the trace with world names applied, one step per line, indented with depth.
    pub fn render(&self, model: &KripkeModel) -> String {
        let mut out = String::new();
        let mut indent = 1;

        for step in &self.steps {
            let _ = write!(out, "{:width$}", "", width = indent * 2);

            match step {
                TraceStep::Disagreement { rendering, world, value } => {
                    let verdict = match value {
                        true => "holds at",
                        false => "fails at",
                    };
                    let _ = writeln!(out, "{rendering} {verdict} {}", model.name_of(*world));
                    indent += 1;
                }

                TraceStep::Witness { agent, from, to } => {
                    let _ = writeln!(
                        out,
                        "following {} from {} to {}",
                        relation_phrase(agent),
                        model.name_of(*from),
                        model.name_of(*to),
                    );
                }

                TraceStep::NoSuccessors { agent, world, value } => {
                    let _ = writeln!(
                        out,
                        "{} has no successors under {}: vacuously {value}",
                        model.name_of(*world),
                        relation_phrase(agent),
                    );
                }
            }
        }

        out
    }
}

fn relation_phrase(agent: &Agent) -> String {
    match agent {
        Agent::Default => "the default relation".to_string(),
        Agent::Named(label) => format!("relation {label}"),
    }
}
