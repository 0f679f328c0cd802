//! Satisfaction of a formula at the worlds of a model.

use crate::{
    config::Config,
    misc::log::targets,
    model::KripkeModel,
    procedures::trace,
    reports::ScanReport,
    structures::{formula::Formula, world::World},
    types::err::EvaluationError,
};

/// Evaluates formulas against one model, under a recursion ceiling.
///
/// The evaluator borrows the model and holds no other state: queries are independent, and the model is never mutated.
pub struct Evaluator<'m> {
    pub(crate) model: &'m KripkeModel,
    depth_ceiling: usize,
}

impl<'m> Evaluator<'m> {
    pub fn new(model: &'m KripkeModel, config: &Config) -> Self {
        Evaluator {
            model,
            depth_ceiling: config.depth_ceiling.value,
        }
    }

    /// Whether the formula is satisfied at the world.
    pub fn satisfied_at(&self, formula: &Formula, world: World) -> Result<bool, EvaluationError> {
        self.sat(formula, world, 0)
    }

    /// Evaluates the formula at every world of the model and partitions the worlds by the outcome, with a counterexample trace for each world where the formula fails.
    pub fn scan(&self, formula: &Formula) -> Result<ScanReport, EvaluationError> {
        let mut satisfying = Vec::new();
        let mut failing = Vec::new();

        for world in self.model.worlds() {
            match self.satisfied_at(formula, world)? {
                true => satisfying.push(world),

                false => {
                    let trace = trace::explain(self, formula, world)?;
                    failing.push((world, trace));
                }
            }
        }

        log::debug!(
            target: targets::EVALUATE,
            "{} of {} worlds satisfy the formula",
            satisfying.len(),
            self.model.world_count(),
        );

        Ok(ScanReport { satisfying, failing })
    }

    pub(crate) fn sat(
        &self,
        formula: &Formula,
        world: World,
        depth: usize,
    ) -> Result<bool, EvaluationError> {
        if depth > self.depth_ceiling {
            return Err(EvaluationError::DepthCeiling(self.depth_ceiling));
        }

        match formula {
            Formula::Atom(name) => Ok(self.model.valuation_of(world)?.contains(name)),

            Formula::Not(e) => Ok(!self.sat(e, world, depth + 1)?),

            Formula::And(a, b) => {
                Ok(self.sat(a, world, depth + 1)? && self.sat(b, world, depth + 1)?)
            }

            Formula::Or(a, b) => {
                Ok(self.sat(a, world, depth + 1)? || self.sat(b, world, depth + 1)?)
            }

            Formula::Implies(a, b) => {
                Ok(!self.sat(a, world, depth + 1)? || self.sat(b, world, depth + 1)?)
            }

            Formula::Iff(a, b) => {
                Ok(self.sat(a, world, depth + 1)? == self.sat(b, world, depth + 1)?)
            }

            Formula::Necessity(agent, e) => {
                for &next in self.model.successors(world, agent) {
                    if !self.sat(e, next, depth + 1)? {
                        return Ok(false);
                    }
                }
                // Vacuously true at a world without successors.
                Ok(true)
            }

            Formula::Possibility(agent, e) => {
                for &next in self.model.successors(world, agent) {
                    if self.sat(e, next, depth + 1)? {
                        return Ok(true);
                    }
                }
                // Vacuously false at a world without successors.
                Ok(false)
            }
        }
    }
}
