//! Counterexample construction for a world at which a formula fails.
//!
//! The walk starts at the root with the expectation that the formula holds and descends one child at a time.
//! At every step the visited sub-formula's value disagrees with the expectation in force, so the chain read top to bottom explains the failure:
//! - through a negation the expectation flips;
//! - at a conjunction expected to hold, the walk follows the leftmost conjunct which does not (dually for disjunction);
//! - at an implication which fails, the antecedent held, so the walk follows the consequent;
//! - at an equivalence the walk follows the left operand, expecting the right operand's value;
//! - at a modal operator the walk names the accessible world which witnesses the failure and continues there, or terminates with the empty successor set which fixed the operator's value vacuously.
//!
//! The walk terminates at an atom or at an empty successor set.
//! Child values are obtained by further [sat](super::Evaluator) calls; a formula tree has no node sharing, so nothing is gained by annotating it ahead of the walk.

use crate::{
    procedures::Evaluator,
    reports::{Trace, TraceStep},
    structures::{formula::Formula, world::World},
    types::err::EvaluationError,
};

/// A trace explaining why the formula fails at the world.
/// Call only when the formula does fail there.
pub(crate) fn explain(
    evaluator: &Evaluator,
    formula: &Formula,
    world: World,
) -> Result<Trace, EvaluationError> {
    let mut steps = Vec::new();
    descend(evaluator, formula, world, true, &mut steps)?;
    Ok(Trace { steps })
}

fn descend(
    evaluator: &Evaluator,
    formula: &Formula,
    world: World,
    expected: bool,
    steps: &mut Vec<TraceStep>,
) -> Result<(), EvaluationError> {
    let value = evaluator.satisfied_at(formula, world)?;
    debug_assert_ne!(value, expected);

    steps.push(TraceStep::Disagreement {
        rendering: formula.to_string(),
        world,
        value,
    });

    match formula {
        Formula::Atom(_) => Ok(()),

        Formula::Not(e) => descend(evaluator, e, world, !expected, steps),

        Formula::And(a, b) => match expected {
            // The conjunction fails: follow the leftmost false conjunct.
            true => match evaluator.satisfied_at(a, world)? {
                false => descend(evaluator, a, world, true, steps),
                true => descend(evaluator, b, world, true, steps),
            },

            // The conjunction holds, so both conjuncts do.
            false => descend(evaluator, a, world, false, steps),
        },

        Formula::Or(a, b) => match expected {
            // The disjunction fails, so both disjuncts do.
            true => descend(evaluator, a, world, true, steps),

            // The disjunction holds: follow the leftmost true disjunct.
            false => match evaluator.satisfied_at(a, world)? {
                true => descend(evaluator, a, world, false, steps),
                false => descend(evaluator, b, world, false, steps),
            },
        },

        Formula::Implies(a, b) => match expected {
            // A failing implication has a true antecedent and a false consequent.
            true => descend(evaluator, b, world, true, steps),

            // A holding implication has a false antecedent or a true consequent.
            false => match evaluator.satisfied_at(a, world)? {
                false => descend(evaluator, a, world, true, steps),
                true => descend(evaluator, b, world, false, steps),
            },
        },

        Formula::Iff(a, b) => {
            let right = evaluator.satisfied_at(b, world)?;
            // The operands agree exactly when the equivalence holds, so the left operand always disagrees with the expectation below.
            let expectation = match expected {
                true => right,
                false => !right,
            };
            descend(evaluator, a, world, expectation, steps)
        }

        Formula::Necessity(agent, e) => {
            let successors = evaluator.model.successors(world, agent);

            match expected {
                // Necessity fails: some successor falsifies the operand.
                true => {
                    for &next in successors {
                        if !evaluator.satisfied_at(e, next)? {
                            steps.push(TraceStep::Witness {
                                agent: agent.clone(),
                                from: world,
                                to: next,
                            });
                            return descend(evaluator, e, next, true, steps);
                        }
                    }
                    Ok(())
                }

                // Necessity holds against expectation.
                false => match successors.first() {
                    None => {
                        steps.push(TraceStep::NoSuccessors {
                            agent: agent.clone(),
                            world,
                            value: true,
                        });
                        Ok(())
                    }

                    Some(&next) => {
                        steps.push(TraceStep::Witness {
                            agent: agent.clone(),
                            from: world,
                            to: next,
                        });
                        descend(evaluator, e, next, false, steps)
                    }
                },
            }
        }

        Formula::Possibility(agent, e) => {
            let successors = evaluator.model.successors(world, agent);

            match expected {
                // Possibility fails: every successor falsifies the operand, or there are none.
                true => match successors.first() {
                    None => {
                        steps.push(TraceStep::NoSuccessors {
                            agent: agent.clone(),
                            world,
                            value: false,
                        });
                        Ok(())
                    }

                    Some(&next) => {
                        steps.push(TraceStep::Witness {
                            agent: agent.clone(),
                            from: world,
                            to: next,
                        });
                        descend(evaluator, e, next, true, steps)
                    }
                },

                // Possibility holds against expectation: some successor satisfies the operand.
                false => {
                    for &next in successors {
                        if evaluator.satisfied_at(e, next)? {
                            steps.push(TraceStep::Witness {
                                agent: agent.clone(),
                                from: world,
                                to: next,
                            });
                            return descend(evaluator, e, next, false, steps);
                        }
                    }
                    Ok(())
                }
            }
        }
    }
}
