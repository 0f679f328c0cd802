use kripke_sat::config::Config;
use kripke_sat::model::KripkeModel;
use kripke_sat::parser::parse_formula;
use kripke_sat::procedures::Evaluator;
use kripke_sat::structures::formula::{Agent, Formula};
use kripke_sat::types::err::EvaluationError;

/// w0 -> w1 -> w2 under the default relation, w0 -> w2 under agent a.
/// p holds at w1 and w2, q at w2 only.
fn three_worlds() -> KripkeModel {
    let mut model = KripkeModel::default();
    model.add_world("w0");
    model.add_world("w1");
    model.add_world("w2");

    model.add_edge(Agent::Default, "w0", "w1").unwrap();
    model.add_edge(Agent::Default, "w1", "w2").unwrap();
    model.add_edge(Agent::Named("a".to_string()), "w0", "w2").unwrap();

    model.add_valuation("p", ["w1", "w2"]).unwrap();
    model.add_valuation("q", ["w2"]).unwrap();

    model
}

mod scenarios {
    use super::*;

    #[test]
    fn conjunction_at_a_single_world() {
        let mut model = KripkeModel::default();
        model.add_world("w0");
        model.add_valuation("p", ["w0"]).unwrap();
        model.add_valuation("q", ["w0"]).unwrap();

        let formula = parse_formula("p & q").unwrap();
        let report = Evaluator::new(&model, &Config::default()).scan(&formula).unwrap();

        assert_eq!(report.satisfying, vec![0]);
        assert!(report.entailed());
    }

    #[test]
    fn necessity_is_vacuously_true_without_successors() {
        let formula = parse_formula("[]p").unwrap();

        // Whatever p's valuation at the edgeless world, necessity holds there.
        for p_holds in [false, true] {
            let mut model = KripkeModel::default();
            model.add_world("w0");
            if p_holds {
                model.add_valuation("p", ["w0"]).unwrap();
            }

            let evaluator = Evaluator::new(&model, &Config::default());
            assert_eq!(evaluator.satisfied_at(&formula, 0), Ok(true));
        }
    }

    #[test]
    fn possibility_finds_a_witness() {
        let mut model = KripkeModel::default();
        model.add_world("w0");
        model.add_world("w1");
        model.add_edge(Agent::Default, "w0", "w1").unwrap();
        model.add_valuation("p", ["w1"]).unwrap();

        let formula = parse_formula("<>p").unwrap();
        let report = Evaluator::new(&model, &Config::default()).scan(&formula).unwrap();

        assert_eq!(report.satisfying, vec![0]);

        // w1 sees nothing, so possibility fails there, vacuously.
        let (world, trace) = &report.failing[0];
        assert_eq!(model.name_of(*world), "w1");

        let rendered = trace.render(&model);
        assert!(rendered.contains("<>p fails at w1"));
        assert!(rendered.contains("no successors"));
    }
}

mod semantics {
    use super::*;

    fn operands() -> Vec<Formula> {
        ["p", "q", "p & ~q", "<>p", "[]q"]
            .into_iter()
            .map(|text| parse_formula(text).unwrap())
            .collect()
    }

    #[test]
    fn negation_flips_satisfaction() {
        let model = three_worlds();
        let evaluator = Evaluator::new(&model, &Config::default());

        for operand in operands() {
            let negated = Formula::not(operand.clone());

            for world in model.worlds() {
                assert_eq!(
                    evaluator.satisfied_at(&negated, world).unwrap(),
                    !evaluator.satisfied_at(&operand, world).unwrap(),
                );
            }
        }
    }

    #[test]
    fn conjunction_and_disjunction_are_truth_functional() {
        let model = three_worlds();
        let evaluator = Evaluator::new(&model, &Config::default());

        for left in operands() {
            for right in operands() {
                let conjunction = Formula::and(left.clone(), right.clone());
                let disjunction = Formula::or(left.clone(), right.clone());

                for world in model.worlds() {
                    let l = evaluator.satisfied_at(&left, world).unwrap();
                    let r = evaluator.satisfied_at(&right, world).unwrap();

                    assert_eq!(evaluator.satisfied_at(&conjunction, world).unwrap(), l && r);
                    assert_eq!(evaluator.satisfied_at(&disjunction, world).unwrap(), l || r);
                }
            }
        }
    }

    #[test]
    fn implication_and_equivalence_are_truth_functional() {
        let model = three_worlds();
        let evaluator = Evaluator::new(&model, &Config::default());

        for left in operands() {
            for right in operands() {
                let implication = Formula::implies(left.clone(), right.clone());
                let equivalence = Formula::iff(left.clone(), right.clone());

                for world in model.worlds() {
                    let l = evaluator.satisfied_at(&left, world).unwrap();
                    let r = evaluator.satisfied_at(&right, world).unwrap();

                    assert_eq!(evaluator.satisfied_at(&implication, world).unwrap(), !l || r);
                    assert_eq!(evaluator.satisfied_at(&equivalence, world).unwrap(), l == r);
                }
            }
        }
    }

    #[test]
    fn necessity_and_possibility_are_dual() {
        let model = three_worlds();
        let evaluator = Evaluator::new(&model, &Config::default());

        for agent in [Agent::Default, Agent::Named("a".to_string())] {
            for operand in operands() {
                let necessity = Formula::necessity(agent.clone(), operand.clone());
                let dual = Formula::not(Formula::possibility(
                    agent.clone(),
                    Formula::not(operand.clone()),
                ));

                for world in model.worlds() {
                    assert_eq!(
                        evaluator.satisfied_at(&necessity, world).unwrap(),
                        evaluator.satisfied_at(&dual, world).unwrap(),
                    );
                }
            }
        }
    }

    #[test]
    fn modal_operators_are_vacuous_without_successors() {
        let model = three_worlds();
        let evaluator = Evaluator::new(&model, &Config::default());

        // w2 has no outgoing edges under any relation.
        let w2 = model.resolve("w2").unwrap();
        assert!(model.successors(w2, &Agent::Default).is_empty());

        for operand in operands() {
            let necessity = Formula::necessity(Agent::Default, operand.clone());
            let possibility = Formula::possibility(Agent::Default, operand.clone());

            assert_eq!(evaluator.satisfied_at(&necessity, w2), Ok(true));
            assert_eq!(evaluator.satisfied_at(&possibility, w2), Ok(false));
        }
    }

    #[test]
    fn agents_quantify_over_their_own_relation() {
        let model = three_worlds();
        let evaluator = Evaluator::new(&model, &Config::default());

        // From w0 the default relation reaches w1 (where q fails), agent a reaches w2 (where q holds).
        let default_box_q = parse_formula("[]q").unwrap();
        let agent_box_q = parse_formula("[a]q").unwrap();

        assert_eq!(evaluator.satisfied_at(&default_box_q, 0), Ok(false));
        assert_eq!(evaluator.satisfied_at(&agent_box_q, 0), Ok(true));
    }
}

mod diagnostics {
    use super::*;
    use kripke_sat::reports::TraceStep;

    fn final_disagreement(trace: &kripke_sat::reports::Trace) -> (String, u32, bool) {
        let step = trace
            .steps
            .iter()
            .rev()
            .find_map(|step| match step {
                TraceStep::Disagreement { rendering, world, value } => {
                    Some((rendering.clone(), *world, *value))
                }
                _ => None,
            })
            .expect("a trace holds at least its root disagreement");
        step
    }

    #[test]
    fn traces_descend_to_the_failing_atom() {
        let mut model = KripkeModel::default();
        model.add_world("w0");
        model.add_valuation("p", ["w0"]).unwrap();

        let formula = parse_formula("p & q").unwrap();
        let report = Evaluator::new(&model, &Config::default()).scan(&formula).unwrap();

        let (_, trace) = &report.failing[0];
        assert_eq!(final_disagreement(trace), ("q".to_string(), 0, false));
    }

    #[test]
    fn implication_failure_follows_the_consequent() {
        let mut model = KripkeModel::default();
        model.add_world("w0");
        model.add_valuation("p", ["w0"]).unwrap();

        let formula = parse_formula("p -> q").unwrap();
        let report = Evaluator::new(&model, &Config::default()).scan(&formula).unwrap();

        let (_, trace) = &report.failing[0];
        assert_eq!(final_disagreement(trace), ("q".to_string(), 0, false));
    }

    #[test]
    fn necessity_failure_names_the_witnessing_world() {
        let mut model = KripkeModel::default();
        model.add_world("w0");
        model.add_world("w1");
        model.add_world("w2");
        model.add_edge(Agent::Default, "w0", "w1").unwrap();
        model.add_edge(Agent::Default, "w0", "w2").unwrap();
        model.add_valuation("p", ["w1"]).unwrap();

        let formula = parse_formula("[]p").unwrap();
        let report = Evaluator::new(&model, &Config::default()).scan(&formula).unwrap();

        let (world, trace) = report
            .failing
            .iter()
            .find(|(world, _)| *world == 0)
            .expect("w0 fails: p does not hold at w2");
        assert_eq!(*world, 0);

        let witnessed = trace.steps.iter().any(|step| {
            matches!(step, TraceStep::Witness { from: 0, to: 2, .. })
        });
        assert!(witnessed);
        assert_eq!(final_disagreement(trace), ("p".to_string(), 2, false));
    }

    #[test]
    fn negation_flips_the_expectation_in_a_trace() {
        let mut model = KripkeModel::default();
        model.add_world("w0");
        model.add_valuation("p", ["w0"]).unwrap();

        let formula = parse_formula("~p").unwrap();
        let report = Evaluator::new(&model, &Config::default()).scan(&formula).unwrap();

        let (_, trace) = &report.failing[0];
        // The negation fails because p itself holds.
        assert_eq!(final_disagreement(trace), ("p".to_string(), 0, true));
    }

    #[test]
    fn scan_reports_render_with_world_names() {
        let model = three_worlds();
        let formula = parse_formula("<>p").unwrap();

        let report = Evaluator::new(&model, &Config::default()).scan(&formula).unwrap();
        let rendered = report.render(&model);

        assert!(rendered.contains("satisfied in   : {w0, w1}"));
        assert!(rendered.contains("unsatisfied in : {w2}"));
        assert!(rendered.contains("w2:"));
    }
}

mod ceiling {
    use super::*;

    #[test]
    fn deep_nesting_fails_cleanly() {
        let mut model = KripkeModel::default();
        model.add_world("w0");

        let mut config = Config::default();
        config.depth_ceiling.value = 8;

        let deep = (0..12).fold(Formula::atom("p"), |operand, _| Formula::not(operand));
        let shallow = (0..8).fold(Formula::atom("p"), |operand, _| Formula::not(operand));

        let evaluator = Evaluator::new(&model, &config);

        assert_eq!(
            evaluator.satisfied_at(&deep, 0),
            Err(EvaluationError::DepthCeiling(8)),
        );
        assert!(evaluator.satisfied_at(&shallow, 0).is_ok());
    }
}
