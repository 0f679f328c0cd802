//! Formula to DOT (Graphviz) conversion.
//!
//! Renders the parse tree of a formula as a digraph: one node per sub-formula, labelled with its operator (atoms with their name), edges from parent to child.
//! The output can be rendered with Graphviz, e.g. `dot -Tpng tree.dot -o tree.png`.

use std::collections::VecDeque;
use std::fmt::Write as _;

use crate::structures::formula::Formula;

/// Renders the formula's parse tree in DOT.
///
/// ```rust
/// # use kripke_sat::parser::parse_formula;
/// # use kripke_sat::reports::dot;
/// let formula = parse_formula("p & ~q").unwrap();
/// let rendered = dot::render(&formula).unwrap();
///
/// assert!(rendered.starts_with("digraph parse_tree {"));
/// ```
pub fn render(formula: &Formula) -> Result<String, std::fmt::Error> {
    let mut nodes = String::new();
    let mut edges = String::new();

    // Breadth first, with labels assigned in visit order.
    let mut queue = VecDeque::from([(formula, 0_usize)]);
    let mut counter = 1_usize;

    while let Some((subformula, label)) = queue.pop_front() {
        writeln!(nodes, "  q{label} [label=\"{}\"];", node_label(subformula))?;

        for child in subformula.children() {
            writeln!(edges, "  q{label} -> q{counter};")?;
            queue.push_back((child, counter));
            counter += 1;
        }
    }

    let mut out = String::new();
    writeln!(out, "digraph parse_tree {{")?;
    writeln!(out, "  rankdir = LR;")?;
    writeln!(out, "  graph [splines=ortho];")?;
    writeln!(out, "  node [shape=square];")?;
    writeln!(out)?;
    out.push_str(&nodes);
    writeln!(out)?;
    out.push_str(&edges);
    writeln!(out, "}}")?;

    Ok(out)
}

fn node_label(formula: &Formula) -> String {
    match formula {
        Formula::Atom(name) => name.clone(),
        Formula::Not(_) => "~".to_string(),
        Formula::And(_, _) => "&".to_string(),
        Formula::Or(_, _) => "|".to_string(),
        Formula::Implies(_, _) => "->".to_string(),
        Formula::Iff(_, _) => "<->".to_string(),
        Formula::Necessity(agent, _) => format!("[{agent}]"),
        Formula::Possibility(agent, _) => format!("<{agent}>"),
    }
}
