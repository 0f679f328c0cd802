//! Formulas of propositional modal logic.
//!
//! A formula is an immutable tree, exclusively owned by its parent, built once by the [parser](crate::parser) and never mutated afterwards.
//! Its depth is the nesting depth of the written formula: the parser only ever builds downward, so no node is its own ancestor.
//!
//! Rendering a formula with [Display](std::fmt::Display) produces the canonical grammar the parser accepts, with every binary node parenthesized, so rendering and re-parsing is the structural identity:
//!
//! ```rust
//! # use kripke_sat::parser::parse_formula;
//! let formula = parse_formula("[]p -> <a>(q | ~r)").unwrap();
//! let rendered = formula.to_string();
//!
//! assert_eq!(formula, parse_formula(&rendered).unwrap());
//! ```

/// The relation a modal operator quantifies over.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Agent {
    /// The single unlabelled relation of a model.
    Default,

    /// A relation labelled with an identifier.
    Named(String),
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => Ok(()),
            Self::Named(label) => write!(f, "{label}"),
        }
    }
}

/// A formula of propositional modal logic.
///
/// The operator set is closed; every match over a formula is exhaustive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Formula {
    /// An atomic proposition, by name.
    Atom(String),

    /// Negation: `~e`.
    Not(Box<Formula>),

    /// Conjunction: `(a & b)`.
    And(Box<Formula>, Box<Formula>),

    /// Disjunction: `(a | b)`.
    Or(Box<Formula>, Box<Formula>),

    /// Implication: `(a -> b)`.
    Implies(Box<Formula>, Box<Formula>),

    /// Equivalence: `(a <-> b)`.
    Iff(Box<Formula>, Box<Formula>),

    /// Necessity: `[]e` or `[a]e` --- the operand holds at every accessible world.
    Necessity(Agent, Box<Formula>),

    /// Possibility: `<>e` or `<a>e` --- the operand holds at some accessible world.
    Possibility(Agent, Box<Formula>),
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom(name.into())
    }

    pub fn not(operand: Self) -> Self {
        Formula::Not(Box::new(operand))
    }

    pub fn and(left: Self, right: Self) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Self, right: Self) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Self, right: Self) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Self, right: Self) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    pub fn necessity(agent: Agent, operand: Self) -> Self {
        Formula::Necessity(agent, Box::new(operand))
    }

    pub fn possibility(agent: Agent, operand: Self) -> Self {
        Formula::Possibility(agent, Box::new(operand))
    }

    /// The direct sub-formulas of the formula, left to right.
    pub fn children(&self) -> Vec<&Formula> {
        match self {
            Formula::Atom(_) => vec![],

            Formula::Not(e) | Formula::Necessity(_, e) | Formula::Possibility(_, e) => {
                vec![e]
            }

            Formula::And(a, b)
            | Formula::Or(a, b)
            | Formula::Implies(a, b)
            | Formula::Iff(a, b) => vec![a, b],
        }
    }

    /// The nesting depth of the formula, with atoms at depth zero.
    pub fn depth(&self) -> usize {
        match self {
            Formula::Atom(_) => 0,

            Formula::Not(e) | Formula::Necessity(_, e) | Formula::Possibility(_, e) => {
                e.depth() + 1
            }

            Formula::And(a, b)
            | Formula::Or(a, b)
            | Formula::Implies(a, b)
            | Formula::Iff(a, b) => a.depth().max(b.depth()) + 1,
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{name}"),
            Formula::Not(e) => write!(f, "~{e}"),
            Formula::And(a, b) => write!(f, "({a} & {b})"),
            Formula::Or(a, b) => write!(f, "({a} | {b})"),
            Formula::Implies(a, b) => write!(f, "({a} -> {b})"),
            Formula::Iff(a, b) => write!(f, "({a} <-> {b})"),
            Formula::Necessity(agent, e) => write!(f, "[{agent}]{e}"),
            Formula::Possibility(agent, e) => write!(f, "<{agent}>{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_canonical() {
        let formula = Formula::implies(
            Formula::necessity(Agent::Default, Formula::atom("p")),
            Formula::possibility(Agent::Named("a".to_string()), Formula::not(Formula::atom("q"))),
        );

        assert_eq!(formula.to_string(), "([]p -> <a>~q)");
    }

    #[test]
    fn depth_counts_nesting() {
        let formula = Formula::and(
            Formula::atom("p"),
            Formula::not(Formula::possibility(Agent::Default, Formula::atom("q"))),
        );

        assert_eq!(formula.depth(), 3);
        assert_eq!(formula.children().len(), 2);
    }
}
