//! Parsing formula text into a [Formula](crate::structures::formula::Formula).
//!
//! Parsing happens in two passes:
//! - The [lexer](lex) scans the text into an ordered token sequence, skipping whitespace and matching multi-character operators longest first.
//! - The [parser](self::parse_formula) structures the tokens by recursive descent, with the whole of the input consumed or the parse failing.
//!
//! The grammar, weakest to tightest binding:
//!
//! ```none
//! atom        := [A-Za-z][A-Za-z0-9_]*
//! expr        := iff
//! iff         := implies ( "<->" implies )*      right associative
//! implies     := or ( "->" implies )?            right associative
//! or          := and ( "|" and )*                left associative
//! and         := unary ( "&" unary )*            left associative
//! unary       := "~" unary | "[" agent? "]" unary | "<" agent? ">" unary | primary
//! primary     := atom | "(" expr ")"
//! agent       := identifier
//! ```
//!
//! This is the one canonical spelling: no alternate glyphs for negation or implication are recognized.
//!
//! ```rust
//! use kripke_sat::parser::parse_formula;
//! use kripke_sat::structures::formula::Formula;
//!
//! let formula = parse_formula("p & ~q").unwrap();
//!
//! assert_eq!(
//!     formula,
//!     Formula::and(Formula::atom("p"), Formula::not(Formula::atom("q"))),
//! );
//! ```

pub mod lex;
mod parse;

use crate::{misc::log::targets, structures::formula::Formula, types::err::ErrorKind};

/// Parses formula text into a formula, or fails with a lexical or structural error carrying a source position.
pub fn parse_formula(text: &str) -> Result<Formula, ErrorKind> {
    let tokens = lex::tokenize(text)?;

    let formula = parse::Parser::new(tokens, text.len()).parse()?;
    log::trace!(target: targets::PARSE, "parsed a formula of depth {}", formula.depth());

    Ok(formula)
}
