//! Structuring a token sequence into a formula by recursive descent.
//!
//! One method per grammar rule, from the weakest binding operator down.
//! Right-associative rules recurse on their own rule for the right operand; left-associative rules fold in a loop.
//! The parse either consumes every token and returns a fully-formed formula, or fails --- no partial results.

use crate::{
    parser::lex::{Token, TokenKind},
    structures::formula::{Agent, Formula},
    types::err::ParseError,
};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,

    /// The byte length of the source text, used as the position of end-of-input errors.
    end: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, end: usize) -> Self {
        Parser { tokens, pos: 0, end }
    }

    /// Parses the whole token sequence as a single formula.
    pub fn parse(mut self) -> Result<Formula, ParseError> {
        let formula = self.iff()?;

        match self.peek() {
            None => Ok(formula),

            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(ParseError::UnmatchedCloseParen { position: token.position })
            }

            Some(token) => Err(ParseError::TrailingInput { position: token.position }),
        }
    }

    fn iff(&mut self) -> Result<Formula, ParseError> {
        let left = self.implies()?;

        if self.eat(&TokenKind::Iff) {
            let right = self.iff()?;
            Ok(Formula::iff(left, right))
        } else {
            Ok(left)
        }
    }

    fn implies(&mut self) -> Result<Formula, ParseError> {
        let left = self.or()?;

        if self.eat(&TokenKind::Implies) {
            let right = self.implies()?;
            Ok(Formula::implies(left, right))
        } else {
            Ok(left)
        }
    }

    fn or(&mut self) -> Result<Formula, ParseError> {
        let mut left = self.and()?;

        while self.eat(&TokenKind::Or) {
            let right = self.and()?;
            left = Formula::or(left, right);
        }

        Ok(left)
    }

    fn and(&mut self) -> Result<Formula, ParseError> {
        let mut left = self.unary()?;

        while self.eat(&TokenKind::And) {
            let right = self.unary()?;
            left = Formula::and(left, right);
        }

        Ok(left)
    }

    fn unary(&mut self) -> Result<Formula, ParseError> {
        let kind = match self.peek() {
            Some(token) => token.kind.clone(),
            None => return self.primary(),
        };

        match kind {
            TokenKind::Not => {
                self.pos += 1;
                Ok(Formula::not(self.unary()?))
            }

            TokenKind::Necessity(label) => {
                self.pos += 1;
                Ok(Formula::necessity(to_agent(label), self.unary()?))
            }

            TokenKind::Possibility(label) => {
                self.pos += 1;
                Ok(Formula::possibility(to_agent(label), self.unary()?))
            }

            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Formula, ParseError> {
        match self.next() {
            Some(Token { kind: TokenKind::Ident(name), .. }) => Ok(Formula::Atom(name)),

            Some(Token { kind: TokenKind::OpenParen, position }) => {
                let inner = self.iff()?;

                match self.next() {
                    Some(Token { kind: TokenKind::CloseParen, .. }) => Ok(inner),

                    Some(token) => Err(ParseError::TrailingInput { position: token.position }),

                    None => Err(ParseError::UnmatchedOpenParen { position }),
                }
            }

            Some(Token { position, .. }) => Err(ParseError::MissingOperand { position }),

            None => Err(ParseError::MissingOperand { position: self.end }),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        match self.peek() {
            Some(token) if token.kind == *kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }
}

fn to_agent(label: Option<String>) -> Agent {
    match label {
        Some(label) => Agent::Named(label),
        None => Agent::Default,
    }
}
