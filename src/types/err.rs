//! Error types used in the library.
//!
//! - Each component has its own error enum, and [ErrorKind] wraps these for use at points where more than one component may fail --- e.g. parsing a formula may fail while scanning the text or while structuring the tokens.
//! - Every error displays as a human-readable message, with a source position where one applies.
//! - None of these are used for ordinary control flow: parsing and evaluation are deterministic, and the same input always produces the same error.

use crate::structures::world::World;

/// Any error the library may return.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lex(LexError),
    Parse(ParseError),
    ModelShape(ModelShapeError),
    ModelRead(ModelReadError),
    Evaluation(EvaluationError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::ModelShape(e) => e.fmt(f),
            Self::ModelRead(e) => e.fmt(f),
            Self::Evaluation(e) => e.fmt(f),
        }
    }
}

/// Errors while scanning formula text into tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexError {
    /// No token matches at the given byte position.
    UnrecognizedCharacter { character: char, position: usize },
}

impl From<LexError> for ErrorKind {
    fn from(e: LexError) -> Self {
        ErrorKind::Lex(e)
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter {
                character,
                position,
            } => {
                write!(f, "unrecognized character '{character}' at position {position}")
            }
        }
    }
}

/// Errors while structuring a token sequence into a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An operand was expected at the given position, including at the end of input.
    MissingOperand { position: usize },

    /// The opening parenthesis at the given position is never closed.
    UnmatchedOpenParen { position: usize },

    /// A closing parenthesis at the given position has no matching opening parenthesis.
    UnmatchedCloseParen { position: usize },

    /// Tokens remain after a complete formula.
    TrailingInput { position: usize },

    /// The label of a modal operator is not an identifier, or its bracket is unterminated.
    MalformedAgent { position: usize },
}

impl ParseError {
    /// The byte position at which the parse failed.
    pub fn position(&self) -> usize {
        match self {
            Self::MissingOperand { position }
            | Self::UnmatchedOpenParen { position }
            | Self::UnmatchedCloseParen { position }
            | Self::TrailingInput { position }
            | Self::MalformedAgent { position } => *position,
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { position } => {
                write!(f, "an operand was expected at position {position}")
            }
            Self::UnmatchedOpenParen { position } => {
                write!(f, "the parenthesis opened at position {position} is never closed")
            }
            Self::UnmatchedCloseParen { position } => {
                write!(f, "unmatched closing parenthesis at position {position}")
            }
            Self::TrailingInput { position } => {
                write!(f, "input continues past a complete formula at position {position}")
            }
            Self::MalformedAgent { position } => {
                write!(f, "malformed agent label at position {position}")
            }
        }
    }
}

/// A model fails its shape invariant: every world a relation or valuation mentions is a declared world.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ModelShapeError {
    /// A relation or valuation references a world which was never declared.
    UnknownWorld(String),

    /// An index outside the world table was queried.
    UnknownIndex(World),
}

impl From<ModelShapeError> for ErrorKind {
    fn from(e: ModelShapeError) -> Self {
        ErrorKind::ModelShape(e)
    }
}

impl std::fmt::Display for ModelShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWorld(name) => write!(f, "unknown world '{name}'"),
            Self::UnknownIndex(index) => write!(f, "no world with index {index}"),
        }
    }
}

/// Errors while reading a model from its text format.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ModelReadError {
    /// The source could not be read at the given line.
    Read { line: usize },

    /// The statement starting at the given line is not of the W/R/V forms.
    Statement { line: usize },

    /// A statement is missing its terminating semicolon.
    Unterminated { line: usize },
}

impl From<ModelReadError> for ErrorKind {
    fn from(e: ModelReadError) -> Self {
        ErrorKind::ModelRead(e)
    }
}

impl std::fmt::Display for ModelReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { line } => write!(f, "failed to read line {line}"),
            Self::Statement { line } => {
                write!(f, "malformed statement at line {line}")
            }
            Self::Unterminated { line } => {
                write!(f, "statement at line {line} is missing its ';'")
            }
        }
    }
}

/// Errors while evaluating a formula against a model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// Recursion into the formula passed the configured ceiling.
    DepthCeiling(usize),

    /// The model failed a shape query mid-evaluation.
    Model(ModelShapeError),
}

impl From<ModelShapeError> for EvaluationError {
    fn from(e: ModelShapeError) -> Self {
        EvaluationError::Model(e)
    }
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepthCeiling(limit) => {
                write!(f, "formula nesting exceeds the evaluation depth ceiling of {limit}")
            }
            Self::Model(e) => e.fmt(f),
        }
    }
}
