//! Scanning formula text into tokens.
//!
//! Tokens carry the byte position at which they begin, for use in error reports.
//! Operators spelled with more than one character are matched longest first, so `<->` is equivalence rather than the opening of a possibility bracket, and `->` is the only token beginning with `-`.

use crate::{
    misc::log::targets,
    types::err::{ErrorKind, LexError, ParseError},
};

/// What a token is, with any lexical payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenKind {
    /// An identifier: an atom name.
    Ident(String),

    /// `~`
    Not,

    /// `&`
    And,

    /// `|`
    Or,

    /// `->`
    Implies,

    /// `<->`
    Iff,

    /// `[]` or `[label]`
    Necessity(Option<String>),

    /// `<>` or `<label>`
    Possibility(Option<String>),

    /// `(`
    OpenParen,

    /// `)`
    CloseParen,
}

/// A token paired with the byte position at which it begins.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Scans formula text into an ordered token sequence.
///
/// Whitespace is skipped.
/// A character at which no token begins is a [LexError]; a malformed modal bracket is a [ParseError::MalformedAgent].
pub fn tokenize(text: &str) -> Result<Vec<Token>, ErrorKind> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let position = i;

        match bytes[i] {
            b' ' | b'\t' | b'\r' | b'\n' => {
                i += 1;
                continue;
            }

            b'(' => {
                i += 1;
                tokens.push(Token { kind: TokenKind::OpenParen, position });
            }

            b')' => {
                i += 1;
                tokens.push(Token { kind: TokenKind::CloseParen, position });
            }

            b'~' => {
                i += 1;
                tokens.push(Token { kind: TokenKind::Not, position });
            }

            b'&' => {
                i += 1;
                tokens.push(Token { kind: TokenKind::And, position });
            }

            b'|' => {
                i += 1;
                tokens.push(Token { kind: TokenKind::Or, position });
            }

            b'-' => match bytes.get(i + 1) {
                Some(b'>') => {
                    i += 2;
                    tokens.push(Token { kind: TokenKind::Implies, position });
                }

                _ => {
                    return Err(ErrorKind::from(LexError::UnrecognizedCharacter {
                        character: '-',
                        position,
                    }))
                }
            },

            b'<' => {
                // Longest first: <-> before the < of a possibility bracket.
                if bytes.get(i + 1) == Some(&b'-') && bytes.get(i + 2) == Some(&b'>') {
                    i += 3;
                    tokens.push(Token { kind: TokenKind::Iff, position });
                } else {
                    let (label, next) = scan_bracket(bytes, i + 1, b'>')
                        .ok_or(ErrorKind::from(ParseError::MalformedAgent { position }))?;
                    i = next;
                    tokens.push(Token { kind: TokenKind::Possibility(label), position });
                }
            }

            b'[' => {
                let (label, next) = scan_bracket(bytes, i + 1, b']')
                    .ok_or(ErrorKind::from(ParseError::MalformedAgent { position }))?;
                i = next;
                tokens.push(Token { kind: TokenKind::Necessity(label), position });
            }

            c if c.is_ascii_alphabetic() => {
                let mut end = i + 1;
                while end < bytes.len()
                    && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_')
                {
                    end += 1;
                }
                let name = text[i..end].to_string();
                i = end;
                tokens.push(Token { kind: TokenKind::Ident(name), position });
            }

            _ => {
                // Not necessarily a single byte: recover the full character for the report.
                let character = text[i..].chars().next().unwrap_or('\u{FFFD}');
                return Err(ErrorKind::from(LexError::UnrecognizedCharacter {
                    character,
                    position,
                }));
            }
        }
    }

    log::trace!(target: targets::LEX, "{} tokens from {} bytes", tokens.len(), bytes.len());

    Ok(tokens)
}

/// Scans the inside of a modal bracket: an optional identifier followed by the closing character.
/// Returns the label and the index past the close, or None if the bracket is malformed.
fn scan_bracket(bytes: &[u8], start: usize, close: u8) -> Option<(Option<String>, usize)> {
    let mut i = start;

    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
        i += 1;
    }

    let label = if i > start {
        if !bytes[start].is_ascii_alphabetic() {
            return None;
        }
        // The scanned range is ASCII throughout.
        Some(String::from_utf8_lossy(&bytes[start..i]).into_owned())
    } else {
        None
    };

    match bytes.get(i) {
        Some(&c) if c == close => Some((label, i + 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_brackets_and_iff_disambiguate() {
        let tokens = tokenize("<> <a> <-> [] [b]").unwrap();
        let kinds = tokens.into_iter().map(|t| t.kind).collect::<Vec<_>>();

        assert_eq!(
            kinds,
            vec![
                TokenKind::Possibility(None),
                TokenKind::Possibility(Some("a".to_string())),
                TokenKind::Iff,
                TokenKind::Necessity(None),
                TokenKind::Necessity(Some("b".to_string())),
            ]
        );
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = tokenize("p  -> q").unwrap();

        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 3);
        assert_eq!(tokens[2].position, 6);
    }

    #[test]
    fn a_lone_minus_is_not_a_token() {
        let error = tokenize("p - q").unwrap_err();

        assert_eq!(
            error,
            ErrorKind::Lex(LexError::UnrecognizedCharacter { character: '-', position: 2 })
        );
    }

    #[test]
    fn agent_labels_are_identifiers() {
        assert!(tokenize("[1]p").is_err());
        assert!(tokenize("<a b>p").is_err());
        assert!(tokenize("[agent_2]p").is_ok());
    }
}
