//! Reading a model from the `.kripke` text format.
//!
//! A model file is a sequence of statements, each terminated with a semicolon:
//!
//! ```none
//! # a two world model
//! W = {w0, w1};
//! R = {(w0, w1)};         # the default relation
//! R[a] = {(w0, w0)};      # the relation of agent a
//! V(p) = {w1};            # the worlds at which p is true
//! ```
//!
//! `#` begins a comment running to the end of the line.
//! A statement may span lines, and a line may carry several statements.
//! Worlds must be declared by a `W` statement before an `R` or `V` statement mentions them; a reference to an undeclared world fails with the world's name.

use std::io::BufRead;

use crate::{
    misc::log::targets,
    model::KripkeModel,
    structures::formula::Agent,
    types::err::{ErrorKind, ModelReadError},
};

/// Reads a model in the `.kripke` format.
///
/// ```rust
/// # use kripke_sat::model::read_model;
/// # use std::io::Write;
/// let mut source = vec![];
/// let _ = source.write(b"
/// W = {w0, w1};
/// R = {(w0, w1)};
/// V(p) = {w1};
/// ");
///
/// let model = read_model(source.as_slice()).unwrap();
/// assert_eq!(model.world_count(), 2);
/// ```
pub fn read_model(mut reader: impl BufRead) -> Result<KripkeModel, ErrorKind> {
    let mut model = KripkeModel::default();

    let mut buffer = String::with_capacity(256);
    let mut pending = String::new();
    let mut pending_line = 0;
    let mut line_counter = 0;
    let mut statement_counter = 0;

    loop {
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => {
                return Err(ErrorKind::from(ModelReadError::Read { line: line_counter + 1 }))
            }
        }

        let text = match buffer.split_once('#') {
            Some((head, _comment)) => head,
            None => buffer.as_str(),
        };

        if pending.trim().is_empty() && !text.trim().is_empty() {
            pending_line = line_counter;
        }
        pending.push_str(text);

        while let Some(split) = pending.find(';') {
            let statement = pending[..split].trim().to_string();
            pending = pending[split + 1..].to_string();

            if !statement.is_empty() {
                apply_statement(&statement, pending_line, &mut model)?;
                statement_counter += 1;
            }
            pending_line = line_counter;
        }

        buffer.clear();
    }

    if !pending.trim().is_empty() {
        return Err(ErrorKind::from(ModelReadError::Unterminated { line: pending_line }));
    }

    log::info!(
        target: targets::MODEL,
        "read {} worlds over {} statements",
        model.world_count(),
        statement_counter,
    );

    Ok(model)
}

fn apply_statement(
    statement: &str,
    line: usize,
    model: &mut KripkeModel,
) -> Result<(), ErrorKind> {
    let malformed = ErrorKind::from(ModelReadError::Statement { line });

    match statement.chars().next() {
        Some('W') => {
            let inner = brace_contents(after_equals(&statement[1..]).ok_or(malformed.clone())?)
                .ok_or(malformed.clone())?;

            for name in split_names(inner).ok_or(malformed)? {
                model.add_world(name);
            }

            Ok(())
        }

        Some('R') => {
            let rest = statement[1..].trim_start();

            let (agent, rest) = match rest.strip_prefix('[') {
                Some(bracketed) => {
                    let (label, tail) = bracketed.split_once(']').ok_or(malformed.clone())?;
                    let label = label.trim();
                    if label.is_empty() {
                        return Err(malformed);
                    }
                    (Agent::Named(label.to_string()), tail)
                }

                None => (Agent::Default, rest),
            };

            let inner = brace_contents(after_equals(rest).ok_or(malformed.clone())?)
                .ok_or(malformed.clone())?;

            for (from, to) in split_pairs(inner).ok_or(malformed)? {
                model.add_edge(agent.clone(), from, to)?;
            }

            Ok(())
        }

        Some('V') => {
            let rest = statement[1..].trim_start();
            let rest = rest.strip_prefix('(').ok_or(malformed.clone())?;
            let (proposition, rest) = rest.split_once(')').ok_or(malformed.clone())?;

            let proposition = proposition.trim();
            if proposition.is_empty() {
                return Err(malformed);
            }

            let inner = brace_contents(after_equals(rest).ok_or(malformed.clone())?)
                .ok_or(malformed.clone())?;

            model.add_valuation(proposition, split_names(inner).ok_or(malformed)?)?;

            Ok(())
        }

        _ => Err(malformed),
    }
}

/// The text following an `=`, or None if the text does not begin with one.
fn after_equals(text: &str) -> Option<&str> {
    text.trim_start().strip_prefix('=')
}

/// The text between enclosing braces, or None.
fn brace_contents(text: &str) -> Option<&str> {
    text.trim().strip_prefix('{')?.strip_suffix('}')
}

/// Splits `a, b, c` into names; the empty list is permitted, empty names are not.
fn split_names(inner: &str) -> Option<Vec<&str>> {
    if inner.trim().is_empty() {
        return Some(vec![]);
    }

    let mut names = Vec::new();
    for piece in inner.split(',') {
        let name = piece.trim();
        if name.is_empty() {
            return None;
        }
        names.push(name);
    }

    Some(names)
}

/// Splits `(a, b), (c, d)` into ordered pairs; the empty list is permitted.
fn split_pairs(inner: &str) -> Option<Vec<(&str, &str)>> {
    let mut rest = inner.trim();
    if rest.is_empty() {
        return Some(vec![]);
    }

    let mut pairs = Vec::new();
    loop {
        let body_and_tail = rest.trim_start().strip_prefix('(')?;
        let (body, tail) = body_and_tail.split_once(')')?;
        let (from, to) = body.split_once(',')?;

        let from = from.trim();
        let to = to.trim();
        if from.is_empty() || to.is_empty() {
            return None;
        }
        pairs.push((from, to));

        let tail = tail.trim_start();
        if tail.is_empty() {
            return Some(pairs);
        }
        rest = tail.strip_prefix(',')?;
    }
}
