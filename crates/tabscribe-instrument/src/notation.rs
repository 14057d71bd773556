//! Riff notation parsing.
//!
//! One riff per line, whitespace-separated tokens:
//!
//! - `-` — rest column, `|` — bar line,
//! - `e12` — pluck fret 12 on string `e`,
//! - `e3,B0,G0` — chord, frets sounded together in one column.
//!
//! Lines starting with `#` are comments and parse to no ops.

use tabscribe_core::StringId;

/// One parsed notation token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// One or more frets sounded in a single column.
    Notes(Vec<(StringId, u8)>),
    /// An empty column on every string.
    Rest,
    /// A bar line on every string.
    Bar,
}

/// Error type for riff notation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    /// The token names a string the instrument does not have.
    #[error("unknown string '{0}'")]
    UnknownString(char),

    /// The fret part of a note is missing or not a number in 0..=255.
    #[error("bad fret in token '{0}'")]
    BadFret(String),

    /// A chord contains an empty note.
    #[error("empty note in token '{0}'")]
    EmptyNote(String),
}

/// Parse one riff line against the given string ordering.
///
/// Blank lines and comment lines parse to an empty op list.
pub fn parse_line(line: &str, order: &[StringId]) -> Result<Vec<Op>, NotationError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Vec::new());
    }
    line.split_whitespace()
        .map(|token| parse_token(token, order))
        .collect()
}

/// Parse a single token.
pub fn parse_token(token: &str, order: &[StringId]) -> Result<Op, NotationError> {
    match token {
        "-" => Ok(Op::Rest),
        "|" => Ok(Op::Bar),
        _ => {
            let mut notes = Vec::new();
            for note in token.split(',') {
                if note.is_empty() {
                    return Err(NotationError::EmptyNote(token.to_string()));
                }
                notes.push(parse_note(note, token, order)?);
            }
            Ok(Op::Notes(notes))
        }
    }
}

fn parse_note(
    note: &str,
    token: &str,
    order: &[StringId],
) -> Result<(StringId, u8), NotationError> {
    let mut chars = note.chars();
    let label = chars
        .next()
        .ok_or_else(|| NotationError::EmptyNote(token.to_string()))?;
    if !label.is_ascii() {
        return Err(NotationError::UnknownString(label));
    }
    let id = StringId::new(label as u8);
    if !order.contains(&id) {
        return Err(NotationError::UnknownString(label));
    }
    let fret: u8 = chars
        .as_str()
        .parse()
        .map_err(|_| NotationError::BadFret(token.to_string()))?;
    Ok((id, fret))
}
