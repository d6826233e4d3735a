//! Lexical scanner for the mini-language, built from winnow parsers.
//!
//! Handles:
//! - Balanced `[...]`/`(...)` group extraction with backslash escaping
//! - The top-level `|` array parser (brackets carried raw, parens nested)
//! - The raw segment splitter used for `/`-separated operator sequences
//!
//! Scanners backtrack without consuming input when they do not match, so
//! callers can treat "no bracket here" and "bracket never closed" alike as
//! "no operators" rather than as errors.

use winnow::combinator::{alt, preceded, repeat, separated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, none_of, one_of, rest};

use crate::types::ArrayValue;

/// Extract the body of a balanced `[...]` group at the cursor.
///
/// The cursor must sit on the opening bracket. On success the returned
/// slice is the body with the delimiters stripped, and the cursor has
/// advanced past the matching closer. Nested same-type delimiters are
/// counted; a backslash-escaped delimiter does not affect nesting. If the
/// input ends before nesting returns to zero, the parser backtracks
/// without consuming anything.
pub fn bracket_body<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    balanced_body(input, '[', ']')
}

/// Extract the body of a balanced `(...)` group at the cursor.
pub fn paren_body<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    balanced_body(input, '(', ')')
}

/// Depth-counting leaf parser behind [`bracket_body`] and [`paren_body`].
fn balanced_body<'i>(input: &mut &'i str, open: char, close: char) -> ModalResult<&'i str> {
    let src = *input;
    let mut chars = src.char_indices();
    match chars.next() {
        Some((_, c)) if c == open => {}
        _ => return Err(ErrMode::Backtrack(ContextError::new())),
    }
    let mut depth = 1usize;
    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                let body = &src[open.len_utf8()..i];
                *input = &src[i + close.len_utf8()..];
                return Ok(body);
            }
        }
    }
    // End of input with nesting unresolved: malformed, signalled as no match.
    Err(ErrMode::Backtrack(ContextError::new()))
}

/// A raw balanced `[...]` group, delimiters and escapes included.
pub(crate) fn bracket_group<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    bracket_body.take().parse_next(input)
}

/// A raw balanced `(...)` group, delimiters and escapes included.
fn paren_group<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    paren_body.take().parse_next(input)
}

/// An opener whose group never closes swallows the rest of the input, so
/// separators inside the unterminated group cannot split.
fn unclosed_group<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (one_of(['[', '(']), rest).take().parse_next(input)
}

/// A backslash escape pair, kept raw.
fn escape_pair<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded('\\', any).take().parse_next(input)
}

/// Remove backslash escapes from a raw scalar.
pub fn unescape(raw: &str) -> String {
    let mut input = raw;
    let parsed: ModalResult<String> =
        repeat(0.., alt((preceded('\\', any), any))).parse_next(&mut input);
    parsed.unwrap_or_default()
}

/// Split `raw` at top-level occurrences of `sep`, honoring backslash
/// escapes and skipping separators inside nested `[...]` or `(...)`
/// groups. Segments are returned raw (escapes intact) for further parsing.
pub fn split_unescaped<'i>(raw: &'i str, sep: char) -> Vec<&'i str> {
    let mut input = raw;
    let parsed: ModalResult<Vec<&'i str>> = separated(
        1..,
        |input: &mut &'i str| raw_segment(input, sep),
        sep,
    )
    .parse_next(&mut input);
    parsed.unwrap_or_else(|_| vec![raw])
}

/// One raw segment: everything up to a top-level unescaped separator.
fn raw_segment<'i>(input: &mut &'i str, sep: char) -> ModalResult<&'i str> {
    repeat::<_, _, (), _, _>(
        0..,
        alt((
            escape_pair,
            bracket_group,
            paren_group,
            unclosed_group,
            none_of(sep).take(),
        )),
    )
    .take()
    .parse_next(input)
}

/// Split a raw value on top-level `|` separators.
///
/// A `|` inside a nested `[...]` group stays part of its element (the
/// bracket group is carried raw, escapes included, for later re-parsing);
/// a `(...)` group is recursed into and pushed as a nested sequence.
/// Scalar text has its escapes removed.
pub fn parse_array(raw: &str) -> Vec<ArrayValue> {
    let mut input = raw;
    let parsed: ModalResult<Vec<ArrayValue>> =
        separated(1.., element, '|').parse_next(&mut input);
    parsed.unwrap_or_else(|_| vec![ArrayValue::Str(String::new())])
}

/// A fragment of one array element.
enum Piece<'i> {
    /// An unescaped scalar character.
    Text(char),
    /// A raw slice carried verbatim (a bracket group).
    Raw(&'i str),
    /// A parenthesized sub-list, already parsed.
    Nested(Vec<ArrayValue>),
}

/// One array element, assembled from its fragments.
fn element(input: &mut &str) -> ModalResult<ArrayValue> {
    repeat(0.., element_piece).map(assemble).parse_next(input)
}

fn element_piece<'i>(input: &mut &'i str) -> ModalResult<Piece<'i>> {
    alt((
        preceded('\\', any).map(Piece::Text),
        bracket_group.map(Piece::Raw),
        // An unterminated bracket swallows the rest of the element source.
        ('[', rest).take().map(Piece::Raw),
        paren_body.map(|body| Piece::Nested(parse_array(body))),
        none_of('|').map(Piece::Text),
    ))
    .parse_next(input)
}

fn assemble(pieces: Vec<Piece<'_>>) -> ArrayValue {
    let mut buf = String::new();
    let mut nested: Option<Vec<ArrayValue>> = None;
    for piece in pieces {
        match piece {
            Piece::Text(c) => buf.push(c),
            Piece::Raw(raw) => buf.push_str(raw),
            Piece::Nested(items) => nested = Some(items),
        }
    }
    match nested {
        Some(items) if buf.is_empty() => ArrayValue::List(items),
        Some(mut items) => {
            // Stray text around a parenthesized group: keep both.
            items.push(ArrayValue::Str(buf));
            ArrayValue::List(items)
        }
        None => ArrayValue::Str(buf),
    }
}
