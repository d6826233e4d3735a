//! Minimal sentence layer over the atom resolver.
//!
//! A winnow segment parser splits a template into literal text, `$N`
//! argument references (with an optional attached `[...]` operator body),
//! and standalone `[...]` atoms; the render walk then resolves each
//! placeholder in order. A deferred (`+`) atom is held back and folded
//! into the next placeholder: the two exchange missing agreement fields,
//! the deferred word renders first, and it is passed as the preceding
//! atom of its neighbor.

use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::any;

use crate::locale::LocaleContext;
use crate::parser::{parse_atom_body, scanner};
use crate::resolver::{Resolved, resolve};
use crate::types::Atom;

/// One parsed template segment.
enum Segment {
    Literal(char),
    Argument { index: usize, overlay: Option<Atom> },
    Inline(Atom),
}

/// A deferred atom plus the literal text seen since it was deferred. The
/// literal is replayed between the deferred word and its neighbor so both
/// render in their template positions.
struct Pending {
    atom: Atom,
    held: String,
}

/// Format a sentence template with positional arguments.
///
/// `$1` resolves the first argument as-is; `$1[...]` overlays the bracket
/// body's operators onto that argument and resolves only the overlay (the
/// idiom behind plural suffixes like `apple$1[n?|s]`).
///
/// # Example
///
/// ```
/// use lingram::{LocaleContext, sentence};
///
/// let ctx = LocaleContext::new("en");
/// let out = sentence::format("Give me $1 apple$1[n?|s]!", &[2.into()], &ctx);
/// assert_eq!(out, "Give me 2 apples!");
/// ```
pub fn format(template: &str, args: &[Atom], ctx: &LocaleContext) -> String {
    let mut input = template;
    let parsed: ModalResult<Vec<Segment>> = repeat(0.., segment).parse_next(&mut input);
    let segments = parsed.unwrap_or_default();

    let mut out = String::new();
    let mut pending: Option<Pending> = None;
    for segment in segments {
        match segment {
            Segment::Literal(c) => push_literal(c, &mut pending, &mut out),
            Segment::Argument { index, overlay } => {
                let argument = index
                    .checked_sub(1)
                    .and_then(|i| args.get(i))
                    .cloned()
                    .unwrap_or_default();
                let atom = match overlay {
                    Some(body) => body.overlaid_on(&argument),
                    None => argument,
                };
                emit(atom, &mut pending, &mut out, ctx);
            }
            Segment::Inline(atom) => emit(atom, &mut pending, &mut out, ctx),
        }
    }
    // A deferred atom with no following word still has to surface.
    if let Some(Pending { mut atom, held }) = pending {
        atom.carry = false;
        out.push_str(&resolve(&atom, ctx, None).into_text());
        out.push_str(&held);
    }
    out
}

/// Parse a single segment (escape, argument reference, inline atom, or
/// literal character).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_char, argument, inline_atom, literal_char)).parse_next(input)
}

fn escape_char(input: &mut &str) -> ModalResult<Segment> {
    preceded('\\', any).map(Segment::Literal).parse_next(input)
}

/// `$N`, optionally followed by an attached `[...]` operator body.
fn argument(input: &mut &str) -> ModalResult<Segment> {
    let index = preceded('$', digit1)
        .try_map(str::parse::<usize>)
        .parse_next(input)?;
    let overlay = opt(scanner::bracket_body.map(parse_atom_body)).parse_next(input)?;
    Ok(Segment::Argument { index, overlay })
}

fn inline_atom(input: &mut &str) -> ModalResult<Segment> {
    scanner::bracket_body
        .map(|body| Segment::Inline(parse_atom_body(body)))
        .parse_next(input)
}

/// A `$` without digits or an unterminated `[` falls through to here.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(Segment::Literal).parse_next(input)
}

/// Literal text lands in the output, or behind a pending deferral.
fn push_literal(c: char, pending: &mut Option<Pending>, out: &mut String) {
    match pending {
        Some(p) => p.held.push(c),
        None => out.push(c),
    }
}

/// Resolve one placeholder atom, folding in a pending deferred atom.
fn emit(atom: Atom, pending: &mut Option<Pending>, out: &mut String, ctx: &LocaleContext) {
    let mut atom = atom;
    if let Some(Pending {
        atom: mut deferred,
        held,
    }) = pending.take()
    {
        deferred.carry = false;
        // Agreement flows both ways across the fold.
        deferred.fill_missing_grammar(&atom);
        atom.fill_missing_grammar(&deferred);
        out.push_str(&resolve(&deferred, ctx, Some(&atom)).into_text());
        out.push_str(&held);
        match resolve(&atom, ctx, Some(&deferred)) {
            Resolved::Text(text) => out.push_str(&text),
            Resolved::Deferred(next) => {
                *pending = Some(Pending {
                    atom: next,
                    held: String::new(),
                });
            }
        }
        return;
    }
    match resolve(&atom, ctx, None) {
        Resolved::Text(text) => out.push_str(&text),
        Resolved::Deferred(next) => {
            *pending = Some(Pending {
                atom: next,
                held: String::new(),
            });
        }
    }
}
