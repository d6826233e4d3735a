//! Alternation-tree descent.
//!
//! `ord` names the fields consulted in order; `alt` is the correspondingly
//! nested branch array. Each level indexes the current branches by the
//! field's value: a terminal string returns early, a nested sequence
//! becomes the next level. Strict mode reports "undecided" when a required
//! field is missing; fallback mode substitutes defaults instead so the
//! engine always produces some string.

use crate::locale::LocaleContext;
use crate::types::{ArrayValue, Article, Atom, Count, Gender, OrdKey, Person};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strictness {
    /// Fail (return `None`) when a required field is missing.
    Strict,
    /// Substitute defaults for missing fields.
    Fallback,
}

pub(crate) fn resolve(atom: &Atom, ctx: &LocaleContext, strictness: Strictness) -> Option<String> {
    let alt = atom.alt.as_ref()?;
    let mut branches: &[ArrayValue] = alt;
    for key in &atom.ord {
        if branches.is_empty() {
            return None;
        }
        let index = branch_index(key, atom, ctx, branches.len(), strictness)?;
        match &branches[index] {
            ArrayValue::Str(text) => return Some(text.clone()),
            ArrayValue::List(inner) => branches = inner,
        }
    }
    // `ord` exhausted while still inside a branch level: take the first leaf.
    first_leaf(branches).map(ToString::to_string)
}

fn first_leaf(branches: &[ArrayValue]) -> Option<&str> {
    match branches.first()? {
        ArrayValue::Str(text) => Some(text),
        ArrayValue::List(inner) => first_leaf(inner),
    }
}

fn branch_index(
    key: &OrdKey,
    atom: &Atom,
    ctx: &LocaleContext,
    branch_count: usize,
    strictness: Strictness,
) -> Option<usize> {
    match key {
        OrdKey::Bool => {
            let truthy = match atom.boolean {
                Some(b) => b,
                None => match strictness {
                    Strictness::Strict => return None,
                    Strictness::Fallback => fallback_bool(atom),
                },
            };
            // Truthy selects branch 0.
            Some(clamp(if truthy { 0 } else { 1 }, branch_count))
        }
        OrdKey::Count | OrdKey::CountZero => {
            let offset = match key {
                OrdKey::CountZero => 0,
                _ => ctx.n_offset(),
            };
            let raw = match atom.count {
                Some(Count::Infinite) => i64::MAX,
                Some(count) => {
                    let rounded = count.as_f64().round();
                    if rounded.is_nan() {
                        0
                    } else {
                        (rounded.max(0.0) as i64).saturating_add(offset)
                    }
                }
                None => match strictness {
                    Strictness::Strict => return None,
                    // Missing count defaults to index 1, i.e. plural.
                    Strictness::Fallback => 1,
                },
            };
            Some(clamp(raw, branch_count))
        }
        OrdKey::Prop(field) => {
            let index = match prop_value(atom, field) {
                Some(value) => ctx.property_index(field, value).unwrap_or(0),
                None => match strictness {
                    Strictness::Strict => return None,
                    Strictness::Fallback => match atom.text_source() {
                        Some(text) => ctx.property_index(field, text).unwrap_or(0),
                        None => ctx.property_index(field, "default").unwrap_or(0),
                    },
                },
            };
            // A property index past the branch count wraps to 0.
            Some(if index >= branch_count { 0 } else { index })
        }
    }
}

/// Clamp into `[0, branch_count - 1]`, coercing negative artifacts to 0.
fn clamp(raw: i64, branch_count: usize) -> usize {
    let max = (branch_count - 1) as i64;
    raw.clamp(0, max) as usize
}

/// Boolean default when the field is absent: derived from the count when
/// one exists, otherwise from the presence of literal/key text.
fn fallback_bool(atom: &Atom) -> bool {
    match atom.count {
        Some(count) => count.is_infinite() || count.as_f64() != 0.0,
        None => atom.text_source().is_some_and(|s| !s.is_empty()),
    }
}

fn prop_value<'a>(atom: &'a Atom, field: &str) -> Option<&'a str> {
    match field {
        "g" => atom.gender.map(Gender::as_str),
        "p" => atom.person.map(Person::as_str),
        "a" => atom.article.map(Article::as_str),
        _ => None,
    }
}
