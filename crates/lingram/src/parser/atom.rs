//! Operator parser for atom bracket bodies.
//!
//! An atom source is a translatable prefix followed by one `[...]` body.
//! The body is a `/`-separated operator sequence: `key:value` pairs,
//! `key?` alternation aliases, bare `+`/`x` flags, filter directives, and
//! anything unrecognized becomes a named locale-function call (the
//! mini-language's extension point).

use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, none_of, one_of, rest};

use crate::filters;
use crate::types::{
    ArrayValue, Article, Atom, Connector, ConnectorPiece, Count, EnumSpec, FilterDirective,
    FnCall, Gender, OrdKey, Person, UnitMode,
};

use super::ParseError;
use super::scanner::{bracket_body, bracket_group, parse_array, split_unescaped, unescape};

/// Parse an atom source string.
///
/// Everything before the first unescaped `[` is the translatable prefix
/// and becomes the atom's key. Parsing is permissive: a missing or
/// never-closed bracket body simply yields an atom with no operators.
///
/// # Example
///
/// ```
/// use lingram::parse_atom;
///
/// let atom = parse_atom("pomme[n?|s]");
/// assert_eq!(atom.key.as_deref(), Some("pomme"));
/// assert!(atom.alt.is_some());
/// ```
pub fn parse_atom(source: &str) -> Atom {
    let mut atom = Atom::default();
    let mut input = source;
    if let Ok(prefix) = key_prefix(&mut input) {
        let key = unescape(prefix);
        if !key.is_empty() {
            atom.key = Some(key);
        }
    }
    if let Ok(body) = bracket_body(&mut input) {
        parse_body(body, &mut atom);
    }
    atom
}

/// Parse an atom from raw bytes.
///
/// This is the strict entry point: input that is not valid UTF-8 fails
/// fast instead of being coerced.
pub fn parse_atom_bytes(bytes: &[u8]) -> Result<Atom, ParseError> {
    let source = std::str::from_utf8(bytes)?;
    Ok(parse_atom(source))
}

/// Parse a bare operator body (no prefix, no delimiters) into an atom.
pub(crate) fn parse_atom_body(body: &str) -> Atom {
    let mut atom = Atom::default();
    parse_body(body, &mut atom);
    atom
}

/// The translatable prefix: everything before the first unescaped `[`.
fn key_prefix<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    repeat::<_, _, (), _, _>(0.., alt((preceded('\\', any).void(), none_of('[').void())))
        .take()
        .parse_next(input)
}

fn parse_body(body: &str, atom: &mut Atom) {
    for op in split_unescaped(body, '/') {
        parse_operator(op, atom);
    }
}

fn parse_operator(op: &str, atom: &mut Atom) {
    match op {
        "" => return,
        "+" => {
            atom.carry = true;
            return;
        }
        "x" => {
            atom.raw = true;
            return;
        }
        _ => {}
    }

    let mut cur = op;
    match operator_parts(&mut cur) {
        Ok((alias, Some('?'), tree)) => {
            // Alternation alias: the remainder after `?` is the tree.
            if let Some(ord) = alias_ord(alias) {
                atom.ord = ord;
                atom.alt = Some(parse_array(tree));
            } else {
                let args = if tree.is_empty() {
                    Vec::new()
                } else {
                    parse_array(tree)
                };
                atom.fns.push(FnCall {
                    name: format!("{alias}?"),
                    args,
                });
            }
        }
        Ok((key, Some(_), raw)) => apply_keyed(key, raw, atom),
        Ok((key, None, _)) => apply_bare(key, atom),
        Err(_) => {}
    }
}

/// Split an operator at its first unescaped `?` or `:` terminator. The
/// key and value are returned raw (escapes intact).
fn operator_parts<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<char>, &'i str)> {
    let key = repeat::<_, _, (), _, _>(
        0..,
        alt((preceded('\\', any).void(), none_of(['?', ':']).void())),
    )
    .take()
    .parse_next(input)?;
    let terminator = opt(one_of(['?', ':'])).parse_next(input)?;
    let value = rest.parse_next(input)?;
    Ok((key, terminator, value))
}

/// Map a closed alternation alias to its ordered field sequence.
///
/// `""` and `"b"` select the boolean; otherwise the alias is a run of
/// field letters, with `n0` as the offset-free count variant (`npg`,
/// `n0g`, ...). Anything else is not an alias.
fn alias_ord(alias: &str) -> Option<Vec<OrdKey>> {
    if alias.is_empty() {
        return Some(vec![OrdKey::Bool]);
    }
    let mut keys = Vec::new();
    let mut remaining = alias;
    while !remaining.is_empty() {
        if let Some(tail) = remaining.strip_prefix("n0") {
            keys.push(OrdKey::CountZero);
            remaining = tail;
        } else if let Some(tail) = remaining.strip_prefix('n') {
            keys.push(OrdKey::Count);
            remaining = tail;
        } else if let Some(tail) = remaining.strip_prefix('b') {
            keys.push(OrdKey::Bool);
            remaining = tail;
        } else if let Some(tail) = remaining.strip_prefix('a') {
            keys.push(OrdKey::Prop("a".to_string()));
            remaining = tail;
        } else if let Some(tail) = remaining.strip_prefix('g') {
            keys.push(OrdKey::Prop("g".to_string()));
            remaining = tail;
        } else if let Some(tail) = remaining.strip_prefix('p') {
            keys.push(OrdKey::Prop("p".to_string()));
            remaining = tail;
        } else {
            return None;
        }
    }
    Some(keys)
}

fn apply_keyed(key: &str, raw: &str, atom: &mut Atom) {
    match key {
        "k" => atom.key = Some(unescape(raw)),
        "l" => {
            let lang = unescape(raw);
            atom.lang = (!lang.is_empty()).then_some(lang);
        }
        "s" => atom.literal = Some(unescape(raw)),
        // Coercion failure clears the count to absent, never to zero.
        "n" => atom.count = Count::parse(&unescape(raw)),
        "g" => atom.gender = Gender::parse(&unescape(raw)),
        "p" => {
            let value = unescape(raw);
            atom.person = Some(if value.trim().is_empty() {
                Person::Third
            } else {
                Person::parse(&value).unwrap_or(Person::Third)
            });
        }
        "a" => atom.article = Article::parse(&unescape(raw)),
        "b" => atom.boolean = Some(parse_bool(&unescape(raw))),
        "d" | "def" | "default" => atom.fallback = Some(unescape(raw)),
        "um" => atom.unit_mode = UnitMode::parse(&unescape(raw)),
        "alt" => atom.alt = Some(parse_array(raw)),
        "ord" => {
            atom.ord = parse_array(raw)
                .iter()
                .filter_map(ArrayValue::as_str)
                .map(OrdKey::parse)
                .collect();
        }
        "list" => atom.list = parse_array(raw).into_iter().map(coerce_entry).collect(),
        "uv" => {
            atom.unit_values = parse_array(raw)
                .iter()
                .filter_map(ArrayValue::as_str)
                .filter_map(|s| s.trim().parse::<f64>().ok())
                .collect();
        }
        "uf" => atom.unit_forms = parse_array(raw).into_iter().map(coerce_entry).collect(),
        "uenum" => {
            atom.unit_enum = Some(
                split_unescaped(raw, '|')
                    .into_iter()
                    .map(connector_from_str)
                    .collect(),
            );
        }
        "enum" => atom.enumeration = parse_enum_spec(raw),
        id if filters::stage(id).is_some() => push_filter(id, Some(unescape(raw)), atom),
        _ => atom.fns.push(FnCall {
            name: key.to_string(),
            args: parse_array(raw),
        }),
    }
}

fn apply_bare(key: &str, atom: &mut Atom) {
    match key {
        // `p` with no value defaults to third person.
        "p" => atom.person = Some(Person::Third),
        "enum" => atom.enumeration = Some(EnumSpec::Default),
        id if filters::stage(id).is_some() => push_filter(id, None, atom),
        _ => atom.fns.push(FnCall {
            name: key.to_string(),
            args: Vec::new(),
        }),
    }
}

fn push_filter(id: &str, params: Option<String>, atom: &mut Atom) {
    let directive = FilterDirective {
        id: id.to_string(),
        params,
    };
    match filters::stage(id) {
        Some(filters::FilterStage::Pre) => atom.pre_filters.push(directive),
        _ => atom.post_filters.push(directive),
    }
}

fn parse_bool(raw: &str) -> bool {
    !matches!(raw.trim(), "" | "0" | "false" | "no")
}

fn parse_enum_spec(raw: &str) -> Option<EnumSpec> {
    match raw.trim() {
        "" | "1" | "true" => Some(EnumSpec::Default),
        "0" | "false" => None,
        _ => Some(EnumSpec::Connectors(
            split_unescaped(raw, '|')
                .into_iter()
                .map(connector_from_str)
                .collect(),
        )),
    }
}

/// Coerce an array element into a sub-atom.
///
/// Elements carrying a bracket body are parsed as nested templates; pure
/// numbers (and the infinite sentinel) become count-only atoms, so a
/// numeric list sums naturally; everything else is a translatable key.
/// Nested sequences become list atoms.
pub(crate) fn coerce_entry(value: ArrayValue) -> Atom {
    match value {
        ArrayValue::Str(s) => {
            if s.contains('[') {
                parse_atom(&s)
            } else if let Some(count) = numeric_count(&s) {
                Atom {
                    count: Some(count),
                    ..Atom::default()
                }
            } else {
                parse_atom(&s)
            }
        }
        ArrayValue::List(items) => Atom {
            list: items.into_iter().map(coerce_entry).collect(),
            ..Atom::default()
        },
    }
}

fn numeric_count(s: &str) -> Option<Count> {
    let trimmed = s.trim();
    if trimmed == "*" || trimmed.parse::<f64>().is_ok() {
        Count::parse(trimmed)
    } else {
        None
    }
}

/// Parse a connector template from raw source: literal text, `$` entry
/// slots, embedded `[...]` atoms, and backslash escapes (`\$` is a
/// literal dollar, not a slot).
pub(crate) fn connector_from_str(s: &str) -> Connector {
    let mut input = s;
    let parsed: ModalResult<Vec<ConnectorPiece>> =
        repeat(0.., connector_piece).parse_next(&mut input);
    Connector {
        pieces: merge_literals(parsed.unwrap_or_default()),
    }
}

fn connector_piece(input: &mut &str) -> ModalResult<ConnectorPiece> {
    alt((
        preceded('\\', any).map(|c: char| ConnectorPiece::Literal(c.to_string())),
        '$'.value(ConnectorPiece::Slot),
        bracket_group.map(|raw| ConnectorPiece::Atom(parse_atom(raw))),
        any.map(|c: char| ConnectorPiece::Literal(c.to_string())),
    ))
    .parse_next(input)
}

/// Merge adjacent literal pieces into single pieces.
fn merge_literals(pieces: Vec<ConnectorPiece>) -> Vec<ConnectorPiece> {
    let mut merged: Vec<ConnectorPiece> = Vec::with_capacity(pieces.len());
    for piece in pieces {
        match piece {
            ConnectorPiece::Literal(text) => {
                if let Some(ConnectorPiece::Literal(prev)) = merged.last_mut() {
                    prev.push_str(&text);
                } else {
                    merged.push(ConnectorPiece::Literal(text));
                }
            }
            other => merged.push(other),
        }
    }
    merged
}
