//! Atom resolution engine.
//!
//! Turns a localized atom plus a locale context into a string through a
//! fixed strategy order: locale functions, strict alternation, measurement,
//! enumeration, fallback alternation, then plain fields. The engine never
//! fails during normal evaluation; the worst case is the locale's
//! configured undefined placeholder.

mod alternation;
mod enumeration;
mod functions;
mod localize;
mod measure;

pub use functions::FnOutcome;

use crate::filters;
use crate::locale::LocaleContext;
use crate::types::{Atom, Count, EnumSpec, fmt_f64};

/// Outcome of resolving one atom.
#[derive(Debug, Clone)]
pub enum Resolved {
    /// Final output text.
    Text(String),
    /// The atom carried the `+` flag and was returned unresolved so the
    /// caller can fold it into the next atom in sequence.
    Deferred(Atom),
}

impl Resolved {
    /// Final text, rendering a deferred atom as the empty string.
    pub fn into_text(self) -> String {
        match self {
            Resolved::Text(text) => text,
            Resolved::Deferred(_) => String::new(),
        }
    }
}

/// Resolve an atom against a locale context.
///
/// The dictionary atom behind `atom` is never mutated: resolution clones
/// into an owned working copy once, localizes it, and applies every
/// strategy to the copy. `preceding` is the previously resolved atom in
/// the sentence, made available to locale functions for agreement.
pub fn resolve(atom: &Atom, ctx: &LocaleContext, preceding: Option<&Atom>) -> Resolved {
    let mut work = localize::localize(atom.clone(), ctx);
    normalize_count(&mut work);
    if work.carry {
        return Resolved::Deferred(work);
    }
    if let Some(final_text) = functions::dispatch(&mut work, ctx, preceding) {
        return Resolved::Text(finish(final_text, &work, ctx));
    }
    // A replacement atom from a function may carry a fresh key.
    if !work.localized {
        work = localize::localize(work, ctx);
    }
    normalize_count(&mut work);
    let body = select(&work, ctx);
    Resolved::Text(finish(body, &work, ctx))
}

/// Resolve an atom to plain text; deferred atoms render as empty.
pub fn resolve_text(atom: &Atom, ctx: &LocaleContext, preceding: Option<&Atom>) -> String {
    resolve(atom, ctx, preceding).into_text()
}

/// Normalize the count field: a count absent but derivable from `list`
/// becomes the sum of the entries' own counts.
fn normalize_count(atom: &mut Atom) {
    if atom.count.is_none() {
        atom.count = atom.effective_count();
    }
}

/// Strategy selection in fixed priority order, first success wins.
fn select(atom: &Atom, ctx: &LocaleContext) -> String {
    let has_alternation = atom.alt.is_some() && !atom.ord.is_empty();

    if has_alternation {
        if let Some(text) = alternation::resolve(atom, ctx, alternation::Strictness::Strict) {
            return text;
        }
    }

    // An empty `unit_forms` still selects measurement (yielding the empty
    // string); only a missing or non-finite count declines the strategy.
    if !atom.unit_values.is_empty() {
        if let Some(count) = atom.count.filter(|c| !c.is_infinite()) {
            return measure::resolve(count.as_f64(), atom, ctx);
        }
    }

    if let Some(spec) = &atom.enumeration {
        return enumeration::resolve(&atom.list, connectors_for(spec, ctx), ctx);
    }

    if has_alternation {
        if let Some(text) = alternation::resolve(atom, ctx, alternation::Strictness::Fallback) {
            return text;
        }
    }

    if let Some(text) = &atom.literal {
        return text.clone();
    }
    if let Some(key) = &atom.key {
        return key.clone();
    }
    if let Some(count) = atom.count {
        return display_count(count, ctx);
    }
    if let Some(b) = atom.boolean {
        return if b { ctx.true_text() } else { ctx.false_text() }.to_string();
    }
    if let Some(fallback) = &atom.fallback {
        return fallback.clone();
    }
    ctx.undefined_text().to_string()
}

/// Apply pre-filters, wrap with accumulated prefix/suffix text, then apply
/// post-filters. Prefix/suffix wrapping always happens after the chosen
/// strategy has produced its result.
fn finish(body: String, atom: &Atom, ctx: &LocaleContext) -> String {
    let mut out = body;
    for directive in &atom.pre_filters {
        out = filters::apply(&directive.id, directive.params.as_deref(), &out, ctx);
    }
    if !atom.before.is_empty() || !atom.after.is_empty() {
        out = format!("{}{}{}", atom.before, out, atom.after);
    }
    for directive in &atom.post_filters {
        out = filters::apply(&directive.id, directive.params.as_deref(), &out, ctx);
    }
    out
}

fn display_count(count: Count, ctx: &LocaleContext) -> String {
    match count {
        Count::Int(n) => n.to_string(),
        Count::Float(f) => fmt_f64(f),
        Count::Infinite => ctx.infinity_text().to_string(),
    }
}

/// Connector set selected by an enumeration spec.
pub(crate) fn connectors_for<'a>(
    spec: &'a EnumSpec,
    ctx: &'a LocaleContext,
) -> &'a [crate::types::Connector] {
    match spec {
        EnumSpec::Default => ctx.connectors(),
        EnumSpec::Connectors(connectors) => connectors,
    }
}
