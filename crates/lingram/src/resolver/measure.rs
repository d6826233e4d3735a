//! Measurement: converting a scalar into a unit-based phrase.
//!
//! `unit_values` holds thresholds parallel to the `unit_forms` sub-atoms.
//! Three strategies exist: greedy decomposition (`N+`), nearest with a
//! penalty against rounding below the applicable unit (`R1+`), and plain
//! nearest (`R`). Each selected unit form is resolved with its quantity as
//! the count, and the quantity is printed in front of it.

use crate::locale::LocaleContext;
use crate::types::{Atom, Connector, Count, UnitMode, fmt_f64};

use super::enumeration;

pub(crate) fn resolve(value: f64, atom: &Atom, ctx: &LocaleContext) -> String {
    if atom.unit_forms.is_empty() {
        return String::new();
    }
    match atom.unit_mode {
        UnitMode::Greedy => greedy(value, atom, ctx),
        UnitMode::NearestAbove => nearest(value, atom, ctx, true),
        UnitMode::Nearest => nearest(value, atom, ctx, false),
    }
}

/// Iterate thresholds in the given order; every unit whose quotient
/// reaches 1 contributes its integer share and the remainder flows to the
/// next threshold. Units that do not fit are skipped, not zero-padded.
fn greedy(value: f64, atom: &Atom, ctx: &LocaleContext) -> String {
    let mut remaining = value;
    let mut phrases = Vec::new();
    for (i, &threshold) in atom.unit_values.iter().enumerate() {
        if threshold <= 0.0 {
            continue;
        }
        let Some(form) = atom.unit_forms.get(i) else {
            break;
        };
        let ratio = remaining / threshold;
        if ratio >= 1.0 {
            let quotient = ratio.floor();
            remaining -= quotient * threshold;
            phrases.push(Atom::text(unit_phrase(quotient, form, ctx)));
        }
    }
    enumeration::resolve(&phrases, unit_connectors(atom, ctx), ctx)
}

/// Pick the threshold minimizing the distance to the value and format the
/// quotient with the matching unit. With `penalize_below`, a value under a
/// threshold is pushed away by `2t - v` instead of `|v - t|`, preferring
/// not to round below the smallest applicable unit.
fn nearest(value: f64, atom: &Atom, ctx: &LocaleContext, penalize_below: bool) -> String {
    let mut best: Option<(f64, usize, f64)> = None;
    for (i, &threshold) in atom.unit_values.iter().enumerate() {
        if threshold <= 0.0 || atom.unit_forms.get(i).is_none() {
            continue;
        }
        let distance = if penalize_below {
            if value >= threshold {
                value - threshold
            } else {
                2.0 * threshold - value
            }
        } else {
            (value - threshold).abs()
        };
        if best.is_none_or(|(d, _, _)| distance < d) {
            best = Some((distance, i, threshold));
        }
    }
    match best {
        Some((_, i, threshold)) => unit_phrase(value / threshold, &atom.unit_forms[i], ctx),
        None => String::new(),
    }
}

/// Format one unit share: the quantity, then the unit form resolved with
/// that quantity as its count (so the form's own plural alternation works).
fn unit_phrase(quantity: f64, form: &Atom, ctx: &LocaleContext) -> String {
    let mut unit = form.clone();
    unit.count = Some(Count::from_f64(quantity));
    let text = super::resolve_text(&unit, ctx, None);
    format!("{}{}", fmt_f64(quantity), text)
}

fn unit_connectors<'a>(atom: &'a Atom, ctx: &'a LocaleContext) -> &'a [Connector] {
    if let Some(connectors) = &atom.unit_enum {
        return connectors;
    }
    if let Some(spec) = &atom.enumeration {
        return super::connectors_for(spec, ctx);
    }
    ctx.connectors()
}
