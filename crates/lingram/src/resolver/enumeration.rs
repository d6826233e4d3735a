//! Enumeration: joining a list of sub-atoms with position-sensitive
//! connectors.
//!
//! Connector slots: 0 is the "nothing" phrase for an empty list, 1 opens,
//! 2 joins interior entries, 3 closes. Slot choice is clamped to the
//! connector set's length, so a two-slot set degrades gracefully.

use crate::locale::LocaleContext;
use crate::types::{Atom, Connector, ConnectorPiece};

pub(crate) fn resolve(list: &[Atom], connectors: &[Connector], ctx: &LocaleContext) -> String {
    if connectors.is_empty() {
        // No connector set at all: plain concatenation.
        return list
            .iter()
            .map(|entry| super::resolve_text(entry, ctx, None))
            .collect();
    }
    if list.is_empty() {
        return render(&connectors[0], None, ctx);
    }
    let last = list.len() - 1;
    let mut out = String::new();
    for (i, entry) in list.iter().enumerate() {
        let slot = if i == 0 {
            1
        } else if i == last {
            3
        } else {
            2
        };
        let slot = slot.min(connectors.len() - 1);
        out.push_str(&render(&connectors[slot], Some(entry), ctx));
    }
    out
}

/// Resolve one connector with `entry` substituted at its `$` slots.
/// Embedded atoms see the entry as their preceding atom, enabling
/// agreement with the word being joined.
fn render(connector: &Connector, entry: Option<&Atom>, ctx: &LocaleContext) -> String {
    let mut out = String::new();
    for piece in &connector.pieces {
        match piece {
            ConnectorPiece::Literal(text) => out.push_str(text),
            ConnectorPiece::Slot => {
                if let Some(entry) = entry {
                    out.push_str(&super::resolve_text(entry, ctx, None));
                }
            }
            ConnectorPiece::Atom(atom) => {
                out.push_str(&super::resolve_text(atom, ctx, entry));
            }
        }
    }
    out
}
