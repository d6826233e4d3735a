//! Locale-function dispatch.
//!
//! Functions recorded on an atom run before strategy selection. Each one
//! reports its effect through the tagged [`FnOutcome`] rather than by the
//! runtime type of its return value; a `Final` outcome ends resolution on
//! the spot. Unknown function names are silently skipped.

use std::mem;

use crate::locale::{FnEntry, LocaleContext};
use crate::types::Atom;

/// The tagged result of one locale-function invocation.
#[derive(Debug, Clone)]
pub enum FnOutcome {
    /// Keep resolving the (possibly mutated) atom.
    Continue(Atom),
    /// Resolve this replacement atom instead; it is re-localized if its
    /// dictionary lookup has not happened yet.
    Replace(Atom),
    /// Final output text; every remaining strategy is skipped.
    Final(String),
}

/// Run the atom's recorded function calls in order.
///
/// Returns `Some(text)` when a function short-circuits with a final
/// string; otherwise the atom has been rewritten in place and `None` is
/// returned so resolution continues.
pub(crate) fn dispatch(
    atom: &mut Atom,
    ctx: &LocaleContext,
    preceding: Option<&Atom>,
) -> Option<String> {
    let calls = mem::take(&mut atom.fns);
    for call in calls {
        let Some(entry) = ctx.function(&call.name) else {
            continue;
        };
        match entry {
            FnEntry::Merge(partial) => {
                *atom = partial.overlaid_on(atom);
            }
            FnEntry::Call(f) => match f(atom.clone(), &call.args, preceding, ctx) {
                FnOutcome::Continue(next) | FnOutcome::Replace(next) => *atom = next,
                FnOutcome::Final(text) => return Some(text),
            },
        }
    }
    None
}
