//! Localization merge.
//!
//! Before any strategy runs, an atom carrying a translation key is checked
//! against the active locale's dictionary. The dictionary entry is the
//! base and the atom's locally-set fields win; the entry itself is never
//! touched, merging always produces a fresh working atom.

use crate::locale::LocaleContext;
use crate::types::Atom;

/// Localize a working atom against the context's dictionary.
///
/// No-ops (but still marks the atom localized, so the lookup is not
/// repeated) when the atom has no key, carries the `x` raw flag, or
/// declares a source locale matching the active one.
pub(crate) fn localize(mut atom: Atom, ctx: &LocaleContext) -> Atom {
    if atom.localized {
        return atom;
    }
    atom.localized = true;

    if atom.raw || atom.lang.as_deref() == Some(ctx.locale()) {
        return atom;
    }
    let Some(key) = atom.key.clone() else {
        return atom;
    };
    let Some(entry) = ctx.atom(&key) else {
        return atom;
    };

    let mut merged = atom.overlaid_on(entry);
    // The local key was the lookup identity; a prefix-style dictionary
    // entry supplies the translated surface form through its own key.
    if entry.key.is_some() {
        merged.key = entry.key.clone();
    }
    merged.localized = true;
    merged
}
