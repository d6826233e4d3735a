//! Post-processing string filters.
//!
//! Filters are pure string-to-string functions invoked by id after an atom
//! resolves. The built-in table below doubles as the static registration
//! the operator parser consults to recognize a filter directive and to
//! classify it as pre or post. Unknown ids pass the string through
//! unchanged, favoring forward compatibility over strictness.

use unicode_segmentation::UnicodeSegmentation;

use crate::locale::LocaleContext;

/// When a filter runs relative to prefix/suffix accumulation: `Pre` on the
/// strategy result, `Post` on the final wrapped string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStage {
    Pre,
    Post,
}

/// Filter function signature: input string and optional `id:params` text.
pub type FilterFn = fn(&str, Option<&str>) -> String;

const BUILTIN: &[(&str, FilterStage, FilterFn)] = &[
    ("cap", FilterStage::Post, cap as FilterFn),
    ("upper", FilterStage::Post, upper as FilterFn),
    ("lower", FilterStage::Post, lower as FilterFn),
    ("trim", FilterStage::Pre, trim as FilterFn),
];

/// Stage of a registered filter id, or `None` for unrecognized ids.
pub fn stage(id: &str) -> Option<FilterStage> {
    BUILTIN
        .iter()
        .find(|(name, _, _)| *name == id)
        .map(|(_, stage, _)| *stage)
}

/// Apply a filter by id: locale-registered filters first, then built-ins.
/// Unknown ids are silently ignored.
pub fn apply(id: &str, params: Option<&str>, input: &str, ctx: &LocaleContext) -> String {
    if let Some(f) = ctx.filter(id) {
        return f(input, params);
    }
    match BUILTIN.iter().find(|(name, _, _)| *name == id) {
        Some((_, _, f)) => f(input, params),
        None => input.to_string(),
    }
}

/// Uppercase the first grapheme cluster, leaving the rest untouched.
fn cap(input: &str, _params: Option<&str>) -> String {
    let mut graphemes = input.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + graphemes.as_str(),
        None => String::new(),
    }
}

fn upper(input: &str, _params: Option<&str>) -> String {
    input.to_uppercase()
}

fn lower(input: &str, _params: Option<&str>) -> String {
    input.to_lowercase()
}

fn trim(input: &str, _params: Option<&str>) -> String {
    input.trim().to_string()
}
