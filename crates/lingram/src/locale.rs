//! Locale context: the read-only per-locale bundle consulted during
//! resolution.
//!
//! A [`LocaleContext`] owns the atom dictionary, the property index maps
//! that turn field values into alternation branch indexes, the numeric
//! offset, display strings, default enumeration connectors, and the
//! function and filter tables. It is constructed once, extended additively
//! while loading, and then passed by reference into every resolution call;
//! there is no ambient global registry.

use std::cell::RefCell;
use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::filters::FilterFn;
use crate::parser::{connector_from_str, parse_atom};
use crate::resolver::{FnOutcome, Resolved, resolve};
use crate::types::{ArrayValue, Atom, Connector};

/// Locale function signature.
///
/// Receives the working atom, the call's array-parsed arguments, the
/// previously resolved atom in the sentence (for agreement), and the
/// locale context. The tagged [`FnOutcome`] replaces the original's
/// "inspect the runtime type of the return value" convention.
pub type LocaleFn = fn(Atom, &[ArrayValue], Option<&Atom>, &LocaleContext) -> FnOutcome;

/// An entry in the locale function table: either a callable or a static
/// partial atom merged onto the working atom.
#[derive(Clone)]
pub enum FnEntry {
    Call(LocaleFn),
    Merge(Atom),
}

/// Per-locale grammar parameters and dictionary, in serializable form.
///
/// Functions are not serializable; callables are registered on the context
/// at runtime, while static merge entries can ride along here as
/// mini-language sources under `function_atoms`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSpec {
    /// Offset applied before indexing `n`-based alternation arrays.
    pub n_offset: Option<i64>,

    /// Field name -> raw value -> branch index, with a `"default"` slot.
    pub property_indexes: BTreeMap<String, BTreeMap<String, usize>>,

    /// Default enumeration connector templates
    /// (nothing / opening / middle / closing).
    pub connectors: Vec<String>,

    /// Display strings for plain boolean and unresolvable atoms.
    pub true_text: Option<String>,
    pub false_text: Option<String>,
    pub undefined_text: Option<String>,

    /// Display string for the infinite count.
    pub infinity_text: Option<String>,

    /// Dictionary: translation key -> canonical atom source.
    pub atoms: BTreeMap<String, String>,

    /// Static merge functions: name -> partial atom source.
    pub function_atoms: BTreeMap<String, String>,
}

/// The per-locale bundle consulted by parsing and resolution.
///
/// # Example
///
/// ```
/// use lingram::LocaleContext;
///
/// let mut ctx = LocaleContext::builder().locale("fr").build();
/// ctx.define("pomme", "pomme[g:f]");
/// assert_eq!(ctx.resolve_str("pomme"), "pomme");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct LocaleContext {
    /// Locale identifier (e.g. "en", "fr").
    #[builder(default = "en".to_string())]
    locale: String,

    /// Offset applied to `n`-indexed alternation (the `n` alias; `n0`
    /// always uses zero).
    #[builder(default = -1)]
    n_offset: i64,

    #[builder(default = "true".to_string())]
    true_text: String,

    #[builder(default = "false".to_string())]
    false_text: String,

    /// Output of last resort when no strategy and no plain field resolves.
    #[builder(default)]
    undefined_text: String,

    #[builder(default = "\u{221e}".to_string())]
    infinity_text: String,

    /// Default enumeration connectors.
    #[builder(default = default_connectors())]
    connectors: Vec<Connector>,

    /// Dictionary: translation key -> canonical atom. Entries are never
    /// mutated by resolution; lookups hand out read references only.
    #[builder(skip)]
    atoms: BTreeMap<String, Atom>,

    /// Field name -> raw value -> alternation branch index.
    #[builder(skip)]
    property_indexes: BTreeMap<String, BTreeMap<String, usize>>,

    #[builder(skip)]
    functions: BTreeMap<String, FnEntry>,

    #[builder(skip)]
    filters: BTreeMap<String, FilterFn>,

    /// Parsed-atom cache for `resolve_str`, keyed by source string.
    /// `RefCell` keeps the resolution API `&self`.
    #[builder(skip)]
    atom_cache: RefCell<BTreeMap<String, Atom>>,
}

fn default_connectors() -> Vec<Connector> {
    ["", "$", ", $", " and $"]
        .iter()
        .map(|s| connector_from_str(s))
        .collect()
}

impl Default for LocaleContext {
    fn default() -> Self {
        LocaleContext::builder().build()
    }
}

impl LocaleContext {
    /// Create a context for a locale with default parameters.
    pub fn new(locale: impl Into<String>) -> Self {
        LocaleContext::builder().locale(locale.into()).build()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn n_offset(&self) -> i64 {
        self.n_offset
    }

    pub fn true_text(&self) -> &str {
        &self.true_text
    }

    pub fn false_text(&self) -> &str {
        &self.false_text
    }

    pub fn undefined_text(&self) -> &str {
        &self.undefined_text
    }

    pub fn infinity_text(&self) -> &str {
        &self.infinity_text
    }

    /// Default enumeration connectors.
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    // =========================================================================
    // Dictionary
    // =========================================================================

    /// Define a dictionary atom from mini-language source.
    pub fn define(&mut self, key: impl Into<String>, source: &str) {
        self.atoms.insert(key.into(), parse_atom(source));
    }

    /// Insert an already-built dictionary atom.
    pub fn insert_atom(&mut self, key: impl Into<String>, atom: Atom) {
        self.atoms.insert(key.into(), atom);
    }

    /// Look up a dictionary atom by translation key.
    pub fn atom(&self, key: &str) -> Option<&Atom> {
        self.atoms.get(key)
    }

    // =========================================================================
    // Grammar parameters
    // =========================================================================

    /// Merge index entries for one field into the property index maps.
    pub fn set_property_index(
        &mut self,
        field: impl Into<String>,
        entries: impl IntoIterator<Item = (String, usize)>,
    ) {
        self.property_indexes
            .entry(field.into())
            .or_default()
            .extend(entries);
    }

    /// Branch index for a field value: the value's entry, else the field's
    /// `"default"` entry, else nothing.
    pub(crate) fn property_index(&self, field: &str, value: &str) -> Option<usize> {
        let map = self.property_indexes.get(field)?;
        map.get(value).or_else(|| map.get("default")).copied()
    }

    // =========================================================================
    // Functions and filters
    // =========================================================================

    pub fn register_function(&mut self, name: impl Into<String>, entry: FnEntry) {
        self.functions.insert(name.into(), entry);
    }

    pub(crate) fn function(&self, name: &str) -> Option<&FnEntry> {
        self.functions.get(name)
    }

    pub fn register_filter(&mut self, name: impl Into<String>, filter: FilterFn) {
        self.filters.insert(name.into(), filter);
    }

    pub(crate) fn filter(&self, name: &str) -> Option<FilterFn> {
        self.filters.get(name).copied()
    }

    // =========================================================================
    // Extension
    // =========================================================================

    /// Additively merge a locale spec into this context.
    ///
    /// Dictionary entries, property indexes, and merge functions from the
    /// spec overwrite same-named existing entries; everything else is left
    /// untouched. This is the load-then-serve extension point: call it
    /// before resolution begins, never concurrently with it.
    pub fn extend_spec(&mut self, spec: &LocaleSpec) {
        if let Some(offset) = spec.n_offset {
            self.n_offset = offset;
        }
        for (field, entries) in &spec.property_indexes {
            self.property_indexes
                .entry(field.clone())
                .or_default()
                .extend(entries.iter().map(|(k, v)| (k.clone(), *v)));
        }
        if !spec.connectors.is_empty() {
            self.connectors = spec
                .connectors
                .iter()
                .map(|s| connector_from_str(s))
                .collect();
        }
        if let Some(text) = &spec.true_text {
            self.true_text = text.clone();
        }
        if let Some(text) = &spec.false_text {
            self.false_text = text.clone();
        }
        if let Some(text) = &spec.undefined_text {
            self.undefined_text = text.clone();
        }
        if let Some(text) = &spec.infinity_text {
            self.infinity_text = text.clone();
        }
        for (key, source) in &spec.atoms {
            self.define(key.clone(), source);
        }
        for (name, source) in &spec.function_atoms {
            self.register_function(name.clone(), FnEntry::Merge(parse_atom(source)));
        }
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Parse and resolve a template source against this context.
    ///
    /// Parsed atoms are cached by source string, so repeated calls skip
    /// parsing. A deferred (`+`) atom renders as the empty string here;
    /// use [`resolve`] directly when the deferred atom is needed.
    pub fn resolve_str(&self, source: &str) -> String {
        let atom = self.cached_atom(source);
        match resolve(&atom, self, None) {
            Resolved::Text(text) => text,
            Resolved::Deferred(_) => String::new(),
        }
    }

    /// Clear the parsed-atom cache.
    pub fn clear_atom_cache(&self) {
        self.atom_cache.borrow_mut().clear();
    }

    fn cached_atom(&self, source: &str) -> Atom {
        if let Some(atom) = self.atom_cache.borrow().get(source) {
            return atom.clone();
        }
        let atom = parse_atom(source);
        self.atom_cache
            .borrow_mut()
            .insert(source.to_string(), atom.clone());
        atom
    }
}
