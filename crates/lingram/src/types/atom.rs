use bon::Builder;

use super::count::Count;
use super::grammar::{Article, Gender, Person};
use super::value::ArrayValue;

/// A field name consulted during alternation-tree descent.
///
/// One `OrdKey` is consumed per nesting level of the `alt` tree. `Count`
/// applies the locale's numeric offset before indexing; `CountZero` does
/// not, so a zero count selects branch 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdKey {
    /// Binary alternative driven by the boolean field.
    Bool,
    /// Count-indexed branch with the locale offset applied (`n`).
    Count,
    /// Count-indexed branch without an offset (`n0`).
    CountZero,
    /// Any other field, resolved through the locale's property index maps
    /// (`g`, `p`, `a`, or a locale-defined name).
    Prop(String),
}

impl OrdKey {
    pub fn parse(name: &str) -> OrdKey {
        match name {
            "b" => OrdKey::Bool,
            "n" => OrdKey::Count,
            "n0" => OrdKey::CountZero,
            other => OrdKey::Prop(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OrdKey::Bool => "b",
            OrdKey::Count => "n",
            OrdKey::CountZero => "n0",
            OrdKey::Prop(name) => name,
        }
    }
}

/// Enumeration connector selection for a list.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumSpec {
    /// Use the locale's default connector set.
    Default,
    /// Explicit 4-slot connector set (nothing / opening / middle / closing).
    Connectors(Vec<Connector>),
}

/// A parsed connector sub-template used to join enumerated entries.
///
/// `$` marks where the resolved entry is inserted; embedded `[...]` atoms
/// are resolved with the entry as their preceding atom, which is how
/// connectors agree with the word they attach to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Connector {
    pub pieces: Vec<ConnectorPiece>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorPiece {
    Literal(String),
    /// The resolved list entry.
    Slot,
    /// An embedded atom, resolved with the entry as the preceding atom.
    Atom(Atom),
}

/// Formatting strategy for measurement phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitMode {
    /// `N+`: greedy decomposition across units, largest first.
    Greedy,
    /// `R1+`: nearest unit with a penalty against rounding below the
    /// smallest applicable threshold.
    NearestAbove,
    /// `R`: nearest threshold by absolute distance.
    #[default]
    Nearest,
}

impl UnitMode {
    pub fn parse(raw: &str) -> UnitMode {
        match raw.trim() {
            "N+" => UnitMode::Greedy,
            "R1+" => UnitMode::NearestAbove,
            _ => UnitMode::Nearest,
        }
    }
}

/// A named locale-function invocation recorded on an atom.
#[derive(Debug, Clone, PartialEq)]
pub struct FnCall {
    pub name: String,
    pub args: Vec<ArrayValue>,
}

/// A post-processing filter directive (`id` or `id:params`).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDirective {
    pub id: String,
    pub params: Option<String>,
}

/// A grammatical atom: a value plus the metadata needed to pick its
/// correct form in a locale.
///
/// The field set is closed; operator keys that do not map to a field are
/// recorded as [`FnCall`]s and dispatched against the locale's function
/// table at resolution time. Atoms held in a locale dictionary are never
/// mutated: resolution clones the atom into an owned working copy before
/// touching anything.
///
/// # Example
///
/// ```
/// use lingram::{Atom, parse_atom};
///
/// let atom = parse_atom("cheval[g:m]");
/// assert_eq!(atom.key.as_deref(), Some("cheval"));
/// assert_eq!(atom.gender, Some(lingram::Gender::Masculine));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Atom {
    /// Translation key (`k`), the identity used for dictionary lookup.
    pub key: Option<String>,

    /// Declared source locale (`l`). When it matches the active locale,
    /// localization is a no-op.
    pub lang: Option<String>,

    /// Invariable literal text (`s`). Takes precedence over the key.
    pub literal: Option<String>,

    /// Count (`n`).
    pub count: Option<Count>,

    /// Gender tag (`g`).
    pub gender: Option<Gender>,

    /// Grammatical person (`p`).
    pub person: Option<Person>,

    /// Article-type tag (`a`).
    pub article: Option<Article>,

    /// Boolean value (`b`).
    pub boolean: Option<bool>,

    /// Fallback value (`def`) used when nothing else resolves.
    pub fallback: Option<String>,

    /// Alternation tree, navigated one [`OrdKey`] per nesting level.
    pub alt: Option<Vec<ArrayValue>>,

    /// Field names consulted during alternation descent.
    #[builder(default)]
    pub ord: Vec<OrdKey>,

    /// Sub-atoms for enumeration or count derivation.
    #[builder(default)]
    pub list: Vec<Atom>,

    /// Connector selection for enumerating `list`.
    pub enumeration: Option<EnumSpec>,

    /// Unit thresholds (`uv`), parallel to `unit_forms`.
    #[builder(default)]
    pub unit_values: Vec<f64>,

    /// Unit-name sub-atoms (`uf`).
    #[builder(default)]
    pub unit_forms: Vec<Atom>,

    /// Measurement strategy (`um`).
    #[builder(default)]
    pub unit_mode: UnitMode,

    /// Connector override for joining measurement phrases (`uenum`).
    pub unit_enum: Option<Vec<Connector>>,

    /// Locale-function calls applied before strategy selection.
    #[builder(default)]
    pub fns: Vec<FnCall>,

    /// Filters applied to the strategy result before prefix/suffix text.
    #[builder(default)]
    pub pre_filters: Vec<FilterDirective>,

    /// Filters applied to the final wrapped string.
    #[builder(default)]
    pub post_filters: Vec<FilterDirective>,

    /// Accumulated prefix text injected by grammar functions.
    #[builder(default)]
    pub before: String,

    /// Accumulated suffix text injected by grammar functions.
    #[builder(default)]
    pub after: String,

    /// `+` flag: defer resolution so the caller can fold this atom into
    /// the next one resolved in sequence.
    #[builder(default)]
    pub carry: bool,

    /// `x` flag: skip dictionary lookup entirely.
    #[builder(default)]
    pub raw: bool,

    /// Dictionary lookup already performed for this working copy.
    #[builder(skip)]
    pub localized: bool,
}

impl Atom {
    /// An atom holding only invariable literal text.
    pub fn text(s: impl Into<String>) -> Atom {
        Atom {
            literal: Some(s.into()),
            ..Atom::default()
        }
    }

    /// An atom holding only a translation key.
    pub fn keyed(k: impl Into<String>) -> Atom {
        Atom {
            key: Some(k.into()),
            ..Atom::default()
        }
    }

    /// The count to use for plural and measurement decisions: the explicit
    /// count if set, otherwise the sum over `list` entry counts.
    pub fn effective_count(&self) -> Option<Count> {
        if self.count.is_some() {
            return self.count;
        }
        if self.list.is_empty() {
            return None;
        }
        Some(Count::sum(self.list.iter().map(|a| a.count.as_ref())))
    }

    /// The plain string source used by fallback alternation: the literal
    /// if present, otherwise the key.
    pub fn text_source(&self) -> Option<&str> {
        self.literal.as_deref().or(self.key.as_deref())
    }

    /// Overlay this atom's locally-set fields onto `base`, producing the
    /// merged working atom used by localization.
    ///
    /// `base` is the dictionary entry; fields set locally win. Function
    /// calls concatenate with the dictionary's running first. An `ord` set
    /// locally without a matching `alt` still survives, so a locally
    /// requested alternation order is not discarded by the merge.
    pub fn overlaid_on(&self, base: &Atom) -> Atom {
        let mut out = base.clone();
        if self.key.is_some() {
            out.key = self.key.clone();
        }
        if self.lang.is_some() {
            out.lang = self.lang.clone();
        }
        if self.literal.is_some() {
            out.literal = self.literal.clone();
        }
        if self.count.is_some() {
            out.count = self.count;
        }
        if self.gender.is_some() {
            out.gender = self.gender;
        }
        if self.person.is_some() {
            out.person = self.person;
        }
        if self.article.is_some() {
            out.article = self.article;
        }
        if self.boolean.is_some() {
            out.boolean = self.boolean;
        }
        if self.fallback.is_some() {
            out.fallback = self.fallback.clone();
        }
        if self.alt.is_some() {
            out.alt = self.alt.clone();
        }
        if !self.ord.is_empty() {
            out.ord = self.ord.clone();
        }
        if !self.list.is_empty() {
            out.list = self.list.clone();
        }
        if self.enumeration.is_some() {
            out.enumeration = self.enumeration.clone();
        }
        if !self.unit_values.is_empty() {
            out.unit_values = self.unit_values.clone();
        }
        if !self.unit_forms.is_empty() {
            out.unit_forms = self.unit_forms.clone();
        }
        if self.unit_mode != UnitMode::default() {
            out.unit_mode = self.unit_mode;
        }
        if self.unit_enum.is_some() {
            out.unit_enum = self.unit_enum.clone();
        }
        out.fns.extend(self.fns.iter().cloned());
        out.pre_filters.extend(self.pre_filters.iter().cloned());
        out.post_filters.extend(self.post_filters.iter().cloned());
        out.before.push_str(&self.before);
        out.after.push_str(&self.after);
        out.carry |= self.carry;
        out.raw |= self.raw;
        out.localized = base.localized || self.localized;
        out
    }

    /// Copy grammatical agreement fields from `other` where unset. Used
    /// when folding a deferred atom into its neighbor.
    pub fn fill_missing_grammar(&mut self, other: &Atom) {
        if self.count.is_none() {
            self.count = other.effective_count();
        }
        if self.gender.is_none() {
            self.gender = other.gender;
        }
        if self.person.is_none() {
            self.person = other.person;
        }
        if self.article.is_none() {
            self.article = other.article;
        }
    }
}

impl From<i64> for Atom {
    fn from(n: i64) -> Self {
        Atom {
            count: Some(Count::Int(n)),
            ..Atom::default()
        }
    }
}

impl From<i32> for Atom {
    fn from(n: i32) -> Self {
        Atom::from(i64::from(n))
    }
}

impl From<f64> for Atom {
    fn from(f: f64) -> Self {
        Atom {
            count: Some(Count::from_f64(f)),
            ..Atom::default()
        }
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom::keyed(s)
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Atom::keyed(s)
    }
}
