pub mod filters;
pub mod locale;
pub mod parser;
pub mod resolver;
pub mod sentence;
pub mod types;

pub use locale::{FnEntry, LocaleContext, LocaleFn, LocaleSpec};
pub use parser::{ParseError, parse_atom, parse_atom_bytes};
pub use resolver::{FnOutcome, Resolved, resolve, resolve_text};
pub use types::{
    ArrayValue, Article, Atom, Connector, Count, EnumSpec, FnCall, Gender, OrdKey, Person,
    UnitMode,
};
