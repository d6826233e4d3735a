mod atom;
mod count;
mod grammar;
mod value;

pub use atom::{Atom, Connector, ConnectorPiece, EnumSpec, FilterDirective, FnCall, OrdKey, UnitMode};
pub use count::{Count, fmt_f64};
pub use grammar::{Article, Gender, Person};
pub use value::ArrayValue;
