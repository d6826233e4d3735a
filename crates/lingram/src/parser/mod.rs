//! Atom mini-language parser.
//!
//! Parsing is split in two layers: `scanner` holds the cursor primitives
//! (balanced group extraction, escaping, array splitting) and `atom` maps
//! operator segments onto the closed [`crate::types::Atom`] field set.

mod atom;
pub mod error;
pub mod scanner;

pub use atom::{parse_atom, parse_atom_bytes};
pub use error::ParseError;

pub(crate) use atom::{connector_from_str, parse_atom_body};
