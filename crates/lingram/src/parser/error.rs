//! Parse error types.

use thiserror::Error;

/// An error from the atom parse entry points.
///
/// Atom parsing itself is permissive: malformed nesting is accepted and
/// simply yields fewer operators. The only hard failure is handing the
/// byte-oriented entry point something that is not a string.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input bytes are not valid UTF-8 and cannot be parsed as a template.
    #[error("atom source is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
