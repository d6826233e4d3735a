/// An element of a parsed `|`-delimited array.
///
/// Elements are either plain unescaped strings or nested sequences produced
/// by a parenthesized sub-list, which is how two-dimensional alternation
/// trees like `(a|b)|(c|d)` are represented.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayValue {
    /// A plain scalar element with escapes removed.
    Str(String),

    /// A nested sequence from a `(...)` group.
    List(Vec<ArrayValue>),
}

impl ArrayValue {
    /// Get this element as a string slice, if it is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArrayValue::Str(s) => Some(s),
            ArrayValue::List(_) => None,
        }
    }

    /// Get this element as a nested sequence, if it is one.
    pub fn as_list(&self) -> Option<&[ArrayValue]> {
        match self {
            ArrayValue::Str(_) => None,
            ArrayValue::List(items) => Some(items),
        }
    }
}

impl std::fmt::Display for ArrayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayValue::Str(s) => write!(f, "{s}"),
            ArrayValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for ArrayValue {
    fn from(s: &str) -> Self {
        ArrayValue::Str(s.to_string())
    }
}

impl From<String> for ArrayValue {
    fn from(s: String) -> Self {
        ArrayValue::Str(s)
    }
}
