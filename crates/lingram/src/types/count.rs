/// A grammatical count: an integer, a float, or the "infinite count"
/// sentinel used for unbounded quantities.
///
/// Counts drive plural selection in alternation trees and quantity
/// decomposition in measurement phrases. Coercion failure during parsing
/// yields no count at all, never zero, so a malformed count cannot produce
/// a false singular or false plural.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Count {
    /// A whole-number count.
    Int(i64),

    /// A fractional count (e.g. 1.5 hours).
    Float(f64),

    /// Unbounded quantity. Maps to the largest alternation index and is
    /// absorbing under list summation.
    Infinite,
}

impl Count {
    /// Coerce a raw value to a count.
    ///
    /// Recognizes the infinite sentinel (`*`, `inf`, `infinity`, case
    /// insensitive), then integers, then finite floats. Returns `None` on
    /// anything else.
    pub fn parse(raw: &str) -> Option<Count> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed == "*" || trimmed.eq_ignore_ascii_case("inf") || trimmed.eq_ignore_ascii_case("infinity") {
            return Some(Count::Infinite);
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Some(Count::Int(n));
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Count::Float)
    }

    /// Numeric view of this count; `Infinite` becomes `f64::INFINITY`.
    pub fn as_f64(self) -> f64 {
        match self {
            Count::Int(n) => n as f64,
            Count::Float(f) => f,
            Count::Infinite => f64::INFINITY,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Count::Infinite)
    }

    /// Build a count from a numeric quantity, preferring the integer form
    /// when the value is whole.
    pub fn from_f64(value: f64) -> Count {
        if value.is_infinite() {
            Count::Infinite
        } else if value.fract() == 0.0 && value.abs() < 1e15 {
            Count::Int(value as i64)
        } else {
            Count::Float(value)
        }
    }

    /// Sum counts over list entries: each missing count contributes 1, and
    /// any infinite entry makes the whole sum infinite.
    pub fn sum<'a>(counts: impl Iterator<Item = Option<&'a Count>>) -> Count {
        let mut int_total: i64 = 0;
        let mut float_total: f64 = 0.0;
        let mut fractional = false;
        for count in counts {
            match count {
                Some(Count::Infinite) => return Count::Infinite,
                Some(Count::Int(n)) => {
                    int_total = int_total.saturating_add(*n);
                    float_total += *n as f64;
                }
                Some(Count::Float(f)) => {
                    fractional = true;
                    float_total += f;
                }
                None => {
                    int_total = int_total.saturating_add(1);
                    float_total += 1.0;
                }
            }
        }
        if fractional {
            Count::Float(float_total)
        } else {
            Count::Int(int_total)
        }
    }
}

/// Format a finite float the way template output expects: whole values
/// print without a decimal point, everything else uses the shortest
/// round-trip representation.
pub fn fmt_f64(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
