use std::borrow::Cow;
use std::fmt;

use crate::describe::Describe;
use crate::scan::PropertyScan;

/// Terminal numeric/boolean/character value, rendered unquoted in its
/// canonical `Display` form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Char(char),
    Int(i128),
    UInt(u128),
    F32(f32),
    F64(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{}", value),
            Scalar::Char(value) => write!(f, "{}", value),
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::UInt(value) => write!(f, "{}", value),
            Scalar::F32(value) => write!(f, "{}", value),
            Scalar::F64(value) => write!(f, "{}", value),
        }
    }
}

/// Runtime classification of a value, produced by [`Describe::describe`].
///
/// Classification is total: every value maps to exactly one variant, and
/// producing one never fails. An unrecognized type is simply a `Composite`
/// with whatever properties it chose to register (possibly none).
pub enum Shape<'a> {
    /// Absent value, rendered as the bare literal `null`.
    Null,
    /// Boolean/number/character, rendered unquoted.
    Scalar(Scalar),
    /// String-like value, rendered double-quoted with escaping. Strings
    /// classify here and are never introspected or re-parsed.
    Text(Cow<'a, str>),
    /// Ordered sequence of elements, rendered as `[...]` in the source's
    /// iteration order.
    Sequence(Vec<&'a dyn Describe>),
    /// Associative entries in the map's native iteration order. Each entry
    /// re-enters the pipeline as a `{"key":...,"value":...}` pair object.
    Entries(Vec<(&'a dyn Describe, &'a dyn Describe)>),
    /// Named-property composite, rendered as `{...}` with members sorted by
    /// canonical name.
    Composite(PropertyScan<'a>),
}
