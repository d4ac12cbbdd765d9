use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use crate::shape::{Scalar, Shape};

/// Capability to classify a value for dumping.
///
/// This is the registration seam that replaces call-time reflection: a type
/// opts in by returning its [`Shape`] — a scalar, a flattened container, or
/// a property scan listing its logical members. Members a type does not
/// register (private internals, statics, baseline plumbing) never appear in
/// the output.
///
/// Implementations must be read-only and deterministic for an unchanged
/// value; the dumper holds no state between calls and reads live values with
/// no snapshot guarantee.
pub trait Describe {
    /// Classify this value, borrowing its members for the duration of one
    /// dump.
    fn describe(&self) -> Shape<'_>;
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> Shape<'_> {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&self) -> Shape<'_> {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn describe(&self) -> Shape<'_> {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn describe(&self) -> Shape<'_> {
        (**self).describe()
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe(&self) -> Shape<'_> {
        match self {
            Some(value) => value.describe(),
            None => Shape::Null,
        }
    }
}

impl Describe for bool {
    fn describe(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Bool(*self))
    }
}

impl Describe for char {
    fn describe(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Char(*self))
    }
}

macro_rules! describe_signed {
    ($($ty:ty)*) => {$(
        impl Describe for $ty {
            fn describe(&self) -> Shape<'_> {
                Shape::Scalar(Scalar::Int(*self as i128))
            }
        }
    )*};
}

macro_rules! describe_unsigned {
    ($($ty:ty)*) => {$(
        impl Describe for $ty {
            fn describe(&self) -> Shape<'_> {
                Shape::Scalar(Scalar::UInt(*self as u128))
            }
        }
    )*};
}

describe_signed!(i8 i16 i32 i64 i128 isize);
describe_unsigned!(u8 u16 u32 u64 u128 usize);

impl Describe for f32 {
    fn describe(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::F32(*self))
    }
}

impl Describe for f64 {
    fn describe(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::F64(*self))
    }
}

impl Describe for str {
    fn describe(&self) -> Shape<'_> {
        Shape::Text(Cow::Borrowed(self))
    }
}

impl Describe for String {
    fn describe(&self) -> Shape<'_> {
        Shape::Text(Cow::Borrowed(self))
    }
}

impl Describe for Cow<'_, str> {
    fn describe(&self) -> Shape<'_> {
        Shape::Text(Cow::Borrowed(self))
    }
}

impl<T: Describe> Describe for [T] {
    fn describe(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Describe).collect())
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe(&self) -> Shape<'_> {
        self.as_slice().describe()
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe(&self) -> Shape<'_> {
        self.as_slice().describe()
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn describe(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Describe).collect())
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    fn describe(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Describe).collect())
    }
}

// Hashed collections surface whatever order the table yields; that is the
// container's own iteration order and is passed through untouched.
impl<T: Describe, S> Describe for HashSet<T, S> {
    fn describe(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Describe).collect())
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe(&self) -> Shape<'_> {
        Shape::Entries(
            self.iter()
                .map(|(key, value)| (key as &dyn Describe, value as &dyn Describe))
                .collect(),
        )
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe(&self) -> Shape<'_> {
        Shape::Entries(
            self.iter()
                .map(|(key, value)| (key as &dyn Describe, value as &dyn Describe))
                .collect(),
        )
    }
}

/// Full classification of a JSON payload: every variant maps onto the
/// corresponding shape, so pre-parsed payloads dump alongside native values.
impl Describe for serde_json::Value {
    fn describe(&self) -> Shape<'_> {
        match self {
            serde_json::Value::Null => Shape::Null,
            serde_json::Value::Bool(value) => Shape::Scalar(Scalar::Bool(*value)),
            serde_json::Value::Number(number) => describe_number(number),
            serde_json::Value::String(text) => Shape::Text(Cow::Borrowed(text)),
            serde_json::Value::Array(items) => {
                Shape::Sequence(items.iter().map(|item| item as &dyn Describe).collect())
            }
            serde_json::Value::Object(members) => Shape::Entries(
                members
                    .iter()
                    .map(|(key, value)| (key as &dyn Describe, value as &dyn Describe))
                    .collect(),
            ),
        }
    }
}

fn describe_number(number: &serde_json::Number) -> Shape<'static> {
    if let Some(value) = number.as_i64() {
        Shape::Scalar(Scalar::Int(value.into()))
    } else if let Some(value) = number.as_u64() {
        Shape::Scalar(Scalar::UInt(value.into()))
    } else {
        Shape::Scalar(Scalar::F64(number.as_f64().unwrap_or(f64::NAN)))
    }
}

impl<Tz: chrono::TimeZone> Describe for chrono::DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn describe(&self) -> Shape<'_> {
        Shape::Text(Cow::Owned(self.to_rfc3339()))
    }
}

impl Describe for uuid::Uuid {
    fn describe(&self) -> Shape<'_> {
        Shape::Text(Cow::Owned(self.to_string()))
    }
}

impl Describe for Path {
    fn describe(&self) -> Shape<'_> {
        Shape::Text(self.to_string_lossy())
    }
}

impl Describe for PathBuf {
    fn describe(&self) -> Shape<'_> {
        self.as_path().describe()
    }
}
