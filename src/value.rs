//! Field values and input records.
//!
//! Incoming data is untyped key-value pairs, so field values are modeled as a
//! small closed variant type rather than a generic. Rules pattern-match the
//! variant explicitly, which makes "skips on absent" versus "always evaluated"
//! an auditable property of each rule instead of an implicit falsiness check.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input record under validation: field name to scalar value.
///
/// Build one by hand, from an iterator of pairs, or with the [`record!`]
/// macro.
///
/// [`record!`]: crate::record
pub type Record = HashMap<String, Value>;

/// A single scalar field value.
///
/// `Absent` stands in for a key that is missing from the record entirely, so
/// rules never need to distinguish "no key" from "key with no value".
///
/// # Examples
///
/// ```
/// use checkrail::Value;
///
/// let v = Value::from("hello");
/// assert!(v.is_truthy());
/// assert_eq!(Value::Absent.is_truthy(), false);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Number(f64),
    Bool(bool),
    Absent,
}

impl Value {
    /// Returns `true` when the value would pass a presence check.
    ///
    /// Empty strings, zero, NaN, `false`, and `Absent` are all falsy, which
    /// is what lets presence-guarded rules skip fields that a prior
    /// required-field check has already reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use checkrail::Value;
    ///
    /// assert!(Value::from(42).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::from(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
            Self::Absent => false,
        }
    }

    /// Textual rendering used by string-shaped rules (length, substring,
    /// pattern matches). `None` for `Absent`.
    ///
    /// Strings are borrowed verbatim; numbers and booleans render through
    /// their display form so a numeric phone field still matches the phone
    /// pattern.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Str(s) => Some(Cow::Borrowed(s.as_str())),
            Self::Number(n) => Some(Cow::Owned(number_text(*n))),
            Self::Bool(b) => Some(Cow::Owned(b.to_string())),
            Self::Absent => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&number_text(*n)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Absent => Ok(()),
        }
    }
}

// Whole numbers print without a trailing ".0" so default messages and
// text-based matching read naturally ("10", not "10.0").
fn number_text(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! value_from_int {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Self::Number(n as f64)
            }
        })+
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::Absent,
        }
    }
}
