//! The aggregate result of a validation run.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregate pass/fail result produced by [`Validator::check`].
///
/// `valid` is `true` exactly when `errors` is empty. Messages appear in the
/// order the failing rules were invoked; nothing is deduplicated or sorted.
///
/// With the `serde` feature enabled the report serializes directly, which
/// makes it suitable as (part of) an API error response body.
///
/// # Examples
///
/// ```
/// use checkrail::{record, validate};
///
/// let report = validate(record! { "email" => "a@b.com" })
///     .valid_email(None, None)
///     .check();
/// assert!(report.valid);
/// assert!(report.errors.is_empty());
/// ```
///
/// [`Validator::check`]: crate::Validator::check
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Report {
    pub(crate) fn new(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns `true` when no rule reported a failure.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Consumes the report, yielding the accumulated messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_iff_no_errors() {
        assert!(Report::new(Vec::new()).is_valid());
        assert!(!Report::new(vec!["oops".to_string()]).is_valid());
    }
}
