//! The per-run validation session.
//!
//! One session backs one chain of rule invocations: it owns the input record
//! for the duration of the run and collects failure messages append-only.
//! Sessions are never reset or shared between runs.

use smallvec::SmallVec;

use crate::value::{Record, Value};

/// SmallVec-backed collection used for accumulating failure messages.
///
/// Inline storage for a handful of messages keeps the happy path (and the
/// near-happy path) off the heap.
pub(crate) type ErrorVec = SmallVec<[String; 4]>;

static ABSENT: Value = Value::Absent;

#[derive(Debug)]
pub(crate) struct Session {
    record: Record,
    errors: ErrorVec,
}

impl Session {
    pub(crate) fn new(record: Record) -> Self {
        Self {
            record,
            errors: ErrorVec::new(),
        }
    }

    /// Looks up a field, mapping a missing key to `Value::Absent`.
    pub(crate) fn field(&self, name: &str) -> &Value {
        self.record.get(name).unwrap_or(&ABSENT)
    }

    /// Appends one failure message. Append-only: nothing is ever removed or
    /// reordered, so message order equals invocation order.
    pub(crate) fn push(&mut self, message: String) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "checkrail", %message, "validation failure recorded");
        self.errors.push(message);
    }

    pub(crate) fn errors(&self) -> &[String] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_reads_as_absent() {
        let session = Session::new(Record::new());
        assert_eq!(*session.field("nope"), Value::Absent);
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut session = Session::new(Record::new());
        session.push("first".to_string());
        session.push("second".to_string());
        assert_eq!(session.errors(), ["first", "second"]);
    }
}
