//! Chainable field validation with accumulated error reporting.
//!
//! `checkrail` validates untrusted key-value input (a web request body, a
//! form) before it reaches business logic. Rules chain fluently over one
//! shared session, every failing rule appends a human-readable message, and a
//! terminal [`Validator::check`] collapses the chain into an aggregate
//! [`Report`] carrying every problem at once.
//!
//! # Examples
//!
//! ## Validating a signup form
//!
//! ```
//! use checkrail::{record, validate};
//!
//! let report = validate(record! {
//!     "username" => "ada",
//!     "email" => "ada@example.com",
//!     "password" => "S3cret!pw",
//! })
//! .required_field("username", None)
//! .min_length("username", 3, None)
//! .no_spaces("username", None)
//! .valid_email(None, None)
//! .is_password("password", 8, true, true, true, None)
//! .check();
//!
//! assert!(report.valid);
//! ```
//!
//! ## Accumulation across a chain
//!
//! Rules never short-circuit: every failure lands in the report, in
//! invocation order.
//!
//! ```
//! use checkrail::{record, validate};
//!
//! let report = validate(record! { "email" => "not-an-email" })
//!     .required_field("name", None)
//!     .valid_email(None, None)
//!     .check();
//!
//! assert!(!report.valid);
//! assert_eq!(
//!     report.errors,
//!     ["name is required", "Email must be a valid email"]
//! );
//! ```
//!
//! ## Presence guards
//!
//! Most rules skip absent or empty fields, so a missing optional field does
//! not cascade into false failures; type checks and date comparisons always
//! evaluate.
//!
//! ```
//! use checkrail::{record, validate};
//!
//! let report = validate(record! {})
//!     .min_length("nickname", 5, None) // skipped: nickname is absent
//!     .is_string("nickname", None)     // evaluated: reports the absence
//!     .check();
//!
//! assert_eq!(report.errors, ["nickname must be a string"]);
//! ```

/// `record!` macro for building input records
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Aggregate result of a validation run
pub mod report;
/// The fluent rule catalogue and its leaf predicates
pub mod rules;
/// Per-run session state (record + accumulated messages)
pub(crate) mod session;
/// Field values and input records
pub mod value;

pub use report::Report;
pub use rules::{validate, PasswordMessages, Validator};
pub use value::{Record, Value};

// The date-comparison rules take a compare date; re-exported so callers
// don't have to pin a matching chrono version themselves.
pub use chrono::NaiveDate;
