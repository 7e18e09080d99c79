//! The rule catalogue and its leaf predicates.
//!
//! `chain` holds the public fluent surface; `patterns` and `dates` are the
//! leaf computations the rules delegate to. Rules own all presence-guard and
//! message decisions, leaves only answer yes/no questions about a value.

pub mod chain;
pub(crate) mod dates;
pub(crate) mod patterns;

pub use chain::{validate, PasswordMessages, Validator};
