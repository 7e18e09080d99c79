//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use checkrail::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use checkrail::prelude::*;
//!
//! let report = validate(record! { "email" => "a@b.com", "name" => "ada" })
//!     .required_field("name", None)
//!     .valid_email(None, None)
//!     .check();
//! assert!(report.valid);
//! ```

pub use crate::record;
pub use crate::report::Report;
pub use crate::rules::{validate, PasswordMessages, Validator};
pub use crate::value::{Record, Value};
pub use crate::NaiveDate;
