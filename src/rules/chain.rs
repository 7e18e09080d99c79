//! The fluent rule chain.
//!
//! [`validate`] wraps an input record into a session and hands back a
//! [`Validator`]. Every rule method consumes and returns the validator, so an
//! arbitrary number of rules compose in any order over the one shared
//! session; [`Validator::check`] is the terminal read.
//!
//! Rules never abort the chain. A failing rule appends one message (the
//! password composite: one per violated sub-check) and the chain moves on, so
//! the terminal report carries every problem at once.

use chrono::NaiveDate;

use crate::report::Report;
use crate::rules::{dates, patterns};
use crate::session::Session;
use crate::value::{Record, Value};

/// Starts a validation run over `record`.
///
/// Construction never fails: malformed or missing fields surface later as
/// rule skips or accumulated messages, not as a constructor fault.
///
/// # Examples
///
/// ```
/// use checkrail::{record, validate};
///
/// let report = validate(record! { "name" => "ada", "age" => 36 })
///     .required_field("name", None)
///     .is_number("age", None)
///     .check();
/// assert!(report.valid);
/// ```
pub fn validate(record: Record) -> Validator {
    Validator {
        session: Session::new(record),
    }
}

/// Default messages for the password composite rule, one per sub-check.
///
/// Overriding the defaults means supplying all four variants; the struct
/// shape makes a partial override unrepresentable.
///
/// # Examples
///
/// ```
/// use checkrail::PasswordMessages;
///
/// let msgs = PasswordMessages {
///     length: "too short".into(),
///     ..PasswordMessages::for_field("pin", 6)
/// };
/// assert_eq!(msgs.length, "too short");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordMessages {
    pub length: String,
    pub upper: String,
    pub number: String,
    pub special: String,
}

impl PasswordMessages {
    /// The stock templates, interpolated for `name` and `min_length`.
    #[must_use]
    pub fn for_field(name: &str, min_length: usize) -> Self {
        Self {
            length: format!("{name} must have a minimum length of {min_length}"),
            upper: format!("{name} must have contain an uppercase letter"),
            number: format!("{name} must have contain a number"),
            special: format!("{name} must have contain an special character"),
        }
    }
}

/// Chainable handle over one validation session.
///
/// Obtained from [`validate`]; every rule method returns the validator
/// itself, threading the same session through the whole chain.
#[must_use]
#[derive(Debug)]
pub struct Validator {
    session: Session,
}

impl Validator {
    /// Fails when the field is absent or falsy. Always evaluated.
    pub fn required_field(self, name: &str, message: Option<&str>) -> Self {
        let failed = !self.session.field(name).is_truthy();
        self.append_if(failed, message, || format!("{name} is required"))
    }

    /// Fails when a present value is not a syntactically valid email.
    ///
    /// The field defaults to `"email"`; the default message capitalizes the
    /// field name.
    pub fn valid_email(self, name: Option<&str>, message: Option<&str>) -> Self {
        let name = name.unwrap_or("email");
        let failed = self
            .guarded_text(name)
            .is_some_and(|text| !patterns::is_email(&text));
        self.append_if(failed, message, || {
            format!("{} must be a valid email", capitalize(name))
        })
    }

    /// Fails when a present value, with every whitespace character stripped,
    /// has fewer than `min` characters.
    pub fn min_length(self, name: &str, min: usize, message: Option<&str>) -> Self {
        let failed = self
            .guarded_text(name)
            .is_some_and(|text| patterns::condensed_len(&text) < min);
        self.append_if(failed, message, || {
            format!("{name} must have at least a length of {min}")
        })
    }

    /// Fails when a present value contains any whitespace character.
    pub fn no_spaces(self, name: &str, message: Option<&str>) -> Self {
        let failed = self
            .guarded_text(name)
            .is_some_and(|text| patterns::has_whitespace(&text));
        self.append_if(failed, message, || format!("{name} must not have spaces"))
    }

    /// Fails unless the field holds a boolean. Always evaluated, so an
    /// absent field is reported.
    pub fn is_boolean(self, name: &str, message: Option<&str>) -> Self {
        let failed = !matches!(self.session.field(name), Value::Bool(_));
        self.append_if(failed, message, || format!("{name} must be a boolean"))
    }

    /// Fails when a present value is not a (non-NaN) number.
    pub fn is_number(self, name: &str, message: Option<&str>) -> Self {
        let failed = {
            let value = self.session.field(name);
            value.is_truthy() && !matches!(value, Value::Number(n) if !n.is_nan())
        };
        self.append_if(failed, message, || format!("{name} must be a number"))
    }

    /// Fails unless the field holds a string. Always evaluated, so an
    /// absent field is reported.
    pub fn is_string(self, name: &str, message: Option<&str>) -> Self {
        let failed = !matches!(self.session.field(name), Value::Str(_));
        self.append_if(failed, message, || format!("{name} must be a string"))
    }

    /// Password composite: a length floor plus opt-in character-class
    /// checks, each violated sub-check appending its own message.
    ///
    /// All sub-checks skip when the field is absent or falsy.
    pub fn is_password(
        mut self,
        name: &str,
        min_length: usize,
        require_upper: bool,
        require_digit: bool,
        require_special: bool,
        messages: Option<PasswordMessages>,
    ) -> Self {
        let messages = messages.unwrap_or_else(|| PasswordMessages::for_field(name, min_length));
        let text = match self.guarded_text_owned(name) {
            Some(text) => text,
            None => return self,
        };

        if text.chars().count() < min_length {
            self.session.push(messages.length);
        }
        if require_upper && !patterns::has_uppercase(&text) {
            self.session.push(messages.upper);
        }
        if require_digit && !patterns::has_digit(&text) {
            self.session.push(messages.number);
        }
        if require_special && !patterns::has_special(&text) {
            self.session.push(messages.special);
        }
        self
    }

    /// Fails when a present value does not look like a phone number: a "+"
    /// and a two-digit country code, or a leading zero, then digits up to
    /// `total_len` characters overall.
    pub fn is_phone_number(self, name: &str, total_len: usize, message: Option<&str>) -> Self {
        let failed = self
            .guarded_text(name)
            .is_some_and(|text| !patterns::is_phone_number(&text, total_len));
        self.append_if(failed, message, || {
            format!("{name} must be a valid phone number")
        })
    }

    /// Fails when a present value does not match the fixed month-day-year
    /// calendar pattern (see `rules::patterns` for the policy it encodes).
    pub fn is_date_format(self, name: &str, message: Option<&str>) -> Self {
        let failed = self
            .guarded_text(name)
            .is_some_and(|text| !patterns::is_date_format(&text));
        self.append_if(failed, message, || format!("{name} must be a valid date"))
    }

    /// Fails when a present value does not match a permissive host/path
    /// pattern.
    pub fn is_url(self, name: &str, message: Option<&str>) -> Self {
        let failed = self
            .guarded_text(name)
            .is_some_and(|text| !patterns::is_url(&text));
        self.append_if(failed, message, || format!("{name} must be a valid URL"))
    }

    /// Fails unless the field parses as a date. Always evaluated, so an
    /// absent field is reported.
    pub fn is_date(self, name: &str, message: Option<&str>) -> Self {
        let failed = dates::parse_value(self.session.field(name)).is_none();
        self.append_if(failed, message, || format!("{name} must be a date"))
    }

    /// Fails when a present value does not contain `sub`.
    pub fn contains(self, name: &str, sub: &str, message: Option<&str>) -> Self {
        let failed = self
            .guarded_text(name)
            .is_some_and(|text| !text.contains(sub));
        self.append_if(failed, message, || format!("{name} must include {sub}"))
    }

    /// Fails when a present value is not one of `allowed`.
    pub fn is_enum(self, name: &str, allowed: &[&str], message: Option<&str>) -> Self {
        let failed = self
            .guarded_text(name)
            .is_some_and(|text| !allowed.iter().any(|candidate| text == *candidate));
        self.append_if(failed, message, || {
            format!("{name} must be be one of these: {}", allowed.join(","))
        })
    }

    /// Fails when a present value is not an RFC-4122 UUID (versions 1-5).
    pub fn is_uuid(self, name: &str, message: Option<&str>) -> Self {
        let failed = self
            .guarded_text(name)
            .is_some_and(|text| !patterns::is_uuid(&text));
        self.append_if(failed, message, || format!("{name} must be a UUID"))
    }

    /// Fails when the field's date is strictly later than `compare`
    /// (default: today), both normalized to whole UTC days.
    ///
    /// Always evaluated, but an unparseable or absent value makes the
    /// comparison vacuous and appends nothing. Pass a fixed `compare` date
    /// in tests to keep the rule off the wall clock.
    pub fn is_date_past(
        self,
        name: &str,
        compare: Option<NaiveDate>,
        message: Option<&str>,
    ) -> Self {
        let compare = compare.unwrap_or_else(dates::today);
        let failed = dates::parse_value(self.session.field(name)).is_some_and(|d| d > compare);
        self.append_if(failed, message, || {
            format!(
                "{name} is an invalid date. Must not be later than {}",
                dates::display_date(compare)
            )
        })
    }

    /// Fails when the field's date is strictly earlier than `compare`
    /// (default: today), both normalized to whole UTC days.
    ///
    /// Same evaluation rules as [`Validator::is_date_past`].
    pub fn is_date_future(
        self,
        name: &str,
        compare: Option<NaiveDate>,
        message: Option<&str>,
    ) -> Self {
        let compare = compare.unwrap_or_else(dates::today);
        let failed = dates::parse_value(self.session.field(name)).is_some_and(|d| d < compare);
        self.append_if(failed, message, || {
            format!(
                "{name} is an invalid date. Must not be further than {}",
                dates::display_date(compare)
            )
        })
    }

    /// Terminal read: collapses the chain into an aggregate [`Report`].
    ///
    /// Idempotent: calling it repeatedly without an intervening rule
    /// invocation returns the same snapshot.
    pub fn check(&self) -> Report {
        Report::new(self.session.errors().to_vec())
    }

    /// Presence guard shared by the string-shaped rules: the field's text,
    /// or `None` when the value is absent or falsy.
    fn guarded_text(&self, name: &str) -> Option<std::borrow::Cow<'_, str>> {
        let value = self.session.field(name);
        if value.is_truthy() {
            value.as_text()
        } else {
            None
        }
    }

    fn guarded_text_owned(&self, name: &str) -> Option<String> {
        self.guarded_text(name).map(|text| text.into_owned())
    }

    fn append_if(
        mut self,
        failed: bool,
        message: Option<&str>,
        default: impl FnOnce() -> String,
    ) -> Self {
        if failed {
            let message = message.map_or_else(default, str::to_string);
            self.session.push(message);
        }
        self
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_character_only() {
        assert_eq!(capitalize("email"), "Email");
        assert_eq!(capitalize("e"), "E");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn password_messages_defaults_interpolate() {
        let msgs = PasswordMessages::for_field("password", 8);
        assert_eq!(msgs.length, "password must have a minimum length of 8");
        assert_eq!(msgs.upper, "password must have contain an uppercase letter");
    }
}
