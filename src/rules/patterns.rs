// Compiled shared patterns and the leaf predicates built on them.
//
// Patterns compile once behind `Lazy`; every predicate call performs a fresh
// `is_match`, so no scan position is carried between invocations.
//
// The phone and date-format patterns encode policy, not general correctness:
// the fixed two-digit country code, the 1920-2099 year window, and the month
// families that share a day-count ceiling are all kept literally compatible
// with the system this replaces. Do not "fix" them without a product decision.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

// Months are grouped by their day ceiling: {1,3,5,7,8,10,12} allow day 31,
// {2,4,6,9,11} allow day 30 (February included, leap-year-agnostic). Years
// accept 19[2-9]x, 20[01]x, and bare two-digit [8901]x. Separator is "-" or
// "/", mixed separators included.
static DATE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((0?[13578]|10|12)(-|/)(([1-9])|(0[1-9])|([12])([0-9]?)|(3[01]?))(-|/)((19)([2-9])(\d{1})|(20)([01])(\d{1})|([8901])(\d{1}))|(0?[2469]|11)(-|/)(([1-9])|(0[1-9])|([12])([0-9]?)|(3[0]?))(-|/)((19)([2-9])(\d{1})|(20)([01])(\d{1})|([8901])(\d{1})))$",
    )
    .unwrap()
});

// Permissive by design: an optional scheme, then anything with a dot that
// stays clear of whitespace and quoting characters.
static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(https?://)?[^\s(\["<,>]*\.[^\s\[",><]*"#).unwrap());

static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

const SPECIAL_CHARS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

pub(crate) fn is_email(text: &str) -> bool {
    EMAIL.is_match(text)
}

pub(crate) fn is_date_format(text: &str) -> bool {
    DATE_FORMAT.is_match(text)
}

pub(crate) fn is_url(text: &str) -> bool {
    URL.is_match(text)
}

pub(crate) fn is_uuid(text: &str) -> bool {
    UUID.is_match(text)
}

/// Phone shape: a "+" and a two-digit country code, or a leading zero, then
/// digits filling out `total_len` characters (the "+" itself not counted).
///
/// Checked directly rather than through a generated repetition pattern, so an
/// arbitrarily large `total_len` is an ordinary non-match, never a fault.
pub(crate) fn is_phone_number(text: &str, total_len: usize) -> bool {
    let tail = total_len.saturating_sub(1);
    let digits = match text.strip_prefix('+') {
        Some(rest) => {
            // Two country-code digits, then the tail.
            if rest.len() < 2 || rest.len() - 2 != tail {
                return false;
            }
            rest
        }
        None => match text.strip_prefix('0') {
            Some(rest) if rest.len() == tail => rest,
            _ => return false,
        },
    };
    digits.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn has_whitespace(text: &str) -> bool {
    text.chars().any(char::is_whitespace)
}

/// Character count after stripping every whitespace character, internal ones
/// included.
pub(crate) fn condensed_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

pub(crate) fn has_uppercase(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn has_special(text: &str) -> bool {
    text.chars().any(|c| SPECIAL_CHARS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_email("a@b.com"));
        assert!(is_email("user+tag@example.co.uk"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
    }

    #[test]
    fn date_format_month_families() {
        // 31-day family takes day 31; 30-day family does not.
        assert!(is_date_format("01-31-1990"));
        assert!(!is_date_format("04-31-1990"));
        assert!(!is_date_format("2-31-1990"));
        // February sits in the 30-day family, leap years are not modeled.
        assert!(is_date_format("02-29-2001"));
        assert!(is_date_format("02-30-1990"));
        // Slash separators and unpadded months work too.
        assert!(is_date_format("12/25/1999"));
        assert!(is_date_format("1-1-2010"));
    }

    #[test]
    fn date_format_year_window() {
        assert!(is_date_format("01-01-1920"));
        assert!(is_date_format("01-01-2019"));
        assert!(!is_date_format("01-01-2100"));
        assert!(!is_date_format("01-01-1919"));
    }

    #[test]
    fn url_is_permissive() {
        assert!(is_url("https://example.com"));
        assert!(is_url("example.com/path"));
        assert!(!is_url("no dots here"));
    }

    #[test]
    fn uuid_versions_one_to_five() {
        assert!(is_uuid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_uuid("550E8400-E29B-41D4-A716-446655440000"));
        // Version nibble 0 and 6+ are rejected.
        assert!(!is_uuid("550e8400-e29b-01d4-a716-446655440000"));
        assert!(!is_uuid("550e8400-e29b-61d4-a716-446655440000"));
        assert!(!is_uuid("550e8400e29b41d4a716446655440000"));
    }

    #[test]
    fn phone_prefix_and_length() {
        assert!(is_phone_number("07911123456", 11));
        assert!(is_phone_number("+447911123456", 11));
        assert!(!is_phone_number("7911123456", 11));
        assert!(!is_phone_number("0791112345", 11));
        assert!(is_phone_number("0123456", 7));
        assert!(!is_phone_number("07911a23456", 11));
        assert!(!is_phone_number("+4a7911123456", 11));
    }

    #[test]
    fn phone_oversized_length_is_a_plain_non_match() {
        assert!(!is_phone_number("0123", usize::MAX));
        assert!(!is_phone_number("+441234", usize::MAX / 2));
    }

    #[test]
    fn password_character_classes() {
        assert!(has_uppercase("aBc"));
        assert!(!has_uppercase("abc"));
        assert!(has_digit("a1c"));
        assert!(!has_digit("abc"));
        assert!(has_special("a!c"));
        assert!(!has_special("abc"));
    }

    #[test]
    fn condensed_len_strips_internal_whitespace() {
        assert_eq!(condensed_len("a b\tc"), 3);
        assert_eq!(condensed_len("   "), 0);
    }
}
