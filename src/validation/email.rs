//! Email format check.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`: no whitespace, exactly one `@`, and a `.` in the
/// domain with characters on both sides.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Whether `value` looks like an email address. Empty input is rejected.
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
