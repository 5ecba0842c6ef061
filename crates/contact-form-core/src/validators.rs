//! Pure syntax validators for name and email values.
//!
//! Both validators are total functions over `&str`: they never panic and
//! never allocate on the match path. The patterns are compiled once into
//! process-wide statics.

use std::sync::LazyLock;

use regex::Regex;

/// Name pattern: a leading letter, a lazy run of letters/spaces, then a
/// trailing run of 4 to 50 non-digit characters.
///
/// The trailing run is what gives the pattern its boundary behavior: the
/// shortest accepted name is 5 characters (1 leading letter + 4 trailing),
/// and a digit anywhere in the string prevents a full match. The pattern
/// itself has no upper length bound; the 50-character cap is a field rule
/// (see [`crate::fields::contact_rules`]).
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-zA-Z]+[a-zA-Z\s]*?[^0-9]{4,50}$").expect("valid regex")
});

/// Email pattern: `local@domain.TLD` with a 2–63 letter TLD.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+\-]+@[A-Z0-9.\-]+\.[A-Z]{2,63}$").expect("valid regex")
});

/// Returns `true` iff `name` matches the name pattern.
pub fn validate_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Returns `true` iff `email` is syntactically a valid address.
///
/// Syntax only; deliverability is not checked.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
