//! Whitelist input validation for login-surface fields
//!
//! One total, pure predicate per field kind. Every validator answers
//! false on empty or whitespace-only input instead of raising. Patterns
//! are compiled once and shared read-only afterwards.

use once_cell::sync::Lazy;
use regex::Regex;

/// Login names: alphanumeric and underscore, 3-50 chars
static LOGIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{3,50}$").unwrap()
});

/// Standard local@domain.tld shape
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Personal names: letters including accented, spaces, apostrophes, 2-100 chars
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZÀ-ÿ\s']{2,100}$").unwrap()
});

/// Phone numbers in the (DD) DDDD[D]-DDDD shape
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(\d{2}\)\s?\d{4,5}-\d{4}$").unwrap()
});

/// National id punctuation pattern DDD.DDD.DDD-DD
static NATIONAL_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").unwrap()
});

/// Blacklist of dangerous characters and SQL verbs for `sanitize`
static DANGEROUS_CHARS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)[;'"\\/*-]|\b(OR|AND|UNION|SELECT|INSERT|UPDATE|DELETE|DROP|EXEC)\b"#)
        .unwrap()
});

/// Validates a login name
pub fn validate_login(login: &str) -> bool {
    !login.trim().is_empty() && LOGIN_REGEX.is_match(login)
}

/// Validates an email address
pub fn validate_email(email: &str) -> bool {
    !email.trim().is_empty() && EMAIL_REGEX.is_match(email)
}

/// Validates a personal name
pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty() && NAME_REGEX.is_match(name)
}

/// Validates a phone number
pub fn validate_phone(phone: &str) -> bool {
    !phone.trim().is_empty() && PHONE_REGEX.is_match(phone)
}

/// Validates a national id
///
/// The punctuation pattern alone accepts trivially well-formed but
/// semantically impossible values, so a value whose 11 digits are all
/// identical is rejected as well.
pub fn validate_national_id(national_id: &str) -> bool {
    if national_id.trim().is_empty() || !NATIONAL_ID_REGEX.is_match(national_id) {
        return false;
    }
    has_valid_id_digits(national_id)
}

fn has_valid_id_digits(national_id: &str) -> bool {
    let digits: String = national_id.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 11 {
        return false;
    }

    let first = digits.as_bytes()[0];
    !digits.bytes().all(|d| d == first)
}

/// Strips blacklisted characters and SQL verbs from a string
///
/// Advisory normalization helper only. Blacklist stripping is
/// incomplete by construction and is never the injection defense;
/// whitelist validation and parameterized storage access are.
pub fn sanitize(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }

    DANGEROUS_CHARS_REGEX.replace_all(input, "").into_owned()
}
