// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Email field format rule and the group-level aggregation policy.

use std::sync::LazyLock;

use regex::Regex;

/// Local part, `@`, a letters/digits/hyphen domain label, `.`, and a 2-4 letter suffix.
///
/// "Any character" in the local part stops at line terminators.
const EMAIL_PATTERN: &str = r"^[^\n\r\x{2028}\x{2029}]+@[a-zA-Z0-9\-]+\.[a-zA-Z]{2,4}$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).expect("email pattern must compile")
});

/// Check that the whole string has the shape `local@domain.tld`.
///
/// The top-level suffix must be 2 to 4 ASCII letters and nothing may follow it.
///
/// # Examples
///
/// ```
/// use formcheck::models::email::is_valid_email;
///
/// assert!(is_valid_email("a@b.co"));
/// assert!(!is_valid_email("a@b.c"));
/// assert!(!is_valid_email("a@b.com extra"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a field group: at least one entry, and every entry a valid email.
///
/// An empty group is never valid, which forces the user to provide at least one address.
pub fn are_all_emails_valid<I, S>(emails: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen_any = false;
    for email in emails {
        if !is_valid_email(email.as_ref()) {
            return false;
        }
        seen_any = true;
    }
    seen_any
}
