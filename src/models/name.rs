// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Name field format rule.

/// Check that a name has one or more characters, each an ASCII letter or a space.
///
/// Equivalent to matching the whole string against `^[A-Za-z ]+$`. Any other
/// character (digits, punctuation, tabs, non-ASCII letters) makes the name invalid.
///
/// # Examples
///
/// ```
/// use formcheck::models::name::is_valid_name;
///
/// assert!(is_valid_name("Jane Doe"));
/// assert!(!is_valid_name(""));
/// assert!(!is_valid_name("Jane123"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}
