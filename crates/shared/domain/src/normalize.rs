//! Normalizers applied to a user once validation has passed.

use crate::constants::PHONE_SEPARATORS;

/// Remove phone separators (`-`, `(`, `)`, space).
pub fn strip_phone(raw: &str) -> String {
    raw.chars().filter(|c| !PHONE_SEPARATORS.contains(c)).collect()
}

/// English title casing: the first letter of each word is upper-cased and the
/// rest lower-cased. Any character other than a letter, `'` or `.` ends a
/// word, so `"(mary)"` becomes `"(Mary)"` and `"anne,marie"` becomes
/// `"Anne,Marie"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;

    for c in value.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            // Mid-word marks keep the word going.
            word_start = !is_mid_word(c);
        }
    }

    out
}

fn is_mid_word(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '.')
}

/// Title-case a first and last name pair.
pub fn normalize_names(first: &str, last: &str) -> (String, String) {
    (title_case(first), title_case(last))
}
