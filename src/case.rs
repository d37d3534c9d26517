//! String case conversion.
//!
//! The conversion folds accented characters to their base letters before
//! lowercasing, so `"éléphant"` and `"elephant"` produce the same output.

use unicode_normalization::UnicodeNormalization;

use crate::error::Error;

/// A string-case transform such as [`kebab_case`].
///
/// Lets callers store or pass a converter without naming a concrete
/// function: `let to_slug: CaseFn = kebab_case;`
pub type CaseFn = fn(&str) -> String;

/// Combining diacritical marks block, removed after NFD decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Converts a string to kebab-case
///
/// Handles accented and mixed input:
/// - Spaces: `"Hello World"` -> "hello-world"
/// - Underscores: `"This_is_a_test"` -> "this-is-a-test"
/// - Accents fold to base letters: `"éléphant"` -> "elephant"
/// - Punctuation becomes a separator: `"C'est un éléphant"` -> "c-est-un-elephant"
///
/// Special handling:
/// - Input is NFD-decomposed and combining marks (U+0300..=U+036F) are
///   removed, so composed `"café"` and decomposed `"cafe\u{301}"` both
///   yield "cafe"
/// - Leading/trailing whitespace is trimmed before conversion
/// - Runs of consecutive separators collapse to one hyphen: `"a -- b"` -> "a-b"
/// - Leading/trailing hyphens are stripped
/// - Anything outside `[a-z0-9]` after folding (symbols, non-Latin
///   scripts) acts as a separator
///
/// The output contains only `[a-z0-9-]`. Input with no alphanumeric
/// content yields an empty string.
#[must_use]
pub fn kebab_case(input: &str) -> String {
    let folded: String = input
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect();

    let mut result = String::with_capacity(folded.len());
    let mut sep_pending = false;

    for ch in folded.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if sep_pending && !result.is_empty() {
                result.push('-');
            }
            result.push(ch);
            sep_pending = false;
        } else {
            sep_pending = true;
        }
    }

    result
}

/// Checks that a string is already in kebab-case form.
///
/// Accepts exactly the non-empty outputs of [`kebab_case`]: only
/// `[a-z0-9-]`, no leading or trailing hyphen, no consecutive hyphens.
///
/// # Errors
///
/// Returns [`Error::Validation`] describing the first rule violated.
pub fn validate_kebab(s: &str) -> Result<(), Error> {
    if s.is_empty() {
        return Err(Error::Validation("value cannot be empty".to_string()));
    }

    if !s
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(Error::Validation(
            "value can only contain lowercase letters, digits, and hyphens".to_string(),
        ));
    }

    if s.starts_with('-') || s.ends_with('-') {
        return Err(Error::Validation(
            "value cannot start or end with a hyphen".to_string(),
        ));
    }

    if s.contains("--") {
        return Err(Error::Validation(
            "value cannot contain consecutive hyphens".to_string(),
        ));
    }

    Ok(())
}
