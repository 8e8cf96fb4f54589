//! Text normalization applied before every string comparison.
//!
//! Screening inputs arrive with inconsistent casing and punctuation
//! ("ACME Corp.", "O'Brien", "123 Main St."). Comparing raw strings would
//! penalize those differences, so every value is canonicalized first:
//! ASCII letters are lower-cased and anything that is not an ASCII letter,
//! ASCII digit, or whitespace is dropped.

/// Canonicalize a string for comparison.
///
/// Lower-cases ASCII letters and removes every character that is not an
/// ASCII letter, ASCII digit, or whitespace. Removed characters are not
/// replaced: `"O'Brien"` becomes `"obrien"`, not `"o brien"`. Internal
/// whitespace is preserved as-is.
///
/// Pure and idempotent; the empty string normalizes to the empty string.
///
/// # Example
/// ```
/// use screenx_core::normalize;
///
/// assert_eq!(normalize("ACME CORP."), "acme corp");
/// assert_eq!(normalize("O'Brien"), "obrien");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() {
            out.push(ch);
        }
    }
    out
}
