//! Jaro and Jaro-Winkler string similarity.
//!
//! Reference: Winkler, W. E. (1990). "String Comparator Metrics and Enhanced
//! Decision Rules in the Fellegi-Sunter Model of Record Linkage"
//!
//! The Winkler variant rewards shared prefixes, which suits personal and
//! company names where typos cluster at the end of the string
//! ("Jonathan" / "Jonathon", "Acme Corp" / "Acme Corporation").
//!
//! All functions return a score in [0.0, 1.0] where 1.0 means identical.

/// Standard Winkler prefix scaling factor.
const SCALING_FACTOR: f64 = 0.1;
/// Shared prefix length considered for the Winkler bonus.
const MAX_PREFIX_LENGTH: usize = 4;
/// The bonus is applied only when the base Jaro score exceeds this.
const BOOST_THRESHOLD: f64 = 0.7;

/// Compute Jaro similarity between two strings.
///
/// 1. Find matching characters within a window of
///    `floor(max(|s1|,|s2|)/2) - 1`
/// 2. Count transpositions (matched characters in different order)
/// 3. `Jaro = (m/|s1| + m/|s2| + (m-t)/m) / 3`
///    where m = matches, t = transpositions/2
///
/// Two empty strings are identical and score 1.0; one empty string
/// scores 0.0 against any non-empty string.
pub fn jaro_similarity(s1: &str, s2: &str) -> f64 {
    if s1.is_empty() && s2.is_empty() {
        return 1.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    // Match window: floor(max(len1, len2) / 2) - 1
    let match_window = (len1.max(len2) / 2).saturating_sub(1);

    let mut s1_matches = vec![false; len1];
    let mut s2_matches = vec![false; len2];

    let mut matches = 0usize;

    for i in 0..len1 {
        let start = i.saturating_sub(match_window);
        let end = (i + match_window + 1).min(len2);

        for j in start..end {
            if s2_matches[j] || s1_chars[i] != s2_chars[j] {
                continue;
            }
            s1_matches[i] = true;
            s2_matches[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Count transpositions among matched characters
    let mut transpositions = 0usize;
    let mut k = 0usize;
    for i in 0..len1 {
        if !s1_matches[i] {
            continue;
        }
        while !s2_matches[k] {
            k += 1;
        }
        if s1_chars[i] != s2_chars[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = (transpositions / 2) as f64;

    (m / len1 as f64 + m / len2 as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler similarity with prefix bonus.
///
/// `JW = Jaro + (prefix_len × 0.1 × (1 - Jaro))`, with the shared prefix
/// capped at 4 characters. The bonus is applied only when the base Jaro
/// score exceeds 0.7, per the canonical definition.
///
/// Symmetric: `jaro_winkler_similarity(a, b) == jaro_winkler_similarity(b, a)`.
///
/// # Example
/// ```
/// use screenx_core::jaro::{jaro_similarity, jaro_winkler_similarity};
///
/// let jaro = jaro_similarity("jonathan", "jonathon");
/// let jw = jaro_winkler_similarity("jonathan", "jonathon");
/// assert!(jw >= jaro);
/// ```
pub fn jaro_winkler_similarity(s1: &str, s2: &str) -> f64 {
    let jaro = jaro_similarity(s1, s2);
    if jaro <= BOOST_THRESHOLD {
        return jaro;
    }

    let prefix_len = s1
        .chars()
        .zip(s2.chars())
        .take(MAX_PREFIX_LENGTH)
        .take_while(|(c1, c2)| c1 == c2)
        .count();

    jaro + (prefix_len as f64 * SCALING_FACTOR * (1.0 - jaro))
}

/// Fail-safe Jaro-Winkler comparison used by the batch engine.
///
/// A panic inside the metric scores the pair 0.0 instead of unwinding
/// into the batch, so one bad comparison never aborts a whole match.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    std::panic::catch_unwind(|| jaro_winkler_similarity(s1, s2)).unwrap_or(0.0)
}
