//! Jaro-Winkler string similarity.

use rapidfuzz::distance::jaro_winkler;

/// Jaro-Winkler similarity in `[0, 1]`.
///
/// Match window `max(len) / 2 - 1`, half-transposition counting and a 0.1
/// prefix bonus per shared leading character (at most four). Identical
/// strings score 1.0; strings with no matches inside the window score 0.0.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    jaro_winkler::similarity(a.chars(), b.chars())
}
