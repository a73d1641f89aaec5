//! Text helpers shared by the engine: case folding, collation, word search.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Trim and lowercase a free-text query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring test. `needle` must already be lowercase.
#[inline]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive test for `word` standing on its own.
///
/// Neighbouring characters must not be alphanumeric, so `"Won the Major"`
/// and `"won."` match while `"Swonky"` does not.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    let word = word.to_lowercase();
    if word.is_empty() {
        return false;
    }
    let hay = haystack.to_lowercase();
    hay.match_indices(word.as_str()).any(|(start, m)| {
        let before = hay[..start].chars().next_back();
        let after = hay[start + m.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Collation used for option lists.
///
/// Primary key is the case-folded base letters (NFD with combining marks
/// removed), so `"Éclair"` sorts with the other `e` words. Ties break on
/// accents (unaccented first), then lowercase-first case, then code point.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
        .unwrap_or(Ordering::Equal)
}
