use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

fn remove_accents(s: &str) -> String {
    s.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

/// Locale-aware ordering for vocabulary terms.
///
/// Base letters decide first (accents and case ignored), then case-folded
/// text, then the raw text so the order is total and deterministic.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    remove_accents(&a_lower)
        .cmp(&remove_accents(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| a.cmp(b))
}
