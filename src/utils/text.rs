//! Text normalization helpers.

use unicode_normalization::UnicodeNormalization;

/// Fold a name into a comparison key.
///
/// NFKD-decomposes the string so combining accents separate from their base
/// letters, keeps ASCII alphanumerics only and lowercases the result:
/// "Éric" folds to "eric". The key is used for identifier matching, never
/// for display.
pub fn fold_key(name: &str) -> String {
    name.nfkd()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Make a filename segment safe: spaces become underscores and the accented
/// letters the HAL facet labels actually contain (é, è, à) lose their
/// accents. Deliberately not full diacritic stripping.
pub fn filename_safe(segment: &str) -> String {
    segment
        .replace(' ', "_")
        .replace('é', "e")
        .replace('è', "e")
        .replace('à', "a")
}

/// Uppercase the first letter and lowercase the rest, the form author names
/// take in exported rows.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
