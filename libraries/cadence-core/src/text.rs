//! Case-insensitive text matching shared by the library store and sources

/// Normalize a search query for matching
///
/// Returns `None` for empty or whitespace-only queries, which match nothing.
/// Any other query is lowercased as-is; surrounding whitespace is part of
/// the substring.
pub fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Check whether `haystack` contains an already-normalized `needle`
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Check whether an optional field contains an already-normalized `needle`
pub fn option_contains_normalized(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| contains_normalized(h, needle))
}
