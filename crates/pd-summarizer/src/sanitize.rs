//! ASCII filtering for generated summaries.

/// Drop every character outside 7-bit ASCII. No transliteration: `é` is removed, not mapped to `e`.
pub fn to_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}
