// src/processing/truncate.rs

/// Truncates `text` to at most `max_chars` characters, never splitting a UTF-8 sequence.
///
/// # Examples
/// ```
/// use readmeify::processing::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("abc", 10), "abc");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Length in characters, the unit every per-file cap is expressed in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
