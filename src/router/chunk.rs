//! Splitting long replies to fit Discord's message limit.

/// Characters per reply chunk, below Discord's 2000 limit.
pub const MAX_CHUNK_CHARS: usize = 1900;

/// Splits `text` into ordered, contiguous pieces of at most `max_chars`
/// characters each.
///
/// Boundaries fall on character counts only; words and markdown are not
/// taken into account. Empty input yields no chunks.
#[must_use]
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}
