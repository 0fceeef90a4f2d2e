//! Character and word helpers.
//!
//! Lengths are counted in chars so that truncation never splits a code point.

/// Number of chars in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Keep at most `max` chars of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Cut `text` to `limit - 3` chars and append `...`, for a total of `limit`.
pub fn ellipsize(text: &str, limit: usize) -> String {
    let mut out = truncate_chars(text, limit.saturating_sub(3));
    out.push_str("...");
    out
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split a delimited cell into trimmed, non-empty items.
pub fn split_list(raw: &str, delimiter: char) -> Vec<String> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipsize_respects_limit() {
        let text = "x".repeat(100);
        let out = ellipsize(&text, 85);
        assert_eq!(char_len(&out), 85);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("café crème", 4), "café");
        assert_eq!(char_len("café"), 4);
    }

    #[test]
    fn split_list_drops_blank_items() {
        assert_eq!(
            split_list(" Sturdy, ,Reliable ,, Efficient", ','),
            vec!["Sturdy", "Reliable", "Efficient"]
        );
        assert!(split_list("", ',').is_empty());
    }
}
