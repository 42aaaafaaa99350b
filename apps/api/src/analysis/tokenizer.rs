/// Minimum token length kept by `tokenize` is this plus one.
const MAX_DISCARDED_LEN: usize = 2;

/// Lower-cases `text`, turns everything outside `[a-z0-9]` and whitespace into a space,
/// and returns the remaining words longer than two characters, in text order.
///
/// Non-ASCII letters are treated as punctuation and stripped.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > MAX_DISCARDED_LEN)
        .map(str::to_string)
        .collect()
}
