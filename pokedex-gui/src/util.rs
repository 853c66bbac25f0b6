/// Title-case each word, treating spaces and hyphens as word breaks.
///
/// `"grass"` becomes `"Grass"`, `"ho-oh"` becomes `"Ho-Oh"`.
pub fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = ch.is_whitespace() || ch == '-';
    }
    out
}

/// Comma-separated list, or an em-dash placeholder when empty.
pub fn join_or_placeholder(items: &[String]) -> String {
    if items.is_empty() {
        "\u{2014}".to_string()
    } else {
        items.join(", ")
    }
}
